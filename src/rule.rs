// SPDX-License-Identifier: MIT

//! The base rule capability

/// Trait for rules that evaluate to a boolean outcome.
///
/// This is the polymorphism seam: comparison rules and any other rule
/// kind share it, so callers can hold heterogeneous rules as
/// `Box<dyn Rule>`.
pub trait Rule {
    /// Evaluate the rule against its current inputs.
    fn evaluate(&self) -> bool;

    /// Render a human-readable description of the rule, optionally
    /// appending the live evaluation outcome.
    fn describe(&self, with_outcome: bool) -> String;
}
