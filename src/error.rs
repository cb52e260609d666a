// SPDX-License-Identifier: MIT

//! Typed error handling for ruleval-rs

use thiserror::Error;

/// Errors raised at the comparator token boundary.
///
/// Evaluation itself cannot fail at this layer: the comparator
/// enumeration is closed, and resolution failures inside dynamic
/// sources are the source's own contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// Comparator token outside the six-operator set
    #[error("Comparator '{0}' not supported")]
    UnsupportedComparator(String),
}
