// SPDX-License-Identifier: MIT

//! Left/right-hand comparison rules
//!
//! A `ComparisonRule` binds two `Value`s and a `Comparator` into a
//! single boolean test:
//! - `ComparisonRule::new(5, Comparator::Gt, 3)`
//! - `ComparisonRule::new(Value::dynamic_named("reading", || sensor()), Comparator::LtEq, limit)`

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use crate::rule::Rule;
use crate::value::Value;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// equal
    Eq,
    /// not equal
    Neq,
    /// greater than
    Gt,
    /// greater than or equal
    GtEq,
    /// lesser than
    Lt,
    /// lesser than or equal
    LtEq,
}

impl Comparator {
    /// Apply this operator to a three-way ordering.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Comparator::Eq => ordering == Ordering::Equal,
            Comparator::Neq => ordering != Ordering::Equal,
            Comparator::Lt => ordering == Ordering::Less,
            Comparator::Gt => ordering == Ordering::Greater,
            Comparator::LtEq => ordering != Ordering::Greater,
            Comparator::GtEq => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Eq => write!(f, "eq"),
            Comparator::Neq => write!(f, "neq"),
            Comparator::Gt => write!(f, "gt"),
            Comparator::GtEq => write!(f, "gt_eq"),
            Comparator::Lt => write!(f, "lt"),
            Comparator::LtEq => write!(f, "lt_eq"),
        }
    }
}

impl FromStr for Comparator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Comparator::Eq),
            "neq" => Ok(Comparator::Neq),
            "gt" => Ok(Comparator::Gt),
            "gt_eq" => Ok(Comparator::GtEq),
            "lt" => Ok(Comparator::Lt),
            "lt_eq" => Ok(Comparator::LtEq),
            other => Err(RuleError::UnsupportedComparator(other.to_string())),
        }
    }
}

/// A simple left-right hand comparison between two orderable values.
///
/// Both sides resolve freshly on every evaluation, so a rule over
/// dynamic values can flip its outcome between calls. The rule itself
/// is immutable after construction.
pub struct ComparisonRule<T> {
    lhs: Value<T>,
    rhs: Value<T>,
    comparator: Comparator,
}

impl<T: Ord + Clone> ComparisonRule<T> {
    /// Build a rule from two sides and an operator.
    ///
    /// Each side accepts a raw literal or a pre-built `Value`; literals
    /// are lifted into constant values.
    pub fn new(lhs: impl Into<Value<T>>, comparator: Comparator, rhs: impl Into<Value<T>>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
            comparator,
        }
    }

    /// The operator this rule applies.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// Resolve both sides once and apply the operator to their
    /// three-way ordering.
    pub fn evaluate(&self) -> bool {
        let l = self.lhs.get();
        let r = self.rhs.get();

        let ordering = l.cmp(&r);
        let outcome = self.comparator.matches(ordering);
        log::trace!("compare: {:?} {} -> {}", ordering, self.comparator, outcome);
        outcome
    }
}

impl<T: Ord + Clone + fmt::Display> Rule for ComparisonRule<T> {
    fn evaluate(&self) -> bool {
        ComparisonRule::evaluate(self)
    }

    fn describe(&self, with_outcome: bool) -> String {
        let mut out = format!(
            "Is {} [{}] {} to {} [{}] ?",
            self.lhs.describe(),
            self.lhs.get(),
            self.comparator,
            self.rhs.describe(),
            self.rhs.get(),
        );
        if with_outcome {
            out.push(' ');
            out.push_str(&self.evaluate().to_string());
            out.push('!');
        }
        out
    }
}
