//! Ordering comparisons against a threshold.

use std::cmp::Ordering;

use matchforge_core::coerce::compare;
use matchforge_core::{Matcher, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Gt,
    Lt,
    Ge,
    Le,
}

impl Op {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Op::Gt => ordering == Ordering::Greater,
            Op::Lt => ordering == Ordering::Less,
            Op::Ge => ordering != Ordering::Less,
            Op::Le => ordering != Ordering::Greater,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Op::Gt => "is greater than",
            Op::Lt => "is less than",
            Op::Ge => "is greater than or equal to",
            Op::Le => "is less than or equal to",
        }
    }
}

/// Compares values against a fixed threshold.
///
/// Numbers compare across integer and float variants, strings
/// lexicographically. Anything not comparable with the threshold never
/// matches.
#[derive(Debug, Clone)]
pub struct Comparison {
    op: Op,
    threshold: Value,
}

impl Matcher for Comparison {
    fn matches(&self, actual: &Value) -> bool {
        compare(actual, &self.threshold).is_some_and(|ord| self.op.accepts(ord))
    }

    fn describe(&self) -> String {
        format!(
            "{} {} ({})",
            self.op.phrase(),
            self.threshold,
            self.threshold.type_name()
        )
    }
}

/// Matches values strictly greater than `threshold`.
///
/// ```
/// use matchforge_matchers::{gt, Matcher, Value};
///
/// assert!(gt(5).matches(&Value::from(6.5)));
/// assert!(!gt(5).matches(&Value::from(5u8)));
/// assert_eq!(gt(5).describe(), "is greater than 5 (int)");
/// ```
pub fn gt(threshold: impl Into<Value>) -> Comparison {
    Comparison {
        op: Op::Gt,
        threshold: threshold.into(),
    }
}

/// Matches values strictly less than `threshold`.
pub fn lt(threshold: impl Into<Value>) -> Comparison {
    Comparison {
        op: Op::Lt,
        threshold: threshold.into(),
    }
}

/// Matches values greater than or equal to `threshold`.
pub fn ge(threshold: impl Into<Value>) -> Comparison {
    Comparison {
        op: Op::Ge,
        threshold: threshold.into(),
    }
}

/// Matches values less than or equal to `threshold`.
pub fn le(threshold: impl Into<Value>) -> Comparison {
    Comparison {
        op: Op::Le,
        threshold: threshold.into(),
    }
}
