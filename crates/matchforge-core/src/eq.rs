//! Structural equality, the default leaf matcher.

use crate::matcher::{Diagnostic, Matcher};
use crate::value::Value;

/// Creates a matcher for values structurally equal to `expected`.
///
/// # Example
///
/// ```
/// use matchforge_core::{eq, Matcher, Value};
///
/// let m = eq(3);
/// assert!(m.matches(&Value::from(3u64)));
/// assert!(!m.matches(&Value::from(4)));
/// assert_eq!(m.describe(), "is equal to 3 (int)");
/// ```
pub fn eq(expected: impl Into<Value>) -> EqMatcher {
    EqMatcher {
        expected: expected.into(),
    }
}

/// Matches values structurally equal to an expected value.
///
/// Created by [`eq()`], or implicitly when a plain value is used as a matcher.
#[derive(Debug, Clone)]
pub struct EqMatcher {
    expected: Value,
}

impl EqMatcher {
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Matcher for EqMatcher {
    fn matches(&self, actual: &Value) -> bool {
        actual.structurally_eq(&self.expected)
    }

    fn describe(&self) -> String {
        format!(
            "is equal to {} ({})",
            self.expected,
            self.expected.type_name()
        )
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        let comparable = actual.type_name() == self.expected.type_name()
            || (actual.is_numeric() && self.expected.is_numeric());
        if comparable {
            Diagnostic::Absent
        } else {
            Diagnostic::Present(format!(
                "type {} differs from expected type {}",
                actual.type_name(),
                self.expected.type_name()
            ))
        }
    }
}
