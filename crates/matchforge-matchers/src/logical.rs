//! Matchers that combine or ignore other matchers.

use matchforge_core::{BoxedMatcher, IntoMatcher, Matcher, Value};

/// Matches every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl Matcher for Anything {
    fn matches(&self, _actual: &Value) -> bool {
        true
    }

    fn describe(&self) -> String {
        "is anything".to_string()
    }
}

pub fn anything() -> Anything {
    Anything
}

/// Inverts another matcher.
pub struct Not {
    inner: BoxedMatcher,
}

impl Matcher for Not {
    fn matches(&self, actual: &Value) -> bool {
        !self.inner.matches(actual)
    }

    fn describe(&self) -> String {
        format!("not({})", self.inner.describe())
    }
}

/// Matches values that `inner` rejects. Plain values are compared by
/// equality.
///
/// ```
/// use matchforge_matchers::{not, Matcher, Value};
///
/// assert!(not("a").matches(&Value::from("b")));
/// assert_eq!(not("a").describe(), "not(is equal to \"a\" (string))");
/// ```
pub fn not(inner: impl IntoMatcher) -> Not {
    Not {
        inner: inner.into_matcher(),
    }
}
