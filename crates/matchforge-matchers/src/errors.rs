//! Matchers over errors captured with [`Value::error`].

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Value};

/// Applies an inner matcher to an error's message.
pub struct ErrorMessageMatcher {
    inner: BoxedMatcher,
}

impl Matcher for ErrorMessageMatcher {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .error_message()
            .is_some_and(|message| self.inner.matches(&Value::from(message)))
    }

    fn describe(&self) -> String {
        format!("is an error with message that {}", self.inner.describe())
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        match actual.error_message() {
            Some(message) => self.inner.explain_failure(&Value::from(message)),
            None => Diagnostic::Present(format!("type {} isn't an error", actual.type_name())),
        }
    }
}

/// Matches errors whose `Display` text satisfies `inner`.
///
/// ```
/// use matchforge_matchers::{error_message, has_substring, Matcher, Value};
///
/// let err = "x".parse::<i32>().unwrap_err();
/// assert!(error_message(has_substring("invalid digit")).matches(&Value::error(&err)));
/// assert!(!error_message(has_substring("invalid digit")).matches(&Value::from("invalid digit")));
/// ```
pub fn error_message(inner: impl IntoMatcher) -> ErrorMessageMatcher {
    ErrorMessageMatcher {
        inner: inner.into_matcher(),
    }
}
