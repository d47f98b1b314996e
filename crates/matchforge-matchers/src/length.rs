//! Length and emptiness.

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Value};

/// Applies an inner matcher to the length of a value.
pub struct LenMatcher {
    inner: BoxedMatcher,
}

impl Matcher for LenMatcher {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .len()
            .is_some_and(|n| self.inner.matches(&Value::from(n)))
    }

    fn describe(&self) -> String {
        format!("has length which {}", self.inner.describe())
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        match actual.len() {
            Some(n) => Diagnostic::Present(format!("length is {n}")),
            None => Diagnostic::Present(format!(
                "type {} doesn't have a length",
                actual.type_name()
            )),
        }
    }
}

/// Matches values whose length satisfies `inner`.
///
/// Strings are measured in bytes.
///
/// ```
/// use matchforge_matchers::{len, lt, Matcher, Value};
///
/// assert!(len(2).matches(&Value::from(vec![1, 2])));
/// assert!(len(lt(3)).matches(&Value::from("ab")));
/// assert_eq!(len(2).describe(), "has length which is equal to 2 (int)");
/// ```
pub fn len(inner: impl IntoMatcher) -> LenMatcher {
    LenMatcher {
        inner: inner.into_matcher(),
    }
}

/// Matches values with a length of zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyMatcher;

impl Matcher for EmptyMatcher {
    fn matches(&self, actual: &Value) -> bool {
        actual.len() == Some(0)
    }

    fn describe(&self) -> String {
        "is empty".to_string()
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        match actual.len() {
            Some(n) => Diagnostic::Present(format!("length is {n}")),
            None => Diagnostic::Present(format!(
                "type {} doesn't have a length",
                actual.type_name()
            )),
        }
    }
}

pub fn empty() -> EmptyMatcher {
    EmptyMatcher
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_explanations() {
        let m = len(3);
        assert!(!m.matches(&Value::from("ab")));
        assert_eq!(
            m.explain_failure(&Value::from("ab")),
            Diagnostic::Present("length is 2".to_string())
        );
        assert_eq!(
            m.explain_failure(&Value::from(true)),
            Diagnostic::Present("type bool doesn't have a length".to_string())
        );
    }

    #[test]
    fn test_empty() {
        assert!(empty().matches(&Value::from("")));
        assert!(empty().matches(&Value::map(Vec::<(i32, i32)>::new())));
        assert!(!empty().matches(&Value::from(vec![0])));
        assert!(!empty().matches(&Value::Null));
        assert_eq!(empty().describe(), "is empty");
    }
}
