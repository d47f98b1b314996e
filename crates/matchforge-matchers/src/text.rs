//! Matchers over strings and UTF-8 byte strings.

use matchforge_core::{Diagnostic, Matcher, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextOp {
    StartsWith,
    EndsWith,
    Contains,
}

/// Tests the text content of a value against a fixed fragment.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    op: TextOp,
    fragment: String,
}

impl Matcher for TextMatcher {
    fn matches(&self, actual: &Value) -> bool {
        let Some(text) = actual.as_text() else {
            return false;
        };
        match self.op {
            TextOp::StartsWith => text.starts_with(&self.fragment),
            TextOp::EndsWith => text.ends_with(&self.fragment),
            TextOp::Contains => text.contains(&self.fragment),
        }
    }

    fn describe(&self) -> String {
        let verb = match self.op {
            TextOp::StartsWith => "starts with",
            TextOp::EndsWith => "ends with",
            TextOp::Contains => "has substring",
        };
        format!("{verb} '{}'", self.fragment)
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        explain_non_text(actual)
    }
}

/// Explanation shared by matchers that only accept text.
pub(crate) fn explain_non_text(actual: &Value) -> Diagnostic {
    if actual.as_text().is_some() {
        Diagnostic::Absent
    } else {
        Diagnostic::Present(format!(
            "value is of type {}, not a string",
            actual.type_name()
        ))
    }
}

/// Matches text beginning with `prefix`.
///
/// ```
/// use matchforge_matchers::{starts_with, Matcher, Value};
///
/// assert!(starts_with("he").matches(&Value::from("hello")));
/// assert!(starts_with("he").matches(&Value::bytes(*b"hey")));
/// assert_eq!(starts_with("he").describe(), "starts with 'he'");
/// ```
pub fn starts_with(prefix: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::StartsWith,
        fragment: prefix.into(),
    }
}

/// Matches text ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::EndsWith,
        fragment: suffix.into(),
    }
}

/// Matches text containing `fragment` anywhere.
pub fn has_substring(fragment: impl Into<String>) -> TextMatcher {
    TextMatcher {
        op: TextOp::Contains,
        fragment: fragment.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_ops() {
        assert!(ends_with("lo").matches(&Value::from("hello")));
        assert!(has_substring("ell").matches(&Value::from("hello")));
        assert!(!has_substring("z").matches(&Value::from("hello")));
        assert_eq!(has_substring("a").describe(), "has substring 'a'");
        assert_eq!(ends_with("!").describe(), "ends with '!'");
    }

    #[test]
    fn test_non_text_is_explained() {
        let m = starts_with("1");
        assert!(!m.matches(&Value::from(12)));
        assert_eq!(
            m.explain_failure(&Value::from(12)),
            Diagnostic::Present("value is of type int, not a string".to_string())
        );
        assert_eq!(m.explain_failure(&Value::from("x")), Diagnostic::Absent);
    }

    #[test]
    fn test_invalid_utf8_bytes_never_match() {
        let m = has_substring("");
        assert!(!m.matches(&Value::bytes(vec![0xff, 0xfe])));
    }
}
