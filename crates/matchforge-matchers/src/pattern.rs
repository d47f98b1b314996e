//! Regular expression matchers over strings and UTF-8 byte strings.

use matchforge_core::{Diagnostic, Matcher, Value};
use regex::Regex;

use crate::text::explain_non_text;

/// Tests text against a compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    pattern: String,
}

impl RegexMatcher {
    /// The pattern as written by the caller, before anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for RegexMatcher {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .as_text()
            .is_some_and(|text| self.regex.is_match(text))
    }

    fn describe(&self) -> String {
        format!("matches regex '{}'", self.pattern)
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        explain_non_text(actual)
    }
}

/// Matches text that `pattern` matches in full.
///
/// The pattern is wrapped in a non-capturing group before anchoring, so
/// alternations such as `a|b` still have to cover the whole text.
///
/// # Errors
///
/// Returns the compile error for an invalid pattern.
///
/// ```
/// use matchforge_matchers::{matches_regex, Matcher, Value};
///
/// let word = matches_regex(r"\w+").unwrap();
/// assert!(word.matches(&Value::from("hello")));
/// assert!(!word.matches(&Value::from("hello, world")));
/// assert_eq!(word.describe(), r"matches regex '\w+'");
/// assert!(matches_regex("(").is_err());
/// ```
pub fn matches_regex(pattern: impl Into<String>) -> Result<RegexMatcher, regex::Error> {
    let pattern = pattern.into();
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(RegexMatcher { regex, pattern })
}

/// Matches text containing a match for `pattern` anywhere.
///
/// # Errors
///
/// Returns the compile error for an invalid pattern.
pub fn contains_regex(pattern: impl Into<String>) -> Result<RegexMatcher, regex::Error> {
    let pattern = pattern.into();
    let regex = Regex::new(&pattern)?;
    Ok(RegexMatcher { regex, pattern })
}
