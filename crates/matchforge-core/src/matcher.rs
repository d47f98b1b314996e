//! The matcher capability.
//!
//! A matcher is a named, describable boolean test over one [`Value`].
//! Container matchers hold other matchers, so matchers compose recursively.

use crate::eq::eq;
use crate::value::Value;

/// Optional explanation of why a value failed a matcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Diagnostic {
    /// A human-readable explanation.
    Present(String),
    /// Nothing useful to add beyond the matcher's description.
    #[default]
    Absent,
}

impl Diagnostic {
    pub fn is_present(&self) -> bool {
        matches!(self, Diagnostic::Present(_))
    }

    /// Returns the explanation text, or `fallback` when absent.
    pub fn unwrap_or(self, fallback: impl Into<String>) -> String {
        match self {
            Diagnostic::Present(text) => text,
            Diagnostic::Absent => fallback.into(),
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Diagnostic::Present(text) => Some(text),
            Diagnostic::Absent => None,
        }
    }
}

impl From<Option<String>> for Diagnostic {
    fn from(v: Option<String>) -> Self {
        v.map_or(Diagnostic::Absent, Diagnostic::Present)
    }
}

/// A predicate over one value.
///
/// Implementations must be pure: the same input always yields the same
/// result, and evaluation has no side effects beyond logging. Container
/// matchers evaluate their children many times per call.
///
/// # Example
///
/// ```
/// use matchforge_core::{Diagnostic, Matcher, Value};
///
/// struct IsEven;
///
/// impl Matcher for IsEven {
///     fn matches(&self, actual: &Value) -> bool {
///         matches!(actual, Value::Int(i) if i % 2 == 0)
///     }
///
///     fn describe(&self) -> String {
///         "is even".to_string()
///     }
/// }
///
/// assert!(IsEven.matches(&Value::from(4)));
/// assert!(!IsEven.matches(&Value::from(3)));
/// assert_eq!(IsEven.explain_failure(&Value::from(3)), Diagnostic::Absent);
/// ```
pub trait Matcher: Send + Sync {
    /// Returns true if `actual` satisfies this matcher.
    fn matches(&self, actual: &Value) -> bool;

    /// Human-readable description, embedded verbatim in diagnostics.
    fn describe(&self) -> String;

    /// Explains a failure for `actual`, when there is more to say than the
    /// description.
    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        let _ = actual;
        Diagnostic::Absent
    }
}

/// An owned, type-erased matcher.
pub type BoxedMatcher = Box<dyn Matcher>;

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        (**self).explain_failure(actual)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        (**self).explain_failure(actual)
    }
}

/// Conversion into a [`BoxedMatcher`].
///
/// Matchers convert as themselves. Plain values convert into an equality
/// matcher, so `"a"` and `eq("a")` are interchangeable wherever a matcher is
/// expected.
///
/// ```
/// use matchforge_core::{IntoMatcher, Matcher, Value};
///
/// let m = "a".into_matcher();
/// assert!(m.matches(&Value::from("a")));
/// assert_eq!(m.describe(), "is equal to \"a\" (string)");
/// ```
pub trait IntoMatcher {
    fn into_matcher(self) -> BoxedMatcher;
}

impl<M: Matcher + 'static> IntoMatcher for M {
    fn into_matcher(self) -> BoxedMatcher {
        Box::new(self)
    }
}

macro_rules! impl_into_matcher_for_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl IntoMatcher for $t {
                fn into_matcher(self) -> BoxedMatcher {
                    Box::new(eq(self))
                }
            }
        )+
    };
}

impl_into_matcher_for_value!(
    Value, bool, char, String, &str, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32,
    f64,
);
