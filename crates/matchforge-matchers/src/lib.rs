//! matchforge Matchers - leaf predicates and collection matchers
//!
//! Leaf matchers test a single [`Value`]: comparisons, text, regular
//! expressions, length, error messages and logical combinators. Collection
//! matchers hold other matchers and compose recursively; the unordered ones
//! are backed by `matchforge-engine`.
//!
//! Anything implementing [`IntoMatcher`] can stand in for a matcher, so plain
//! values compare by equality:
//!
//! ```
//! use matchforge_matchers::{contains, len, Matcher, Value};
//!
//! // Both matchers want the single element "a".
//! let m = contains![len(1), "a"];
//! assert!(!m.matches(&Value::from(vec!["a", "bbb", "ccc"])));
//! assert!(contains(["a"]).matches(&Value::from(vec!["a", "bbb"])));
//! ```

pub mod comparison;
pub mod container;
pub mod errors;
pub mod length;
pub mod logical;
pub mod pattern;
pub mod text;

pub use comparison::{ge, gt, le, lt, Comparison};
pub use container::{
    contains, elements_are, key_value, map_contains, map_contains_kvs, map_is, map_is_kvs,
    unordered_elements_are, KeyValueMatcher, MapEntriesMatcher, MapMatcher, OrderedMatcher,
    UnorderedMatcher,
};
pub use errors::{error_message, ErrorMessageMatcher};
pub use length::{empty, len, EmptyMatcher, LenMatcher};
pub use logical::{anything, not, Anything, Not};
pub use pattern::{contains_regex, matches_regex, RegexMatcher};
pub use text::{ends_with, has_substring, starts_with, TextMatcher};

pub use matchforge_core::{eq, BoxedMatcher, Diagnostic, EqMatcher, IntoMatcher, Matcher, Value};
pub use matchforge_engine::MatchMode;

/// Builds a [`contains`] matcher from matchers of mixed types.
#[macro_export]
macro_rules! contains {
    ($($m:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::BoxedMatcher> =
            ::std::vec![$($crate::IntoMatcher::into_matcher($m)),*];
        $crate::contains(elements)
    }};
}

/// Builds an [`unordered_elements_are`] matcher from matchers of mixed types.
#[macro_export]
macro_rules! unordered_elements_are {
    ($($m:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::BoxedMatcher> =
            ::std::vec![$($crate::IntoMatcher::into_matcher($m)),*];
        $crate::unordered_elements_are(elements)
    }};
}

/// Builds an [`elements_are`] matcher from matchers of mixed types.
#[macro_export]
macro_rules! elements_are {
    ($($m:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::BoxedMatcher> =
            ::std::vec![$($crate::IntoMatcher::into_matcher($m)),*];
        $crate::elements_are(elements)
    }};
}

/// Builds a [`map_is`] matcher: `map_is!{"a" => 1, "b" => gt(1)}`.
#[macro_export]
macro_rules! map_is {
    ($($k:expr => $m:expr),* $(,)?) => {{
        let entries: ::std::vec::Vec<($crate::Value, $crate::BoxedMatcher)> =
            ::std::vec![$(($crate::Value::from($k), $crate::IntoMatcher::into_matcher($m))),*];
        $crate::map_is(entries)
    }};
}

/// Builds a [`map_contains`] matcher: `map_contains!{"a" => lt(2)}`.
#[macro_export]
macro_rules! map_contains {
    ($($k:expr => $m:expr),* $(,)?) => {{
        let entries: ::std::vec::Vec<($crate::Value, $crate::BoxedMatcher)> =
            ::std::vec![$(($crate::Value::from($k), $crate::IntoMatcher::into_matcher($m))),*];
        $crate::map_contains(entries)
    }};
}
