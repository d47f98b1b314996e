//! Key/value pair predicates and the unordered map matchers built on them.

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Shape, Value};
use matchforge_engine::{DiagnosticComposer, MatchMode, Outcome, UnorderedEngine};

use super::unordered::join_descriptions;

/// A predicate over one map entry: a key matcher and a value matcher that
/// must both accept.
pub struct KeyValueMatcher {
    key: BoxedMatcher,
    value: BoxedMatcher,
}

impl KeyValueMatcher {
    /// Returns true if both halves accept the entry.
    pub fn accepts(&self, key: &Value, value: &Value) -> bool {
        self.key.matches(key) && self.value.matches(value)
    }
}

impl Matcher for KeyValueMatcher {
    /// As a standalone matcher, accepts a two-element `[key, value]`
    /// sequence.
    fn matches(&self, actual: &Value) -> bool {
        match actual.shape() {
            Shape::Linear([key, value]) => self.accepts(key, value),
            _ => false,
        }
    }

    fn describe(&self) -> String {
        format!("key ({}) -> {}", self.key.describe(), self.value.describe())
    }
}

/// Creates an entry predicate. Plain values on either side compare by
/// equality.
///
/// ```
/// use matchforge_matchers::{key_value, starts_with, Matcher, Value};
///
/// let kv = key_value(starts_with("b"), 2);
/// assert!(kv.accepts(&Value::from("bx"), &Value::from(2)));
/// assert!(kv.matches(&Value::seq([Value::from("bx"), Value::from(2)])));
/// assert!(!kv.matches(&Value::seq(["bx", "y"])));
/// assert_eq!(kv.describe(), "key (starts with 'b') -> is equal to 2 (int)");
/// ```
pub fn key_value(key: impl IntoMatcher, value: impl IntoMatcher) -> KeyValueMatcher {
    KeyValueMatcher {
        key: key.into_matcher(),
        value: value.into_matcher(),
    }
}

/// Pairs each entry predicate with a distinct map entry.
///
/// The map's entries, in their stored order, are the elements the engine
/// sees; entry indices in diagnostics refer to that order.
pub struct MapEntriesMatcher {
    pairs: Vec<KeyValueMatcher>,
    mode: MatchMode,
}

impl MapEntriesMatcher {
    pub fn new(pairs: Vec<KeyValueMatcher>, mode: MatchMode) -> Self {
        Self { pairs, mode }
    }

    fn outcome(&self, entries: &[(Value, Value)]) -> Outcome {
        UnorderedEngine::new(self.mode).run(&self.pairs, entries, |pair, (k, v)| pair.accepts(k, v))
    }
}

impl Matcher for MapEntriesMatcher {
    fn matches(&self, actual: &Value) -> bool {
        match actual.shape() {
            Shape::Associative(entries) => self.outcome(entries).is_match(),
            Shape::Linear(_) | Shape::Scalar => false,
        }
    }

    fn describe(&self) -> String {
        let prefix = match self.mode {
            MatchMode::Subset => "contains",
            MatchMode::Full => "has",
        };
        format!("{prefix} map entries [{}]", join_descriptions(&self.pairs))
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        match actual.shape() {
            Shape::Associative(entries) => DiagnosticComposer::new(self.mode)
                .compose(&self.outcome(entries), |i| self.pairs[i].describe()),
            Shape::Linear(_) | Shape::Scalar => {
                Diagnostic::Present(format!("type {} isn't a map", actual.type_name()))
            }
        }
    }
}

/// Matches maps holding, for each pair predicate, a distinct matching entry.
/// Other entries are allowed.
///
/// ```
/// use matchforge_matchers::{gt, key_value, map_contains_kvs, starts_with, Matcher, Value};
///
/// let m = map_contains_kvs([key_value(starts_with("b"), gt(1))]);
/// assert!(m.matches(&Value::map([("a", 1), ("b", 2)])));
/// ```
pub fn map_contains_kvs(pairs: impl IntoIterator<Item = KeyValueMatcher>) -> MapEntriesMatcher {
    MapEntriesMatcher::new(pairs.into_iter().collect(), MatchMode::Subset)
}

/// Matches maps whose entries pair up one-to-one with `pairs`.
pub fn map_is_kvs(pairs: impl IntoIterator<Item = KeyValueMatcher>) -> MapEntriesMatcher {
    MapEntriesMatcher::new(pairs.into_iter().collect(), MatchMode::Full)
}
