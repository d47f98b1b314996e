//! Map matching by exact key lookup.

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Shape, Value};

/// Looks up each expected key and applies its matcher to the stored value.
///
/// Keys compare by structural equality, so no pairing search is needed.
pub struct MapMatcher {
    entries: Vec<(Value, BoxedMatcher)>,
    exact: bool,
}

impl MapMatcher {
    fn new<I, K, M>(entries: I, exact: bool) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<Value>,
        M: IntoMatcher,
    {
        let mut entries: Vec<(Value, BoxedMatcher)> = entries
            .into_iter()
            .map(|(k, m)| (k.into(), m.into_matcher()))
            .collect();
        // Hashed inputs arrive in arbitrary order; descriptions must not.
        entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        Self { entries, exact }
    }
}

impl Matcher for MapMatcher {
    fn matches(&self, actual: &Value) -> bool {
        let Shape::Associative(stored) = actual.shape() else {
            return false;
        };
        if self.exact && stored.len() != self.entries.len() {
            return false;
        }
        self.entries
            .iter()
            .all(|(key, m)| actual.get(key).is_some_and(|v| m.matches(v)))
    }

    fn describe(&self) -> String {
        let prefix = if self.exact { "has" } else { "contains" };
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(key, m)| format!("key {key} -> {}", m.describe()))
            .collect();
        format!("{prefix} map entries [{}]", parts.join("; "))
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        let Shape::Associative(stored) = actual.shape() else {
            return Diagnostic::Present(format!("type {} isn't a map", actual.type_name()));
        };
        if self.exact && stored.len() != self.entries.len() {
            return Diagnostic::Present(format!(
                "{} entries expected but got {}",
                self.entries.len(),
                stored.len()
            ));
        }

        let mut clauses = Vec::new();
        for (key, m) in &self.entries {
            match actual.get(key) {
                None => clauses.push(format!("missing key {key}")),
                Some(v) if !m.matches(v) => {
                    let why = m.explain_failure(v).unwrap_or("doesn't match");
                    clauses.push(format!("key {key}: {why}"));
                }
                Some(_) => {}
            }
        }

        if clauses.is_empty() {
            Diagnostic::Absent
        } else {
            Diagnostic::Present(clauses.join("; "))
        }
    }
}

/// Matches maps with exactly the given keys, each value satisfying its
/// matcher.
///
/// ```
/// use matchforge_matchers::{gt, map_is, Matcher, Value};
///
/// let m = map_is([("a", gt(0)), ("b", gt(1))]);
/// assert!(m.matches(&Value::map([("b", 2), ("a", 1)])));
/// assert!(!m.matches(&Value::map([("a", 1), ("b", 2), ("c", 3)])));
/// ```
pub fn map_is<I, K, M>(entries: I) -> MapMatcher
where
    I: IntoIterator<Item = (K, M)>,
    K: Into<Value>,
    M: IntoMatcher,
{
    MapMatcher::new(entries, true)
}

/// Matches maps holding at least the given keys, each value satisfying its
/// matcher.
pub fn map_contains<I, K, M>(entries: I) -> MapMatcher
where
    I: IntoIterator<Item = (K, M)>,
    K: Into<Value>,
    M: IntoMatcher,
{
    MapMatcher::new(entries, false)
}
