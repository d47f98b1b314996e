//! Order-independent matching over sequences.

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Shape, Value};
use matchforge_engine::{DiagnosticComposer, MatchMode, Outcome, UnorderedEngine};

/// Pairs each inner matcher with a distinct sequence element.
///
/// In [`MatchMode::Subset`] extra elements are ignored; in
/// [`MatchMode::Full`] every element must be claimed as well.
pub struct UnorderedMatcher {
    elements: Vec<BoxedMatcher>,
    mode: MatchMode,
}

impl UnorderedMatcher {
    pub fn new(elements: Vec<BoxedMatcher>, mode: MatchMode) -> Self {
        Self { elements, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    fn outcome(&self, items: &[Value]) -> Outcome {
        UnorderedEngine::new(self.mode).run(&self.elements, items, |m, item| m.matches(item))
    }
}

impl Matcher for UnorderedMatcher {
    fn matches(&self, actual: &Value) -> bool {
        match actual.shape() {
            Shape::Linear(items) => self.outcome(items).is_match(),
            Shape::Associative(_) | Shape::Scalar => false,
        }
    }

    fn describe(&self) -> String {
        let prefix = match self.mode {
            MatchMode::Subset => "contains elements matching",
            MatchMode::Full => "has elements matching (in any order)",
        };
        format!("{prefix} [{}]", join_descriptions(&self.elements))
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        match actual.shape() {
            Shape::Linear(items) => DiagnosticComposer::new(self.mode)
                .compose(&self.outcome(items), |i| self.elements[i].describe()),
            Shape::Associative(_) | Shape::Scalar => {
                Diagnostic::Present(format!("type {} isn't iterable", actual.type_name()))
            }
        }
    }
}

/// Matches sequences containing, in any order, a distinct element for each
/// of `elements`. Extra elements are allowed.
///
/// ```
/// use matchforge_matchers::{contains, Matcher, Value};
///
/// let m = contains(["b"]);
/// assert!(m.matches(&Value::from(vec!["a", "b"])));
/// assert_eq!(m.describe(), "contains elements matching [is equal to \"b\" (string)]");
/// ```
pub fn contains<I>(elements: I) -> UnorderedMatcher
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    UnorderedMatcher::new(boxed(elements), MatchMode::Subset)
}

/// Matches sequences that are a permutation of elements satisfying
/// `elements`, one each.
pub fn unordered_elements_are<I>(elements: I) -> UnorderedMatcher
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    UnorderedMatcher::new(boxed(elements), MatchMode::Full)
}

pub(crate) fn boxed<I>(elements: I) -> Vec<BoxedMatcher>
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    elements.into_iter().map(IntoMatcher::into_matcher).collect()
}

pub(crate) fn join_descriptions<M: Matcher>(matchers: &[M]) -> String {
    matchers
        .iter()
        .map(Matcher::describe)
        .collect::<Vec<_>>()
        .join("; ")
}
