//! Position-sensitive sequence matching.

use matchforge_core::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher, Shape, Value};

use super::unordered::{boxed, join_descriptions};

/// Requires element `i` of a sequence to satisfy matcher `i`, with equal
/// lengths.
pub struct OrderedMatcher {
    elements: Vec<BoxedMatcher>,
}

impl Matcher for OrderedMatcher {
    fn matches(&self, actual: &Value) -> bool {
        match actual.shape() {
            Shape::Linear(items) => {
                items.len() == self.elements.len()
                    && self.elements.iter().zip(items).all(|(m, item)| m.matches(item))
            }
            Shape::Associative(_) | Shape::Scalar => false,
        }
    }

    fn describe(&self) -> String {
        format!("has elements matching [{}]", join_descriptions(&self.elements))
    }

    fn explain_failure(&self, actual: &Value) -> Diagnostic {
        let Shape::Linear(items) = actual.shape() else {
            return Diagnostic::Present(format!("type {} isn't iterable", actual.type_name()));
        };
        if items.len() != self.elements.len() {
            return Diagnostic::Present(format!(
                "{} elements expected but got {}",
                self.elements.len(),
                items.len()
            ));
        }

        let clauses: Vec<String> = self
            .elements
            .iter()
            .zip(items)
            .enumerate()
            .filter(|(_, (m, item))| !m.matches(item))
            .map(|(i, (m, item))| {
                let why = m.explain_failure(item).unwrap_or("doesn't match");
                format!("element {i}: {why}")
            })
            .collect();

        if clauses.is_empty() {
            Diagnostic::Absent
        } else {
            Diagnostic::Present(clauses.join("; "))
        }
    }
}

/// Matches sequences whose elements satisfy `elements` position by
/// position.
///
/// ```
/// use matchforge_matchers::{elements_are, gt, Diagnostic, Matcher, Value};
///
/// let m = elements_are([gt(0), gt(10)]);
/// assert!(m.matches(&Value::from(vec![1, 11])));
/// assert_eq!(
///     m.explain_failure(&Value::from(vec![1, 2])),
///     Diagnostic::Present("element 1: doesn't match".to_string())
/// );
/// ```
pub fn elements_are<I>(elements: I) -> OrderedMatcher
where
    I: IntoIterator,
    I::Item: IntoMatcher,
{
    OrderedMatcher {
        elements: boxed(elements),
    }
}
