//! Rendering of failed outcomes.

use matchforge_core::Diagnostic;

use crate::engine::Outcome;
use crate::mode::MatchMode;

/// Turns an [`Outcome`] into a human-readable explanation.
///
/// The wording grows more specific the closer the match came: a size
/// mismatch, then the individually unmatchable predicates and elements,
/// then the best partial pairing.
///
/// # Example
///
/// ```
/// use matchforge_core::Diagnostic;
/// use matchforge_engine::{DiagnosticComposer, MatchMode, UnorderedEngine};
///
/// let predicates = ["x", "a"];
/// let outcome = UnorderedEngine::new(MatchMode::Subset)
///     .run(&predicates, &["a", "b"], |p, e| p == e);
///
/// let text = DiagnosticComposer::new(MatchMode::Subset)
///     .compose(&outcome, |i| format!("is {}", predicates[i]));
/// assert_eq!(
///     text,
///     Diagnostic::Present("predicate 0 matches no elements (wanted is x)".to_string())
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticComposer {
    mode: MatchMode,
}

impl DiagnosticComposer {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Explains `outcome`. `describe(i)` renders predicate `i`.
    ///
    /// A satisfied outcome has nothing to explain and yields
    /// [`Diagnostic::Absent`].
    pub fn compose<D>(&self, outcome: &Outcome, describe: D) -> Diagnostic
    where
        D: Fn(usize) -> String,
    {
        match outcome {
            Outcome::Satisfied(_) => Diagnostic::Absent,
            Outcome::SizeMismatch {
                predicates,
                elements,
            } => Diagnostic::Present(self.size_mismatch(*predicates, *elements)),
            Outcome::Unmatchable(precheck) => {
                let mut clauses: Vec<String> = precheck
                    .unmatchable_predicates()
                    .iter()
                    .map(|&p| format!("predicate {p} matches no elements (wanted {})", describe(p)))
                    .collect();
                if self.mode.requires_full_coverage() {
                    clauses.extend(
                        precheck
                            .unmatchable_elements()
                            .iter()
                            .map(|e| format!("element {e} matches no predicates")),
                    );
                }
                Diagnostic::Present(clauses.join("; "))
            }
            Outcome::Unsatisfiable(assignment) => {
                let goal = match self.mode {
                    MatchMode::Subset => "satisfy all predicates",
                    MatchMode::Full => "satisfy all predicates and cover all elements",
                };
                let pairs: Vec<String> = assignment
                    .pairs()
                    .map(|(e, p)| format!("element {e} -> predicate {p}"))
                    .collect();
                Diagnostic::Present(format!(
                    "no assignment could {goal}, closest match is {}/{} with {}",
                    assignment.matched(),
                    assignment.predicate_count(),
                    pairs.join("; "),
                ))
            }
        }
    }

    /// The size clause on its own, for adapters that check counts before
    /// reaching the engine.
    pub fn size_mismatch(&self, predicates: usize, elements: usize) -> String {
        match self.mode {
            MatchMode::Subset => {
                format!("at least {predicates} elements expected but got {elements}")
            }
            MatchMode::Full => format!("{predicates} elements expected but got {elements}"),
        }
    }
}
