//! The unordered matching pipeline.

use tracing::debug;

use crate::assignment::Assignment;
use crate::matrix::CompatibilityMatrix;
use crate::mode::MatchMode;
use crate::precheck::Precheck;

/// Result of one unordered evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A pairing satisfying the mode was found.
    Satisfied(Assignment),
    /// The element count alone rules out a match. No matrix was built.
    SizeMismatch { predicates: usize, elements: usize },
    /// Some predicate, or in full mode some element, has no compatible
    /// partner. The assignment search was skipped.
    Unmatchable(Precheck),
    /// Everything is individually matchable but no pairing satisfies the
    /// mode. Carries the maximum partial pairing found.
    Unsatisfiable(Assignment),
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Satisfied(_))
    }

    /// The assignment computed by the search, when it ran.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Satisfied(a) | Outcome::Unsatisfiable(a) => Some(a),
            Outcome::SizeMismatch { .. } | Outcome::Unmatchable(_) => None,
        }
    }
}

/// Decides whether predicates can be paired with elements under a fixed
/// [`MatchMode`].
///
/// Stateless apart from the mode: every call builds its own matrix and
/// assignment, so one engine may serve concurrent callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnorderedEngine {
    mode: MatchMode,
}

impl UnorderedEngine {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Runs the full pipeline: size check, matrix build, pre-check, search.
    ///
    /// `accepts` is called exactly once per (predicate, element) pair, and
    /// not at all when the sizes already rule out a match.
    ///
    /// # Example
    ///
    /// ```
    /// use matchforge_engine::{MatchMode, Outcome, UnorderedEngine};
    ///
    /// let engine = UnorderedEngine::new(MatchMode::Full);
    /// let outcome = engine.run(&["a", "b", "c"], &["a", "b"], |p, e| p == e);
    /// assert_eq!(outcome, Outcome::SizeMismatch { predicates: 3, elements: 2 });
    /// ```
    pub fn run<P, E, F>(&self, predicates: &[P], elements: &[E], accepts: F) -> Outcome
    where
        F: FnMut(&P, &E) -> bool,
    {
        if !self.mode.admits_sizes(predicates.len(), elements.len()) {
            debug!(
                event = "size_mismatch",
                mode = %self.mode,
                predicates = predicates.len(),
                elements = elements.len(),
            );
            return Outcome::SizeMismatch {
                predicates: predicates.len(),
                elements: elements.len(),
            };
        }

        let matrix = CompatibilityMatrix::build(predicates, elements, accepts);
        self.solve(&matrix)
    }

    /// Runs pre-check and search over an already built matrix.
    pub fn solve(&self, matrix: &CompatibilityMatrix) -> Outcome {
        let predicates = matrix.predicate_count();
        let elements = matrix.element_count();
        if !self.mode.admits_sizes(predicates, elements) {
            return Outcome::SizeMismatch {
                predicates,
                elements,
            };
        }

        let precheck = Precheck::run(matrix);
        if precheck.blocks(self.mode) {
            debug!(
                event = "unmatchable",
                mode = %self.mode,
                predicates = precheck.unmatchable_predicates().len(),
                elements = precheck.unmatchable_elements().len(),
            );
            return Outcome::Unmatchable(precheck);
        }

        let assignment = Assignment::solve(matrix);
        let satisfied = assignment.is_complete(self.mode);
        debug!(
            event = "search_complete",
            mode = %self.mode,
            matched = assignment.matched(),
            predicates,
            elements,
            edges = matrix.edge_count(),
            satisfied,
        );

        if satisfied {
            Outcome::Satisfied(assignment)
        } else {
            Outcome::Unsatisfiable(assignment)
        }
    }
}
