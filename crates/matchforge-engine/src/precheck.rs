//! Detection of predicates and elements with no compatible partner.

use crate::matrix::CompatibilityMatrix;
use crate::mode::MatchMode;

/// Rows and columns of a [`CompatibilityMatrix`] that are entirely false.
///
/// A predicate nobody satisfies fails the match in either mode; an element
/// no predicate accepts only matters in [`MatchMode::Full`]. Both are far
/// more actionable than a bare "no pairing exists".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Precheck {
    unmatchable_predicates: Vec<usize>,
    unmatchable_elements: Vec<usize>,
}

impl Precheck {
    /// Scans `matrix` for all-false rows and columns.
    ///
    /// # Example
    ///
    /// ```
    /// use matchforge_engine::{CompatibilityMatrix, MatchMode, Precheck};
    ///
    /// let matrix = CompatibilityMatrix::from_rows(&[
    ///     [true, false, false],
    ///     [false, false, false],
    /// ]);
    /// let precheck = Precheck::run(&matrix);
    /// assert_eq!(precheck.unmatchable_predicates(), &[1]);
    /// assert_eq!(precheck.unmatchable_elements(), &[1, 2]);
    /// assert!(precheck.blocks(MatchMode::Subset));
    /// ```
    pub fn run(matrix: &CompatibilityMatrix) -> Self {
        let unmatchable_predicates = (0..matrix.predicate_count())
            .filter(|&p| matrix.candidates(p).next().is_none())
            .collect();
        let unmatchable_elements = (0..matrix.element_count())
            .filter(|&e| !matrix.column_has_candidate(e))
            .collect();
        Self {
            unmatchable_predicates,
            unmatchable_elements,
        }
    }

    /// Predicates accepted by no element, in index order.
    pub fn unmatchable_predicates(&self) -> &[usize] {
        &self.unmatchable_predicates
    }

    /// Elements accepted by no predicate, in index order.
    pub fn unmatchable_elements(&self) -> &[usize] {
        &self.unmatchable_elements
    }

    /// Returns true if the match must fail under `mode` without searching.
    pub fn blocks(&self, mode: MatchMode) -> bool {
        !self.unmatchable_predicates.is_empty()
            || (mode.requires_full_coverage() && !self.unmatchable_elements.is_empty())
    }
}
