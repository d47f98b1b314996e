//! Maximum bipartite matching by augmenting paths.

use tracing::trace;

use crate::matrix::CompatibilityMatrix;
use crate::mode::MatchMode;

/// A pairing of predicates with distinct elements.
///
/// `predicate_to_element` and `element_to_predicate` are kept mutually
/// consistent: `predicate_to_element[p] == Some(e)` iff
/// `element_to_predicate[e] == Some(p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    predicate_to_element: Vec<Option<usize>>,
    element_to_predicate: Vec<Option<usize>>,
    matched: usize,
}

impl Assignment {
    /// An assignment with nothing paired.
    pub fn unassigned(predicates: usize, elements: usize) -> Self {
        Self {
            predicate_to_element: vec![None; predicates],
            element_to_predicate: vec![None; elements],
            matched: 0,
        }
    }

    /// Computes a maximum matching over `matrix`.
    ///
    /// Predicates are processed in index order. Each one first claims the
    /// lowest-index compatible element that is still free; failing that, it
    /// tries to displace the owners of its compatible elements, again in
    /// index order, taking the first displacement chain that succeeds. The
    /// result is fully determined by the matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use matchforge_engine::{Assignment, CompatibilityMatrix};
    ///
    /// // Predicate 0 accepts both elements, predicate 1 only element 0.
    /// let matrix = CompatibilityMatrix::from_rows(&[[true, true], [true, false]]);
    /// let assignment = Assignment::solve(&matrix);
    ///
    /// assert_eq!(assignment.matched(), 2);
    /// assert_eq!(assignment.element_for(0), Some(1));
    /// assert_eq!(assignment.element_for(1), Some(0));
    /// ```
    pub fn solve(matrix: &CompatibilityMatrix) -> Self {
        let mut assignment =
            Self::unassigned(matrix.predicate_count(), matrix.element_count());
        if matrix.predicate_count() == 0 || matrix.element_count() == 0 {
            return assignment;
        }

        for predicate in 0..matrix.predicate_count() {
            // Fresh per attempt: an element may be revisited by a later
            // predicate's search, never within one chain.
            let mut visited = vec![false; matrix.element_count()];
            if assignment.try_assign(matrix, predicate, &mut visited) {
                assignment.matched += 1;
            } else {
                trace!(event = "unassigned", predicate);
            }
        }

        assignment
    }

    fn try_assign(
        &mut self,
        matrix: &CompatibilityMatrix,
        predicate: usize,
        visited: &mut [bool],
    ) -> bool {
        let free = matrix
            .candidates(predicate)
            .find(|&e| self.element_to_predicate[e].is_none());
        if let Some(element) = free {
            self.pair(predicate, element);
            trace!(event = "assign", predicate, element);
            return true;
        }

        for element in matrix.candidates(predicate) {
            if visited[element] {
                continue;
            }
            visited[element] = true;

            let Some(owner) = self.element_to_predicate[element] else {
                continue;
            };
            if self.try_assign(matrix, owner, visited) {
                self.pair(predicate, element);
                trace!(event = "displace", predicate, element, displaced = owner);
                return true;
            }
        }

        false
    }

    // Overwrites both directions; a displaced owner has already been
    // re-paired with its new element by the time this runs.
    fn pair(&mut self, predicate: usize, element: usize) {
        self.predicate_to_element[predicate] = Some(element);
        self.element_to_predicate[element] = Some(predicate);
    }

    /// Number of predicates paired with an element.
    pub fn matched(&self) -> usize {
        self.matched
    }

    pub fn predicate_count(&self) -> usize {
        self.predicate_to_element.len()
    }

    pub fn element_count(&self) -> usize {
        self.element_to_predicate.len()
    }

    /// The element paired with predicate `p`, if any.
    pub fn element_for(&self, p: usize) -> Option<usize> {
        self.predicate_to_element.get(p).copied().flatten()
    }

    /// The predicate paired with element `e`, if any.
    pub fn predicate_for(&self, e: usize) -> Option<usize> {
        self.element_to_predicate.get(e).copied().flatten()
    }

    pub fn predicate_to_element(&self) -> &[Option<usize>] {
        &self.predicate_to_element
    }

    pub fn element_to_predicate(&self) -> &[Option<usize>] {
        &self.element_to_predicate
    }

    /// Achieved `(element, predicate)` pairs in increasing element order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.element_to_predicate
            .iter()
            .enumerate()
            .filter_map(|(e, p)| p.map(|p| (e, p)))
    }

    /// Returns true if this assignment satisfies `mode`.
    ///
    /// Subset mode needs every predicate paired. Full mode additionally
    /// needs every element paired.
    pub fn is_complete(&self, mode: MatchMode) -> bool {
        let predicates_covered = self.matched == self.predicate_count();
        match mode {
            MatchMode::Subset => predicates_covered,
            MatchMode::Full => predicates_covered && self.matched == self.element_count(),
        }
    }
}
