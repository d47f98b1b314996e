//! Compatibility matrix construction.

/// Predicate × element compatibility, immutable once built.
///
/// Cell `(p, e)` is true iff predicate `p` accepts element `e`.
///
/// # Example
///
/// ```
/// use matchforge_engine::CompatibilityMatrix;
///
/// let matrix = CompatibilityMatrix::build(&[1, 2], &[2, 4, 5], |p, e| e % p == 0);
/// assert_eq!(matrix.predicate_count(), 2);
/// assert_eq!(matrix.element_count(), 3);
/// assert_eq!(matrix.row(1), &[true, true, false]);
/// assert_eq!(matrix.candidates(1).collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    predicates: usize,
    elements: usize,
    // Row-major, one row per predicate.
    cells: Vec<bool>,
}

impl CompatibilityMatrix {
    /// Evaluates every predicate against every element exactly once, in
    /// row-major order.
    ///
    /// Empty predicate or element lists produce an empty matrix.
    pub fn build<P, E, F>(predicates: &[P], elements: &[E], mut accepts: F) -> Self
    where
        F: FnMut(&P, &E) -> bool,
    {
        let mut cells = Vec::with_capacity(predicates.len() * elements.len());
        for predicate in predicates {
            for element in elements {
                cells.push(accepts(predicate, element));
            }
        }
        Self {
            predicates: predicates.len(),
            elements: elements.len(),
            cells,
        }
    }

    /// Creates a matrix from explicit rows.
    ///
    /// The width is taken from the first row; shorter rows are padded with
    /// `false` and longer rows truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let elements = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * elements);
        for row in rows {
            let row = row.as_ref();
            cells.extend((0..elements).map(|e| row.get(e).copied().unwrap_or(false)));
        }
        Self {
            predicates: rows.len(),
            elements,
            cells,
        }
    }

    /// Creates a matrix with `predicates` rows and `elements` columns and
    /// no compatible pairs.
    pub fn empty(predicates: usize, elements: usize) -> Self {
        Self {
            predicates,
            elements,
            cells: vec![false; predicates * elements],
        }
    }

    #[inline]
    pub fn predicate_count(&self) -> usize {
        self.predicates
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Returns true if predicate `p` accepts element `e`. Out-of-range
    /// indices are never compatible.
    #[inline]
    pub fn get(&self, p: usize, e: usize) -> bool {
        p < self.predicates && e < self.elements && self.cells[p * self.elements + e]
    }

    /// All cells for predicate `p`.
    pub fn row(&self, p: usize) -> &[bool] {
        if p >= self.predicates {
            return &[];
        }
        let start = p * self.elements;
        &self.cells[start..start + self.elements]
    }

    /// Elements accepted by predicate `p`, in increasing index order.
    pub fn candidates(&self, p: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(p)
            .iter()
            .enumerate()
            .filter_map(|(e, &ok)| ok.then_some(e))
    }

    /// Returns true if some predicate accepts element `e`.
    pub fn column_has_candidate(&self, e: usize) -> bool {
        (0..self.predicates).any(|p| self.get(p, e))
    }

    /// Number of compatible pairs.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&ok| ok).count()
    }
}
