//! Success criteria.

use std::fmt;

/// How strictly predicates must cover the observed elements.
///
/// Fixed per adapter at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Every predicate is paired with a distinct element; extra elements
    /// are permitted.
    #[default]
    Subset,
    /// Every predicate and every element is paired: a perfect bijection.
    Full,
}

impl MatchMode {
    /// Returns true if `elements` observed elements could possibly satisfy
    /// `predicates` predicates under this mode, by counting alone.
    ///
    /// # Example
    ///
    /// ```
    /// use matchforge_engine::MatchMode;
    ///
    /// assert!(MatchMode::Subset.admits_sizes(1, 2));
    /// assert!(!MatchMode::Subset.admits_sizes(3, 2));
    /// assert!(!MatchMode::Full.admits_sizes(1, 2));
    /// assert!(MatchMode::Full.admits_sizes(0, 0));
    /// ```
    pub fn admits_sizes(self, predicates: usize, elements: usize) -> bool {
        match self {
            MatchMode::Subset => elements >= predicates,
            MatchMode::Full => elements == predicates,
        }
    }

    pub fn requires_full_coverage(self) -> bool {
        self == MatchMode::Full
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Subset => write!(f, "subset"),
            MatchMode::Full => write!(f, "full"),
        }
    }
}
