//! Property-based tests for the unordered matching engine.
//!
//! Key invariants:
//! - A full-mode match implies a subset-mode match
//! - On a full-mode match both index maps are total and inverse
//! - The assignment maps stay mutually consistent on every outcome
//! - The search finds a maximum matching
//! - Diagnostics are identical across repeated runs
//! - An all-false row always fails, whatever the search would say
//! - Zero predicates match any collection in subset mode, only an empty one in full mode

use matchforge_engine::{
    Assignment, CompatibilityMatrix, DiagnosticComposer, MatchMode, Outcome, UnorderedEngine,
};
use proptest::prelude::*;

/// `(element count, rows)`; the element count survives an empty row list.
fn grid() -> impl Strategy<Value = (usize, Vec<Vec<bool>>)> {
    (0usize..6, 0usize..6).prop_flat_map(|(predicates, elements)| {
        (
            Just(elements),
            prop::collection::vec(prop::collection::vec(any::<bool>(), elements), predicates),
        )
    })
}

fn matrix(elements: usize, rows: &[Vec<bool>]) -> CompatibilityMatrix {
    let predicates: Vec<usize> = (0..rows.len()).collect();
    let elements: Vec<usize> = (0..elements).collect();
    CompatibilityMatrix::build(&predicates, &elements, |&p, &e| rows[p][e])
}

fn brute_force_max(rows: &[Vec<bool>], predicate: usize, used: &mut [bool]) -> usize {
    if predicate == rows.len() {
        return 0;
    }
    let mut best = brute_force_max(rows, predicate + 1, used);
    for e in 0..used.len() {
        if rows[predicate][e] && !used[e] {
            used[e] = true;
            best = best.max(1 + brute_force_max(rows, predicate + 1, used));
            used[e] = false;
        }
    }
    best
}

fn render(mode: MatchMode, outcome: &Outcome) -> Option<String> {
    DiagnosticComposer::new(mode)
        .compose(outcome, |i| format!("predicate #{i}"))
        .into_option()
}

proptest! {
    #[test]
    fn full_match_implies_subset_match((elements, rows) in grid()) {
        let matrix = matrix(elements, &rows);
        let full = UnorderedEngine::new(MatchMode::Full).solve(&matrix);
        let subset = UnorderedEngine::new(MatchMode::Subset).solve(&matrix);
        if full.is_match() {
            prop_assert!(subset.is_match());
        }
    }

    #[test]
    fn full_match_is_a_bijection((elements, rows) in grid()) {
        let matrix = matrix(elements, &rows);
        if let Outcome::Satisfied(assignment) = UnorderedEngine::new(MatchMode::Full).solve(&matrix) {
            for (p, e) in assignment.predicate_to_element().iter().enumerate() {
                let e = e.expect("every predicate is paired");
                prop_assert_eq!(assignment.predicate_for(e), Some(p));
            }
            for (e, p) in assignment.element_to_predicate().iter().enumerate() {
                let p = p.expect("every element is paired");
                prop_assert_eq!(assignment.element_for(p), Some(e));
            }
        }
    }

    #[test]
    fn assignment_maps_stay_consistent((elements, rows) in grid()) {
        let assignment = Assignment::solve(&matrix(elements, &rows));
        for (p, e) in assignment.predicate_to_element().iter().enumerate() {
            if let Some(e) = e {
                prop_assert!(rows[p][*e]);
                prop_assert_eq!(assignment.predicate_for(*e), Some(p));
            }
        }
        let paired = assignment.element_to_predicate().iter().flatten().count();
        prop_assert_eq!(paired, assignment.matched());
    }

    #[test]
    fn search_finds_maximum_matching((elements, rows) in grid()) {
        let assignment = Assignment::solve(&matrix(elements, &rows));
        let mut used = vec![false; elements];
        prop_assert_eq!(assignment.matched(), brute_force_max(&rows, 0, &mut used));
    }

    #[test]
    fn diagnostics_are_deterministic((elements, rows) in grid()) {
        for mode in [MatchMode::Subset, MatchMode::Full] {
            let first = UnorderedEngine::new(mode).solve(&matrix(elements, &rows));
            let second = UnorderedEngine::new(mode).solve(&matrix(elements, &rows));
            prop_assert_eq!(render(mode, &first), render(mode, &second));
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn empty_row_always_fails((elements, mut rows) in grid(), dead in 0usize..6) {
        if rows.is_empty() {
            return Ok(());
        }
        let dead = dead % rows.len();
        rows[dead] = vec![false; elements];
        for mode in [MatchMode::Subset, MatchMode::Full] {
            let outcome = UnorderedEngine::new(mode).solve(&matrix(elements, &rows));
            prop_assert!(!outcome.is_match());
        }
    }

    #[test]
    fn zero_predicates_identity(elements in 0usize..6) {
        let matrix = CompatibilityMatrix::empty(0, elements);
        prop_assert!(UnorderedEngine::new(MatchMode::Subset).solve(&matrix).is_match());
        prop_assert_eq!(
            UnorderedEngine::new(MatchMode::Full).solve(&matrix).is_match(),
            elements == 0
        );
    }
}
