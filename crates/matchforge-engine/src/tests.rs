//! Tests for the unordered matching engine.

use super::*;
use matchforge_core::Diagnostic;

type Pred = fn(&&str) -> bool;

fn run(mode: MatchMode, predicates: &[Pred], elements: &[&str]) -> Outcome {
    UnorderedEngine::new(mode).run(predicates, elements, |p, e| p(e))
}

fn explain(mode: MatchMode, outcome: &Outcome, names: &[&str]) -> String {
    DiagnosticComposer::new(mode)
        .compose(outcome, |i| names[i].to_string())
        .unwrap_or("<absent>")
}

#[test]
fn test_matrix_build_evaluates_each_pair_once() {
    let mut calls = 0;
    let matrix = CompatibilityMatrix::build(&[1, 2, 3], &[10, 20], |_, _| {
        calls += 1;
        true
    });
    assert_eq!(calls, 6);
    assert_eq!(matrix.edge_count(), 6);
}

#[test]
fn test_matrix_empty_dimensions() {
    let none: [i32; 0] = [];
    let matrix = CompatibilityMatrix::build(&none, &[1, 2], |_, _| true);
    assert_eq!(matrix.predicate_count(), 0);
    assert_eq!(matrix.element_count(), 2);
    assert!(matrix.row(0).is_empty());

    let matrix = CompatibilityMatrix::build(&[1, 2], &none, |_, _| true);
    assert_eq!(matrix.predicate_count(), 2);
    assert!(matrix.row(1).is_empty());
    assert!(!matrix.get(0, 0));
}

#[test]
fn test_matrix_from_rows_pads_short_rows() {
    let rows: Vec<Vec<bool>> = vec![vec![true, false, true], vec![true]];
    let matrix = CompatibilityMatrix::from_rows(&rows);
    assert_eq!(matrix.row(1), &[true, false, false]);
    assert!(matrix.column_has_candidate(2));
    assert!(!matrix.column_has_candidate(1));
}

#[test]
fn test_precheck_reports_rows_and_columns() {
    let matrix = CompatibilityMatrix::from_rows(&[
        [false, true, false],
        [false, false, false],
        [false, true, false],
    ]);
    let precheck = Precheck::run(&matrix);
    assert_eq!(precheck.unmatchable_predicates(), &[1]);
    assert_eq!(precheck.unmatchable_elements(), &[0, 2]);
}

#[test]
fn test_precheck_elements_only_block_full_mode() {
    let matrix = CompatibilityMatrix::from_rows(&[[true, false]]);
    let precheck = Precheck::run(&matrix);
    assert!(!precheck.blocks(MatchMode::Subset));
    assert!(precheck.blocks(MatchMode::Full));
}

#[test]
fn test_assignment_displacement_chain() {
    // p0 takes e0 first; p1 only fits e0, so p0 must move to e1; p2 only
    // fits e1, forcing p0 onward to e2.
    let matrix = CompatibilityMatrix::from_rows(&[
        [true, true, true],
        [true, false, false],
        [false, true, false],
    ]);
    let assignment = Assignment::solve(&matrix);
    assert_eq!(assignment.matched(), 3);
    assert_eq!(assignment.predicate_to_element(), &[Some(2), Some(0), Some(1)]);
    assert_eq!(assignment.element_to_predicate(), &[Some(1), Some(2), Some(0)]);
    assert!(assignment.is_complete(MatchMode::Full));
}

#[test]
fn test_assignment_prefers_free_element_over_displacement() {
    let matrix = CompatibilityMatrix::from_rows(&[[true, true, false], [true, false, true]]);
    let assignment = Assignment::solve(&matrix);
    assert_eq!(assignment.element_for(0), Some(0));
    assert_eq!(assignment.element_for(1), Some(2));
    assert_eq!(assignment.predicate_for(1), None);
    assert!(assignment.is_complete(MatchMode::Subset));
    assert!(!assignment.is_complete(MatchMode::Full));
}

#[test]
fn test_assignment_on_empty_matrix() {
    let assignment = Assignment::solve(&CompatibilityMatrix::empty(0, 3));
    assert_eq!(assignment.matched(), 0);
    assert!(assignment.is_complete(MatchMode::Subset));
    assert!(!assignment.is_complete(MatchMode::Full));
    assert_eq!(assignment.pairs().count(), 0);
}

#[test]
fn test_subset_allows_extra_elements() {
    let predicates: [Pred; 1] = [|s| *s == "b"];
    let outcome = run(MatchMode::Subset, &predicates, &["a", "b"]);
    assert!(outcome.is_match());
    let assignment = outcome.assignment().unwrap();
    assert_eq!(assignment.pairs().collect::<Vec<_>>(), vec![(1, 0)]);
}

#[test]
fn test_full_size_mismatch_skips_evaluation() {
    let mut calls = 0;
    let outcome = UnorderedEngine::new(MatchMode::Full).run(&["a", "b", "c"], &["a", "b"], |p, e| {
        calls += 1;
        p == e
    });
    assert_eq!(calls, 0);
    assert_eq!(
        outcome,
        Outcome::SizeMismatch {
            predicates: 3,
            elements: 2
        }
    );
    assert_eq!(
        explain(MatchMode::Full, &outcome, &[]),
        "3 elements expected but got 2"
    );
}

#[test]
fn test_subset_size_mismatch_wording() {
    let outcome = UnorderedEngine::new(MatchMode::Subset).run(&[1, 2], &[1], |p, e| p == e);
    assert_eq!(
        explain(MatchMode::Subset, &outcome, &[]),
        "at least 2 elements expected but got 1"
    );
}

#[test]
fn test_full_match_via_displacement() {
    let predicates: [Pred; 3] = [|s| s.len() == 2, |s| s.contains('a'), |s| *s == "a"];
    let outcome = run(MatchMode::Full, &predicates, &["a", "bb", "ab"]);
    let Outcome::Satisfied(assignment) = &outcome else {
        panic!("expected a match, got {outcome:?}");
    };
    // bb -> length 2, ab -> substring "a", a -> equals "a"
    assert_eq!(assignment.element_for(0), Some(1));
    assert_eq!(assignment.element_for(1), Some(2));
    assert_eq!(assignment.element_for(2), Some(0));
}

#[test]
fn test_full_unsatisfiable_reports_closest_match() {
    let predicates: [Pred; 4] = [|s| *s == "ab", |s| *s == "cc", |s| s.len() == 2, |_| true];
    let elements = ["a", "ab", "cc", "ddd"];
    let outcome = run(MatchMode::Full, &predicates, &elements);
    assert!(matches!(outcome, Outcome::Unsatisfiable(_)));
    assert_eq!(
        explain(MatchMode::Full, &outcome, &["p0", "p1", "p2", "p3"]),
        "no assignment could satisfy all predicates and cover all elements, \
         closest match is 3/4 with element 0 -> predicate 3; \
         element 1 -> predicate 0; element 2 -> predicate 1"
    );
}

#[test]
fn test_subset_unsatisfiable_reports_closest_match() {
    let predicates: [Pred; 2] = [|s| s.len() == 1, |s| *s == "a"];
    let outcome = run(MatchMode::Subset, &predicates, &["a", "bbb", "ccc"]);
    assert_eq!(
        explain(MatchMode::Subset, &outcome, &["has length 1", "is a"]),
        "no assignment could satisfy all predicates, closest match is 1/2 with \
         element 0 -> predicate 0"
    );
}

#[test]
fn test_unmatchable_clauses_in_index_order() {
    let predicates: [Pred; 3] = [|s| *s == "x", |s| *s == "a", |s| *s == "y"];
    let outcome = run(MatchMode::Full, &predicates, &["a", "b", "c"]);
    assert_eq!(
        explain(MatchMode::Full, &outcome, &["is x", "is a", "is y"]),
        "predicate 0 matches no elements (wanted is x); \
         predicate 2 matches no elements (wanted is y); \
         element 1 matches no predicates; element 2 matches no predicates"
    );
}

#[test]
fn test_unmatchable_elements_ignored_in_subset_mode() {
    let predicates: [Pred; 1] = [|s| *s == "a"];
    let outcome = run(MatchMode::Subset, &predicates, &["a", "zzz"]);
    assert!(outcome.is_match());
}

#[test]
fn test_satisfied_outcome_has_no_diagnostic() {
    let predicates: [Pred; 1] = [|_| true];
    let outcome = run(MatchMode::Full, &predicates, &["only"]);
    assert_eq!(
        DiagnosticComposer::new(MatchMode::Full).compose(&outcome, |_| String::new()),
        Diagnostic::Absent
    );
}

#[test]
fn test_empty_predicates() {
    assert!(run(MatchMode::Subset, &[], &[]).is_match());
    assert!(run(MatchMode::Subset, &[], &["a", "b"]).is_match());
    assert!(run(MatchMode::Full, &[], &[]).is_match());
    assert!(!run(MatchMode::Full, &[], &["a"]).is_match());
}

#[test]
fn test_solve_rechecks_sizes() {
    let engine = UnorderedEngine::new(MatchMode::Full);
    let outcome = engine.solve(&CompatibilityMatrix::from_rows(&[[true, true]]));
    assert_eq!(
        outcome,
        Outcome::SizeMismatch {
            predicates: 1,
            elements: 2
        }
    );
}
