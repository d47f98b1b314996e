//! matchforge Engine - unordered multi-element matching
//!
//! Given N predicates and M observed elements, decides whether a pairing
//! exists in which every predicate holds for a distinct element, and
//! explains the closest pairing when none does.
//!
//! The pipeline for one evaluation:
//! - [`CompatibilityMatrix`]: every predicate evaluated against every element once
//! - [`Precheck`]: predicates (and in full mode, elements) with no partner at all
//! - [`Assignment`]: maximum bipartite matching by augmenting paths
//! - [`DiagnosticComposer`]: human-readable explanation of a failed [`Outcome`]
//!
//! Every structure is built fresh per call and dropped afterwards. The engine
//! never sees containers, only flat element slices.
//!
//! # Example
//!
//! ```
//! use matchforge_engine::{MatchMode, UnorderedEngine};
//!
//! let elements = ["a", "bb", "ab"];
//! let predicates: [fn(&&str) -> bool; 3] = [
//!     |s| s.len() == 2,
//!     |s| s.contains('a'),
//!     |s| *s == "a",
//! ];
//!
//! let outcome = UnorderedEngine::new(MatchMode::Full)
//!     .run(&predicates, &elements, |p, e| p(e));
//! assert!(outcome.is_match());
//! ```

pub mod assignment;
pub mod diagnostic;
pub mod engine;
pub mod matrix;
pub mod mode;
pub mod precheck;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use diagnostic::DiagnosticComposer;
pub use engine::{Outcome, UnorderedEngine};
pub use matrix::CompatibilityMatrix;
pub use mode::MatchMode;
pub use precheck::Precheck;
