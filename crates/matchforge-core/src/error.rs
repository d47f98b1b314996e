//! Error types for matchforge

use thiserror::Error;

/// Main error type for matchforge operations.
///
/// Matching itself never fails: a non-match is a boolean plus a diagnostic.
/// These errors only surface from the `verify_*` entry points, which turn a
/// non-match into a `Result` for callers that prefer `?`.
#[derive(Debug, Error)]
pub enum MatchforgeError {
    /// A value did not satisfy its matcher. Carries the full explanation.
    #[error("{0}")]
    Assertion(String),

    /// A closure expected to panic returned normally.
    #[error("Expected panic, but none occurred")]
    NoPanic,
}

/// Result type alias for matchforge operations
pub type Result<T> = std::result::Result<T, MatchforgeError>;
