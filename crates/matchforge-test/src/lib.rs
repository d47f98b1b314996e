//! Shared test fixtures for matchforge crates.
//!
//! - [`reporter`] - a [`Reporter`](matchforge_core::Reporter) that records instead of panicking
//! - [`fixtures`] - sample values and seeded shuffles
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matchforge-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod reporter;

pub use fixtures::{letter_counts, shuffled, some_struct};
pub use reporter::RecordingReporter;
