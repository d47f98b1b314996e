//! matchforge Core - value model and matcher traits
//!
//! This crate provides the fundamental abstractions for matchforge:
//! - [`Value`], an explicit tagged model of observed values and containers
//! - the [`Matcher`] capability and its optional [`Diagnostic`] explanation
//! - the equality leaf used whenever a plain value stands in for a matcher
//! - the [`Reporter`] capability that assertion entry points report through

pub mod coerce;
pub mod eq;
pub mod error;
pub mod matcher;
pub mod report;
pub mod value;

pub use eq::{eq, EqMatcher};
pub use error::{MatchforgeError, Result};
pub use matcher::{BoxedMatcher, Diagnostic, IntoMatcher, Matcher};
pub use report::{PanicReporter, Reporter};
pub use value::{Shape, Value};
