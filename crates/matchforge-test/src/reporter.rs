//! Recording reporter.

use matchforge_core::Reporter;

/// Records every failure so tests can inspect the exact messages.
///
/// Unlike [`PanicReporter`](matchforge_core::PanicReporter), `fatal` does
/// not stop the caller.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    errors: Vec<String>,
    fatals: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-fatal failures, in report order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Fatal failures, in report order.
    pub fn fatals(&self) -> &[String] {
        &self.fatals
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty() || !self.fatals.is_empty()
    }

    pub fn has_fatals(&self) -> bool {
        !self.fatals.is_empty()
    }

    pub fn reset(&mut self) {
        self.errors.clear();
        self.fatals.clear();
    }
}

impl Reporter for RecordingReporter {
    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn fatal(&mut self, message: String) {
        self.fatals.push(message);
    }
}
