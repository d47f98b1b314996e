//! The reporter capability that assertion entry points report through.

/// Receives assertion failures.
///
/// `error` records a failure and lets the test continue. `fatal` records a
/// failure after which the caller must not continue; implementations that
/// cannot stop the caller (recording fakes) simply record it.
pub trait Reporter {
    fn error(&mut self, message: String);

    fn fatal(&mut self, message: String);
}

/// Reporter for ordinary `#[test]` functions.
///
/// Non-fatal failures are collected and raised together as a single panic
/// when the reporter is dropped. Fatal failures panic immediately.
///
/// # Example
///
/// ```should_panic
/// use matchforge_core::{PanicReporter, Reporter};
///
/// let mut reporter = PanicReporter::new();
/// reporter.error("first".to_string());
/// reporter.error("second".to_string());
/// // panics here with both messages
/// ```
#[derive(Debug, Default)]
pub struct PanicReporter {
    failures: Vec<String>,
}

impl PanicReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-fatal failures recorded so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

impl Reporter for PanicReporter {
    fn error(&mut self, message: String) {
        self.failures.push(message);
    }

    fn fatal(&mut self, message: String) {
        self.failures.push(message);
        let all = std::mem::take(&mut self.failures);
        panic!("{}", all.join("\n\n"));
    }
}

impl Drop for PanicReporter {
    fn drop(&mut self) {
        if !self.failures.is_empty() && !std::thread::panicking() {
            let all = std::mem::take(&mut self.failures);
            panic!("{}", all.join("\n\n"));
        }
    }
}
