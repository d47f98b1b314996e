//! Assertion entry points.
//!
//! `expect_*` functions report a non-fatal failure and return whether the
//! value matched. `assert_*` functions report a fatal one. `verify_*`
//! functions return a [`Result`] instead of reporting.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use matchforge_config::ReportConfig;
use matchforge_core::{IntoMatcher, Matcher, MatchforgeError, Reporter, Result, Value};
use tracing::debug;

const EXPECTATION: &str = "Expectation";
const ASSERTION: &str = "Assertion";

/// Renders a failure message for `actual` against `matcher`.
///
/// ```
/// use matchforge::assert::failure_message;
/// use matchforge::config::ReportConfig;
/// use matchforge::prelude::*;
///
/// let text = failure_message("Expectation", &len(3), &Value::from("ab"), &ReportConfig::default());
/// assert_eq!(
///     text,
///     "Expectation failed:\n  Wanted: has length which is equal to 3 (int)\n  \
///      Got: \"ab\" (string)\n  ...where length is 2"
/// );
/// ```
pub fn failure_message(
    context: &str,
    matcher: &dyn Matcher,
    actual: &Value,
    report: &ReportConfig,
) -> String {
    let mut text = format!(
        "{context} failed:\n  Wanted: {}\n  Got: {}",
        matcher.describe(),
        render_got(actual, report)
    );
    if let Some(why) = matcher.explain_failure(actual).into_option() {
        text.push_str("\n  ...where ");
        text.push_str(&why);
    }
    text
}

fn render_got(actual: &Value, report: &ReportConfig) -> String {
    let mut got = actual.to_string();
    if let Some(width) = report.max_got_width {
        if got.chars().count() > width {
            got = got.chars().take(width).collect();
            got.push_str("...");
        }
    }
    if report.show_types {
        got = format!("{got} ({})", actual.type_name());
    }
    got
}

fn check(
    context: &str,
    actual: &Value,
    matcher: &dyn Matcher,
    report: &ReportConfig,
) -> std::result::Result<(), String> {
    if matcher.matches(actual) {
        return Ok(());
    }
    debug!(event = "mismatch", context, wanted = %matcher.describe());
    Err(failure_message(context, matcher, actual, report))
}

/// Checks `actual` against `expected`, returning the failure text as an
/// error.
///
/// ```
/// use matchforge::prelude::*;
///
/// assert!(verify_that(vec![1, 2], contains([2])).is_ok());
/// let err = verify_that(5, gt(7)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Expectation failed:\n  Wanted: is greater than 7 (int)\n  Got: 5 (int)"
/// );
/// ```
pub fn verify_that(actual: impl Into<Value>, expected: impl IntoMatcher) -> Result<()> {
    let matcher = expected.into_matcher();
    check(EXPECTATION, &actual.into(), &matcher, &ReportConfig::default())
        .map_err(MatchforgeError::Assertion)
}

/// Reports a non-fatal failure if `actual` does not satisfy `expected`.
pub fn expect_that(
    reporter: &mut impl Reporter,
    actual: impl Into<Value>,
    expected: impl IntoMatcher,
) -> bool {
    expect_that_with(reporter, &ReportConfig::default(), actual, expected)
}

/// [`expect_that`] with explicit rendering options.
pub fn expect_that_with(
    reporter: &mut impl Reporter,
    report: &ReportConfig,
    actual: impl Into<Value>,
    expected: impl IntoMatcher,
) -> bool {
    let matcher = expected.into_matcher();
    match check(EXPECTATION, &actual.into(), &matcher, report) {
        Ok(()) => true,
        Err(message) => {
            reporter.error(message);
            false
        }
    }
}

/// Reports a fatal failure if `actual` does not satisfy `expected`.
pub fn assert_that(
    reporter: &mut impl Reporter,
    actual: impl Into<Value>,
    expected: impl IntoMatcher,
) {
    assert_that_with(reporter, &ReportConfig::default(), actual, expected);
}

/// [`assert_that`] with explicit rendering options.
pub fn assert_that_with(
    reporter: &mut impl Reporter,
    report: &ReportConfig,
    actual: impl Into<Value>,
    expected: impl IntoMatcher,
) {
    let matcher = expected.into_matcher();
    if let Err(message) = check(ASSERTION, &actual.into(), &matcher, report) {
        reporter.fatal(message);
    }
}

/// Expects `actual` to equal `expected`. Both sides share a type, so a
/// mistyped expectation is a compile error rather than a failure.
pub fn expect_eq<T: Into<Value>>(reporter: &mut impl Reporter, actual: T, expected: T) -> bool {
    expect_that(reporter, actual, matchforge_core::eq(expected))
}

/// Asserts `actual` equals `expected`.
pub fn assert_eq<T: Into<Value>>(reporter: &mut impl Reporter, actual: T, expected: T) {
    assert_that(reporter, actual, matchforge_core::eq(expected));
}

/// Runs `f`, returning its panic payload as a [`Value`], or `None` when it
/// returns normally.
fn catch_panic<F: FnOnce() + UnwindSafe>(f: F) -> Option<Value> {
    panic::catch_unwind(f).err().map(payload_value)
}

fn payload_value(payload: Box<dyn Any + Send>) -> Value {
    match payload.downcast::<String>() {
        Ok(s) => Value::Str(*s),
        Err(payload) => match payload.downcast_ref::<&str>() {
            Some(s) => Value::from(*s),
            None => Value::Null,
        },
    }
}

/// Runs `f` and checks its panic message against `expected`.
///
/// ```
/// use matchforge::prelude::*;
///
/// assert!(verify_panics(has_substring("boom"), || panic!("boom!")).is_ok());
/// assert!(matches!(verify_panics(anything(), || {}), Err(MatchforgeError::NoPanic)));
/// ```
pub fn verify_panics<F>(expected: impl IntoMatcher, f: F) -> Result<()>
where
    F: FnOnce() + UnwindSafe,
{
    let payload = catch_panic(f).ok_or(MatchforgeError::NoPanic)?;
    verify_that(payload, expected)
}

/// Expects `f` to panic with a message satisfying `expected`. A closure that
/// returns normally is itself a failure.
pub fn expect_panic<F>(reporter: &mut impl Reporter, expected: impl IntoMatcher, f: F) -> bool
where
    F: FnOnce() + UnwindSafe,
{
    match catch_panic(f) {
        Some(payload) => expect_that(reporter, payload, expected),
        None => {
            reporter.error(MatchforgeError::NoPanic.to_string());
            false
        }
    }
}

/// Asserts `f` panics with a message satisfying `expected`.
pub fn assert_panic<F>(reporter: &mut impl Reporter, expected: impl IntoMatcher, f: F)
where
    F: FnOnce() + UnwindSafe,
{
    match catch_panic(f) {
        Some(payload) => assert_that(reporter, payload, expected),
        None => reporter.fatal(MatchforgeError::NoPanic.to_string()),
    }
}
