//! matchforge - composable matchers for structural test assertions
//!
//! Matchers describe the expected shape of a value, including collections
//! whose elements may appear in any order, and explain precisely why a value
//! does not fit.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! let mut reporter = PanicReporter::new();
//! expect_that(&mut reporter, vec!["a", "bb", "ab"], unordered_elements_are![
//!     len(2),
//!     has_substring("a"),
//!     "a",
//! ]);
//!
//! let err = verify_that(vec!["a", "b"], unordered_elements_are(["a", "b", "c"])).unwrap_err();
//! assert!(err.to_string().ends_with("...where 3 elements expected but got 2"));
//! ```

pub mod assert;
pub mod logging;

pub use matchforge_config as config;
pub use matchforge_engine as engine;
pub use matchforge_matchers as matchers;

pub use assert::{
    assert_eq, assert_panic, assert_that, assert_that_with, expect_eq, expect_panic, expect_that,
    expect_that_with, verify_panics, verify_that,
};

pub mod prelude {
    pub use crate::assert::{
        assert_panic, assert_that, expect_eq, expect_panic, expect_that, verify_panics,
        verify_that,
    };
    pub use matchforge_core::{
        eq, Diagnostic, IntoMatcher, Matcher, MatchforgeError, PanicReporter, Reporter, Value,
    };
    pub use matchforge_matchers::{
        anything, contains, contains_regex, elements_are, empty, ends_with, error_message, ge, gt,
        has_substring, key_value, le, len, lt, map_contains, map_contains_kvs, map_is, map_is_kvs,
        matches_regex, not, starts_with, unordered_elements_are,
    };
}
