//! Sample values used across test suites.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use matchforge_core::Value;

/// A record that is not a container: `SomeStruct { a: 1, b: "x" }`.
pub fn some_struct() -> Value {
    Value::record("SomeStruct", [("a", Value::from(1)), ("b", Value::from("x"))])
}

/// Letter counts keyed by letter: `{"a": 1, "b": 2, "c": 3}`.
pub fn letter_counts() -> Value {
    Value::map([("a", 1), ("b", 2), ("c", 3)])
}

/// Returns `items` in an order determined only by `seed`.
///
/// ```
/// use matchforge_test::shuffled;
///
/// let a = shuffled(vec![1, 2, 3, 4, 5], 7);
/// let b = shuffled(vec![1, 2, 3, 4, 5], 7);
/// assert_eq!(a, b);
/// ```
pub fn shuffled<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    items.shuffle(&mut rng);
    items
}
