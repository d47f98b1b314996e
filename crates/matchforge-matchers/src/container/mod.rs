//! Collection matchers.
//!
//! The unordered adapters hand a flat element list to the pairing engine:
//! sequence items as they are, map entries as `(key, value)` pairs in their
//! stored order. The ordered and exact-map adapters need no pairing search.

mod key_value;
mod map;
mod ordered;
mod unordered;


pub use key_value::{key_value, map_contains_kvs, map_is_kvs, KeyValueMatcher, MapEntriesMatcher};
pub use map::{map_contains, map_is, MapMatcher};
pub use ordered::{elements_are, OrderedMatcher};
pub use unordered::{contains, unordered_elements_are, UnorderedMatcher};
