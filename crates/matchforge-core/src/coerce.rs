//! Numeric and text coercion helpers shared by leaf matchers.

use std::cmp::Ordering;

use crate::value::Value;

enum Number {
    Int(i128),
    Float(f64),
}

fn as_number(v: &Value) -> Option<Number> {
    match v {
        Value::Int(i) => Some(Number::Int(i128::from(*i))),
        Value::UInt(u) => Some(Number::Int(i128::from(*u))),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

/// Compares `actual` against `threshold`.
///
/// Strings compare lexicographically. Numbers compare across variants:
/// integers exactly, and through `f64` once either side is a float. Returns
/// `None` for any other pairing, and for NaN.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use matchforge_core::coerce::compare;
/// use matchforge_core::Value;
///
/// assert_eq!(compare(&Value::from(-1i8), &Value::from(u64::MAX)), Some(Ordering::Less));
/// assert_eq!(compare(&Value::from(2.5), &Value::from(2u8)), Some(Ordering::Greater));
/// assert_eq!(compare(&Value::from("apple"), &Value::from("banana")), Some(Ordering::Less));
/// assert_eq!(compare(&Value::from("1"), &Value::from(1)), None);
/// ```
pub fn compare(actual: &Value, threshold: &Value) -> Option<Ordering> {
    if let (Value::Str(a), Value::Str(b)) = (actual, threshold) {
        return Some(a.cmp(b));
    }

    match (as_number(actual)?, as_number(threshold)?) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (Number::Int(a), Number::Float(b)) => (a as f64).partial_cmp(&b),
        (Number::Float(a), Number::Int(b)) => a.partial_cmp(&(b as f64)),
        (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_variants_compare_exactly() {
        assert_eq!(
            compare(&Value::UInt(u64::MAX), &Value::Int(i64::MAX)),
            Some(Ordering::Greater)
        );
        assert_eq!(compare(&Value::Int(-5), &Value::Int(-3)), Some(Ordering::Less));
        assert_eq!(compare(&Value::UInt(7), &Value::Int(7)), Some(Ordering::Equal));
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(compare(&Value::Int(3), &Value::Float(3.5)), Some(Ordering::Less));
        assert_eq!(compare(&Value::Float(-0.5), &Value::UInt(0)), Some(Ordering::Less));
        assert_eq!(compare(&Value::Float(f64::NAN), &Value::Int(0)), None);
    }

    #[test]
    fn test_incomparable_pairs() {
        assert_eq!(compare(&Value::Bool(true), &Value::Int(1)), None);
        assert_eq!(compare(&Value::Str("a".into()), &Value::Null), None);
    }
}
