//! Numeric field normalisation.
//!
//! Every count on the inventory sheet arrives either as a JSON number or as
//! free text typed by a user ("1,000", "5.7", ""). Normalisation turns any of
//! those into a non-negative integer and never fails: input that cannot be
//! read as a number counts as zero.

use serde::{Deserialize, Serialize};

/// Raw value of a numeric inventory field as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// `null`, absent, or otherwise not supplied.
    #[default]
    Missing,
    /// Whole non-negative counts, kept exact beyond `f64` precision.
    Integer(u64),
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        u64::try_from(value).map_or(Self::Number(value as f64), Self::Integer)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Normalise a raw field value to a non-negative integer.
///
/// - missing, blank, or non-numeric text is 0
/// - thousands separators (`,`) are stripped before parsing
/// - fractional values are floored
/// - negative and non-finite results clamp to 0
pub fn normalize_field(value: &FieldValue) -> u64 {
    let parsed = match value {
        FieldValue::Missing => None,
        FieldValue::Integer(n) => Some(*n),
        FieldValue::Number(n) => Some(floor_non_negative(*n)),
        FieldValue::Text(s) => parse_text(s),
    };

    match parsed {
        Some(n) => n,
        None => {
            tracing::trace!(?value, "non-numeric inventory input coerced to 0");
            0
        }
    }
}

fn parse_text(s: &str) -> Option<u64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(n) = cleaned.parse::<u64>() {
        return Some(n);
    }
    cleaned.parse::<f64>().ok().map(floor_non_negative)
}

fn floor_non_negative(n: f64) -> u64 {
    if !n.is_finite() || n <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX.
    n.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: impl Into<FieldValue>) -> u64 {
        normalize_field(&v.into())
    }

    #[test]
    fn missing_and_blank_are_zero() {
        assert_eq!(normalize_field(&FieldValue::Missing), 0);
        assert_eq!(norm(""), 0);
        assert_eq!(norm("   "), 0);
        assert_eq!(norm(None::<i64>), 0);
    }

    #[test]
    fn non_numeric_text_is_zero() {
        assert_eq!(norm("NaN"), 0);
        assert_eq!(norm("abc123"), 0);
        assert_eq!(norm("12abc"), 0);
        assert_eq!(norm("inf"), 0);
        assert_eq!(norm(","), 0);
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(norm("1,000"), 1000);
        assert_eq!(norm("12,345,678"), 12_345_678);
        assert_eq!(norm(" 2,500 "), 2500);
    }

    #[test]
    fn fractions_are_floored() {
        assert_eq!(norm("5.7"), 5);
        assert_eq!(norm(5.7), 5);
        assert_eq!(norm(0.99), 0);
        assert_eq!(norm("1,000.9"), 1000);
    }

    #[test]
    fn negatives_clamp_to_zero() {
        assert_eq!(norm(-5), 0);
        assert_eq!(norm("-5"), 0);
        assert_eq!(norm(-0.5), 0);
        assert_eq!(norm(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn plain_integers_pass_through() {
        assert_eq!(norm(42), 42);
        assert_eq!(norm("42"), 42);
        assert_eq!(norm(0u64), 0);
    }

    #[test]
    fn large_integers_stay_exact() {
        let big = 9_007_199_254_740_993u64;
        assert_eq!(norm(big), big);
        assert_eq!(norm(big.to_string()), big);
        assert_eq!(norm("9,007,199,254,740,993"), big);
        assert_eq!(norm(i64::MAX), i64::MAX as u64);

        let parsed: FieldValue = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(parsed, FieldValue::Integer(big));
    }

    #[test]
    fn deserializes_number_string_or_null() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[3, "1,000", null, 2.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Integer(3),
                FieldValue::Text("1,000".to_string()),
                FieldValue::Missing,
                FieldValue::Number(2.5),
            ]
        );
        let normalized: Vec<u64> = values.iter().map(normalize_field).collect();
        assert_eq!(normalized, vec![3, 1000, 0, 2]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-negative integer survives normalisation unchanged,
            /// whether it arrives as a number or as text.
            #[test]
            fn integers_round_trip(n in 0u32..=u32::MAX) {
                prop_assert_eq!(norm(u64::from(n)), u64::from(n));
                prop_assert_eq!(norm(n.to_string()), u64::from(n));
            }

            /// Property: negative input always normalises to 0.
            #[test]
            fn negatives_are_zero(n in i64::MIN..0i64) {
                prop_assert_eq!(norm(n), 0);
                prop_assert_eq!(norm(n.to_string()), 0);
            }

            /// Property: positive fractions floor.
            #[test]
            fn positive_fractions_floor(whole in 0u32..1_000_000u32, frac in 0u32..1000u32) {
                let text = format!("{whole}.{frac:03}");
                prop_assert_eq!(norm(text), u64::from(whole));
            }

            /// Property: arbitrary text never panics and is a valid count.
            #[test]
            fn arbitrary_text_never_panics(s in ".{0,32}") {
                let _ = norm(s);
            }
        }
    }
}
