//! Heterogeneous scalar normalization to strings

use commonkit_core::{Error, Result};
use std::fmt;

/// A single scalar datum of any of the widths the normalizer accepts.
///
/// The `Other` variant is the catch-all for structured data; it renders
/// as canonical JSON text so normalization is total over any input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Other(serde_json::Value),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            // f64 Display is the shortest decimal form that round-trips
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Value::Other(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $target:ty, $($source:ty),+) => {
        $(impl From<$source> for Value {
            fn from(value: $source) -> Self {
                Value::$variant(value as $target)
            }
        })+
    };
}

impl_from_int!(Int: i64, i8, i16, i32, i64, isize);
impl_from_int!(Uint: u64, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Other(value)
    }
}

/// Normalize an ordered sequence of scalar values to their string
/// representations, preserving order and count.
///
/// A `None` element aborts the whole call with an error naming its
/// index; no partial output is produced.
pub fn values_to_strings(values: &[Option<Value>]) -> Result<Vec<String>> {
    let mut result = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let value = value.as_ref().ok_or_else(|| Error::null_value(index))?;
        result.push(value.to_string());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_values_preserve_order_and_count() {
        let values = vec![
            Some(Value::from(1.5f64)),
            Some(Value::from(42u64)),
            Some(Value::from(-7i32)),
            Some(Value::from("text")),
            Some(Value::from(b"ab".as_slice())),
        ];

        let strings = values_to_strings(&values).unwrap();
        assert_eq!(strings, vec!["1.5", "42", "-7", "text", "ab"]);
    }

    #[test]
    fn test_float_uses_shortest_round_trip_form() {
        let strings =
            values_to_strings(&[Some(Value::from(0.1f64)), Some(Value::from(100.0f64))]).unwrap();
        assert_eq!(strings, vec!["0.1", "100"]);
    }

    #[test]
    fn test_null_reports_index_and_aborts() {
        let values = vec![Some(Value::from(1i64)), None, Some(Value::from(3i64))];
        let error = values_to_strings(&values).unwrap_err();
        assert_eq!(error.to_string(), "value at index 1 is null");
    }

    #[test]
    fn test_other_falls_back_to_json() {
        let values = vec![Some(Value::from(json!({"a": 1})))];
        let strings = values_to_strings(&values).unwrap();
        assert_eq!(strings, vec![r#"{"a":1}"#]);
    }

    #[test]
    fn test_empty_input() {
        let strings = values_to_strings(&[]).unwrap();
        assert!(strings.is_empty());
    }

    #[test]
    fn test_integer_widths_render_base_10() {
        let values = vec![
            Some(Value::from(i8::MIN)),
            Some(Value::from(u8::MAX)),
            Some(Value::from(i64::MIN)),
            Some(Value::from(u64::MAX)),
        ];

        let strings = values_to_strings(&values).unwrap();
        assert_eq!(
            strings,
            vec![
                "-128",
                "255",
                "-9223372036854775808",
                "18446744073709551615",
            ]
        );
    }
}
