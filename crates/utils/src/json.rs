//! Thin JSON codec wrappers over `serde_json`

use commonkit_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a value to its canonical JSON text form.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Error::from)
}

/// Deserialize JSON text into the target shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(Error::from)
}

/// Serialize each value independently.
///
/// Aborts on the first failure; no partial output is returned.
pub fn to_json_batch<T: Serialize>(values: &[T]) -> Result<Vec<String>> {
    values.iter().map(to_json).collect()
}

/// Wrap a raw JSON fragment in enclosing braces to promote it to an
/// object.
///
/// This is a textual operation, not a structural merge: the result is
/// well-formed only if `fragment` is already valid `"key": value` text.
pub fn wrap_object(fragment: &str) -> String {
    format!("{{{fragment}}}")
}
