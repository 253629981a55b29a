//! Option items.
//!
//! An [`OptionValue`] is an opaque domain value shown as one entry of a
//! select list. It may be a primitive (string, number, bool) or a structured
//! record; both go through the same path projection and stringification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::path::FieldPath;

/// A domain value usable as a select option, or as the value bound to a select.
///
/// This is a thin wrapper around `serde_json::Value`. `null` stands for an
/// absent item (not yet loaded, sparse list, or an unset value).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValue(serde_json::Value);

impl OptionValue {
    /// The absent value.
    pub fn absent() -> Self {
        OptionValue(serde_json::Value::Null)
    }

    /// Creates an option value from a raw serde_json::Value.
    pub fn from_raw(value: serde_json::Value) -> Self {
        OptionValue(value)
    }

    /// Returns a reference to the underlying serde_json::Value.
    pub fn as_raw(&self) -> &serde_json::Value {
        &self.0
    }

    /// Returns the underlying serde_json::Value.
    pub fn into_raw(self) -> serde_json::Value {
        self.0
    }

    /// Returns true if this value is absent (`null`).
    pub fn is_absent(&self) -> bool {
        self.0.is_null()
    }

    /// Returns true if this value counts as "nothing" for selection purposes.
    ///
    /// `null`, the empty string and the empty list are empty.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Returns the elements of a list value.
    ///
    /// A non-list value is treated as a one-element list; an absent value as
    /// an empty list.
    pub fn elements(&self) -> Vec<OptionValue> {
        match &self.0 {
            serde_json::Value::Null => Vec::new(),
            serde_json::Value::Array(items) => items.iter().cloned().map(OptionValue).collect(),
            other => vec![OptionValue(other.clone())],
        }
    }

    /// Reads the sub-field at `path`.
    ///
    /// Returns `None` when any step of the path is missing, including when
    /// this value is a primitive.
    pub fn get(&self, path: &FieldPath) -> Option<&serde_json::Value> {
        path.resolve(&self.0)
    }

    /// Projects this value through an optional path.
    ///
    /// Without a path the value itself is returned; a missing field projects
    /// to the absent value.
    pub fn project(&self, path: Option<&FieldPath>) -> OptionValue {
        match path {
            Some(path) => self
                .get(path)
                .cloned()
                .map(OptionValue)
                .unwrap_or_default(),
            None => self.clone(),
        }
    }

    /// The string form of this value, as used for native values and labels.
    ///
    /// - strings render as themselves
    /// - integers in decimal, integral floats without a fraction (`2.0` is `"2"`)
    /// - booleans as `"true"` / `"false"`
    /// - absent values as `""`
    /// - lists and records as compact JSON
    pub fn to_native_string(&self) -> String {
        native_string(&self.0)
    }
}

/// Stringifies a raw JSON value the way [`OptionValue::to_native_string`] does.
pub(crate) fn native_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                        format!("{}", f as i64)
                    }
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => value.to_string(),
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_native_string())
    }
}

// ============================================================================
// From Implementations
// ============================================================================

impl From<serde_json::Value> for OptionValue {
    fn from(v: serde_json::Value) -> Self {
        OptionValue(v)
    }
}

impl From<OptionValue> for serde_json::Value {
    fn from(v: OptionValue) -> Self {
        v.0
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue(serde_json::Value::String(v.to_string()))
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue(serde_json::Value::String(v))
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue(serde_json::Value::Bool(v))
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue(serde_json::Value::Number(v.into()))
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue(serde_json::Value::Number(v.into()))
    }
}

impl From<u64> for OptionValue {
    fn from(v: u64) -> Self {
        OptionValue(serde_json::Value::Number(v.into()))
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v)
            .map(|n| OptionValue(serde_json::Value::Number(n)))
            .unwrap_or_default()
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(v: Vec<T>) -> Self {
        OptionValue(serde_json::Value::Array(
            v.into_iter().map(|x| x.into().0).collect(),
        ))
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}
