//! Option identity and label resolution.
//!
//! The identity of an option is the string the native control uses as the
//! option's value. The label is the text shown for it. Both are pure
//! functions of the item and an optional [`FieldPath`]; a missing item or a
//! missing field resolves to the empty string.

use super::path::FieldPath;
use super::value::{native_string, OptionValue};

/// Computes the native value of `item`.
///
/// With a `value_path`, the field at that path is stringified; otherwise the
/// item itself is.
pub fn identity(item: Option<&OptionValue>, value_path: Option<&FieldPath>) -> String {
    let Some(item) = item else {
        return String::new();
    };
    match value_path {
        Some(path) => item.get(path).map(native_string).unwrap_or_default(),
        None => item.to_native_string(),
    }
}

/// Computes the display label of `item`.
///
/// With a `label_path`, the field at that path is stringified; otherwise the
/// label falls back to the item's identity under `value_path`.
pub fn label(
    item: Option<&OptionValue>,
    label_path: Option<&FieldPath>,
    value_path: Option<&FieldPath>,
) -> String {
    match label_path {
        Some(path) => identity(item, Some(path)),
        None => identity(item, value_path),
    }
}
