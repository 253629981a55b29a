//! Options sources.
//!
//! The host can hand a select its options in three shapes. [`OptionsSource`]
//! makes the shape explicit; [`OptionsSource::from_value`] decides it once,
//! by looking at the first element, for loosely typed input.

use serde::{Deserialize, Serialize};

use super::value::{native_string, OptionValue};

/// A pre-built group of options supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptor {
    /// The group's display name.
    pub group_name: String,
    /// The options in this group, in display order.
    pub options: Vec<OptionValue>,
}

impl GroupDescriptor {
    /// Creates a group descriptor.
    pub fn new<T: Into<OptionValue>>(group_name: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            group_name: group_name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a descriptor from a raw value.
    ///
    /// Returns `None` unless the value is a record with a non-blank scalar
    /// `groupName` and a list of `options`. Numeric and boolean names are
    /// stringified.
    pub fn from_raw(value: &serde_json::Value) -> Option<Self> {
        let group_name = match value.get("groupName")? {
            name @ (serde_json::Value::String(_)
            | serde_json::Value::Number(_)
            | serde_json::Value::Bool(_)) => native_string(name),
            _ => return None,
        };
        if group_name.trim().is_empty() {
            return None;
        }
        let options = value.get("options")?.as_array()?;
        Some(Self {
            group_name,
            options: options.iter().cloned().map(OptionValue::from).collect(),
        })
    }
}

/// An entry of a pre-grouped source.
///
/// Pre-grouped mode is detected from the first element only; later elements
/// that are not group descriptors are kept as loose items.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupedEntry {
    /// A named group of options.
    Group(GroupDescriptor),
    /// A loose item between groups.
    Item(OptionValue),
}

/// The options collection bound to a select.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsSource {
    /// A flat list of option items.
    Items(Vec<OptionValue>),
    /// A whitespace-separated list of single-word string items.
    Tokens(String),
    /// A list already shaped as named groups.
    PreGrouped(Vec<GroupedEntry>),
}

impl Default for OptionsSource {
    fn default() -> Self {
        OptionsSource::Items(Vec::new())
    }
}

impl OptionsSource {
    /// Creates a flat source from items.
    pub fn items<T: Into<OptionValue>>(items: Vec<T>) -> Self {
        OptionsSource::Items(items.into_iter().map(Into::into).collect())
    }

    /// Creates a token source, e.g. `"male female"`.
    pub fn tokens(tokens: impl Into<String>) -> Self {
        OptionsSource::Tokens(tokens.into())
    }

    /// Creates a pre-grouped source from group descriptors.
    pub fn grouped(groups: Vec<GroupDescriptor>) -> Self {
        OptionsSource::PreGrouped(groups.into_iter().map(GroupedEntry::Group).collect())
    }

    /// Classifies a loosely typed options value.
    ///
    /// - a string becomes [`OptionsSource::Tokens`]
    /// - a list whose first element is a group descriptor becomes
    ///   [`OptionsSource::PreGrouped`]
    /// - any other list becomes [`OptionsSource::Items`]
    /// - `null` becomes an empty item list, any other value a one-item list
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(tokens) => OptionsSource::Tokens(tokens),
            serde_json::Value::Null => OptionsSource::default(),
            serde_json::Value::Array(items) => {
                let pre_grouped = items
                    .first()
                    .and_then(GroupDescriptor::from_raw)
                    .is_some();
                if pre_grouped {
                    OptionsSource::PreGrouped(
                        items
                            .into_iter()
                            .map(|entry| match GroupDescriptor::from_raw(&entry) {
                                Some(group) => GroupedEntry::Group(group),
                                None => GroupedEntry::Item(OptionValue::from(entry)),
                            })
                            .collect(),
                    )
                } else {
                    OptionsSource::Items(items.into_iter().map(OptionValue::from).collect())
                }
            }
            other => OptionsSource::Items(vec![OptionValue::from(other)]),
        }
    }

    /// Returns true if this source is pre-grouped.
    pub fn is_pre_grouped(&self) -> bool {
        matches!(self, OptionsSource::PreGrouped(_))
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionsSource {
    fn from(items: Vec<T>) -> Self {
        OptionsSource::items(items)
    }
}
