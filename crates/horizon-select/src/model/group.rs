//! Group normalization.
//!
//! Every options source is normalized into [`OptionGroups`]: an ordered list
//! of [`OptionGroup`]s in which ungrouped items are singleton groups without a
//! name. All selection and rendering logic works on this one shape.

use std::collections::{HashMap, HashSet};

use horizon_select_core::logging::targets;

use super::identity::identity;
use super::path::FieldPath;
use super::source::{GroupedEntry, OptionsSource};
use super::value::{native_string, OptionValue};

/// A named bucket of options, or a singleton pseudo-group for a loose item.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup {
    name: Option<String>,
    options: Vec<OptionValue>,
}

impl OptionGroup {
    /// Creates a named group.
    pub fn named(name: impl Into<String>, options: Vec<OptionValue>) -> Self {
        Self {
            name: Some(name.into()),
            options,
        }
    }

    /// Creates a singleton pseudo-group for one loose item.
    pub fn single(option: OptionValue) -> Self {
        Self {
            name: None,
            options: vec![option],
        }
    }

    /// The group's name, or `None` for a singleton pseudo-group.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if this is a singleton pseudo-group.
    pub fn is_single(&self) -> bool {
        self.name.is_none()
    }

    /// The options in this group, in source order.
    pub fn options(&self) -> &[OptionValue] {
        &self.options
    }
}

/// The canonical, grouped form of an options source.
///
/// Produced fresh by [`normalize`] whenever the source changes and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroups {
    groups: Vec<OptionGroup>,
    pre_grouped: bool,
}

impl OptionGroups {
    /// The groups in display order.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Whether the source was supplied already grouped.
    pub fn is_pre_grouped(&self) -> bool {
        self.pre_grouped
    }

    /// Whether any group is named (rendered as a group rather than loose items).
    pub fn has_grouping(&self) -> bool {
        self.groups.iter().any(|group| !group.is_single())
    }

    /// Number of groups, singleton groups included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of options across all groups.
    pub fn option_count(&self) -> usize {
        self.groups.iter().map(|group| group.options.len()).sum()
    }

    /// All options in scan order: groups in order, items within each group in order.
    pub fn options(&self) -> impl Iterator<Item = &OptionValue> {
        self.groups.iter().flat_map(|group| group.options.iter())
    }

    /// Identities shared by more than one option, in first-seen order.
    ///
    /// Lookups resolve such identities to the first option in scan order.
    pub fn duplicate_identities(&self, value_path: Option<&FieldPath>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for option in self.options() {
            let id = identity(Some(option), value_path);
            if !seen.insert(id.clone()) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

/// Normalizes an options source into canonical groups.
///
/// - Pre-grouped sources pass through unchanged; `grouping_path` is ignored.
/// - Without `grouping_path`, every item becomes its own singleton group.
/// - With `grouping_path`, items with a non-blank label join the group opened
///   for that label earlier in this pass (or open it at the current position);
///   items with a blank label become singleton groups in place.
pub fn normalize(source: &OptionsSource, grouping_path: Option<&FieldPath>) -> OptionGroups {
    match source {
        OptionsSource::PreGrouped(entries) => {
            let groups = entries
                .iter()
                .map(|entry| match entry {
                    GroupedEntry::Group(group) => {
                        OptionGroup::named(group.group_name.clone(), group.options.clone())
                    }
                    GroupedEntry::Item(item) => OptionGroup::single(item.clone()),
                })
                .collect();
            tracing::trace!(target: targets::NORMALIZE, "options are pre-grouped");
            OptionGroups {
                groups,
                pre_grouped: true,
            }
        }
        OptionsSource::Tokens(tokens) => {
            let items: Vec<OptionValue> = tokens.split_whitespace().map(OptionValue::from).collect();
            group_items(&items, grouping_path)
        }
        OptionsSource::Items(items) => group_items(items, grouping_path),
    }
}

fn group_items(items: &[OptionValue], grouping_path: Option<&FieldPath>) -> OptionGroups {
    let Some(grouping_path) = grouping_path else {
        return OptionGroups {
            groups: items.iter().cloned().map(OptionGroup::single).collect(),
            pre_grouped: false,
        };
    };

    let mut groups: Vec<OptionGroup> = Vec::new();
    let mut opened: HashMap<String, usize> = HashMap::new();

    for item in items {
        match group_label(item, grouping_path) {
            Some(label) => match opened.get(&label) {
                Some(&position) => groups[position].options.push(item.clone()),
                None => {
                    opened.insert(label.clone(), groups.len());
                    groups.push(OptionGroup::named(label, vec![item.clone()]));
                }
            },
            None => groups.push(OptionGroup::single(item.clone())),
        }
    }

    tracing::trace!(
        target: targets::NORMALIZE,
        path = %grouping_path,
        groups = groups.len(),
        named = opened.len(),
        "grouped options"
    );

    OptionGroups {
        groups,
        pre_grouped: false,
    }
}

/// The grouping label of an item; blank labels (`null`, `""`, `false`, `0`) yield `None`.
fn group_label(item: &OptionValue, grouping_path: &FieldPath) -> Option<String> {
    match item.get(grouping_path)? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        value => Some(native_string(value)).filter(|label| !label.is_empty()),
    }
}
