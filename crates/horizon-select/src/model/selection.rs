//! Selection mapping.
//!
//! [`SelectionMapper`] maps between domain values and options in
//! [`OptionGroups`]:
//!
//! - **forward**: the value bound to the select → the matching option(s),
//!   used to mark the control's selected entries;
//! - **reverse**: the control's selected native value(s) → the matching
//!   option(s), used to report user changes.
//!
//! Matching compares identity strings. Groups are scanned in order, items in
//! order within each group, and the first match wins.
//!
//! # Example
//!
//! ```
//! use horizon_select::model::{normalize, FieldPath, OptionsSource, SelectionMapper};
//! use serde_json::json;
//!
//! let source = OptionsSource::items(vec![
//!     json!({"id": 1, "value": "male"}),
//!     json!({"id": 2, "value": "female"}),
//! ]);
//! let groups = normalize(&source, None);
//! let mapper = SelectionMapper::new(None, FieldPath::parse("id"));
//!
//! assert_eq!(mapper.selected_identity(&groups, &2.into()).as_deref(), Some("2"));
//! assert_eq!(mapper.resolve_selected(&groups, "1"), Some(1.into()));
//! ```

use horizon_select_core::logging::targets;

use super::group::OptionGroups;
use super::identity::identity;
use super::path::FieldPath;
use super::value::OptionValue;

/// The selection state derived for a select, or reported by it.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Single-select: the selected option or projection, if any.
    Single(Option<OptionValue>),
    /// Multi-select: the selected options or projections, in option order.
    Multiple(Vec<OptionValue>),
}

impl Selection {
    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_none(),
            Selection::Multiple(values) => values.is_empty(),
        }
    }

    /// Converts the selection into a single value.
    ///
    /// A missing single selection becomes the absent value and a multiple
    /// selection becomes a list.
    pub fn into_value(self) -> OptionValue {
        match self {
            Selection::Single(value) => value.unwrap_or_default(),
            Selection::Multiple(values) => OptionValue::from(values),
        }
    }
}

/// Maps between domain values, native values and options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionMapper {
    value_path: Option<FieldPath>,
    target_path: Option<FieldPath>,
}

impl SelectionMapper {
    /// Creates a mapper.
    ///
    /// `value_path` picks the identity field of an option; `target_path` picks
    /// the field reported back instead of the whole option. When only a target
    /// path is given it also serves as the identity field.
    pub fn new(value_path: Option<FieldPath>, target_path: Option<FieldPath>) -> Self {
        Self {
            value_path,
            target_path,
        }
    }

    /// The path used to compute option identities.
    pub fn effective_value_path(&self) -> Option<&FieldPath> {
        self.value_path.as_ref().or(self.target_path.as_ref())
    }

    /// The projection applied to matched options.
    pub fn target_path(&self) -> Option<&FieldPath> {
        self.target_path.as_ref()
    }

    /// The native value of `option`.
    pub fn identity_of(&self, option: &OptionValue) -> String {
        identity(Some(option), self.effective_value_path())
    }

    /// The identity a bound domain value is looked up by.
    ///
    /// With a target path the host holds the projected field (such as an id),
    /// so its own string form is the identity. Otherwise the value is a full
    /// option and its identity is computed like any option's.
    fn target_identity(&self, value: &OptionValue) -> String {
        if self.target_path.is_some() {
            value.to_native_string()
        } else {
            self.identity_of(value)
        }
    }

    /// Finds the first option whose identity equals `native`.
    pub fn find_option<'a>(&self, groups: &'a OptionGroups, native: &str) -> Option<&'a OptionValue> {
        groups
            .options()
            .find(|option| self.identity_of(option) == native)
    }

    /// A matched option lacking the target field projects to nothing.
    fn project(&self, option: &OptionValue) -> Option<OptionValue> {
        Some(option.project(self.target_path.as_ref())).filter(|value| !value.is_absent())
    }

    /// Forward lookup: the option (or projection) matching a bound value.
    ///
    /// An empty value (`null` or `""`) never matches.
    pub fn find_by_value(&self, groups: &OptionGroups, value: &OptionValue) -> Option<OptionValue> {
        if value.is_empty() {
            return None;
        }
        let target = self.target_identity(value);
        let found = self.find_option(groups, &target).and_then(|option| self.project(option));
        tracing::trace!(target: targets::SELECTION, %target, found = found.is_some(), "forward lookup");
        found
    }

    /// Forward lookup: the native value to mark selected for a bound value.
    pub fn selected_identity(&self, groups: &OptionGroups, value: &OptionValue) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let target = self.target_identity(value);
        self.find_option(groups, &target).map(|_| target)
    }

    /// Forward lookup for multi-select: the native values to mark selected.
    ///
    /// `values` is a list of bound values (a lone value counts as a one-element
    /// list). Identities are returned in discovery order, each once.
    pub fn selected_identities(&self, groups: &OptionGroups, values: &OptionValue) -> Vec<String> {
        let mut identities: Vec<String> = Vec::new();
        for value in values.elements() {
            if let Some(id) = self.selected_identity(groups, &value)
                && !identities.contains(&id)
            {
                identities.push(id);
            }
        }
        identities
    }

    /// Reverse lookup: the option (or projection) for a native value.
    ///
    /// The empty native value (a prompt entry) resolves to `None`.
    pub fn resolve_selected(&self, groups: &OptionGroups, native: &str) -> Option<OptionValue> {
        if native.is_empty() {
            return None;
        }
        let resolved = self.find_option(groups, native).and_then(|option| self.project(option));
        tracing::trace!(target: targets::SELECTION, native, found = resolved.is_some(), "reverse lookup");
        resolved
    }

    /// Reverse lookup for multi-select.
    ///
    /// Resolves each native value in the order given (the control's option
    /// order) and keeps the ones that resolve.
    pub fn resolve_selected_multiple<S: AsRef<str>>(
        &self,
        groups: &OptionGroups,
        natives: &[S],
    ) -> Vec<OptionValue> {
        natives
            .iter()
            .filter_map(|native| self.resolve_selected(groups, native.as_ref()))
            .collect()
    }
}
