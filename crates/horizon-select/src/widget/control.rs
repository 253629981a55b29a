//! Native list controls.
//!
//! [`NativeControl`] is everything the select engine needs from the
//! underlying list control: enumerate its entries with their native values
//! and selected flags, replace the entries, and set the selected flags.
//!
//! [`ListControl`] is an in-memory control that behaves like an HTML
//! `<select>` element. Hosts without a real control, and tests, use it
//! directly; `set_value` and `set_selected` stand in for user interaction.
//!
//! # Example
//!
//! ```
//! use horizon_select::widget::{ListControl, NativeControl, NativeEntry};
//!
//! let mut control = ListControl::new();
//! control.set_entries(vec![NativeEntry::new("a", "A"), NativeEntry::new("b", "B")]);
//! control.set_value("b");
//! assert_eq!(control.value(), "b");
//! ```

/// One entry of a native list control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeEntry {
    /// The native value (option identity).
    pub value: String,
    /// The text shown for the entry.
    pub text: String,
    /// The name of the group the entry is rendered in, if any.
    pub group: Option<String>,
    /// Whether the entry is disabled.
    pub disabled: bool,
    /// Whether the entry is selected.
    pub selected: bool,
}

impl NativeEntry {
    /// Creates an enabled, unselected entry outside any group.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Places the entry in a group.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The binding surface of a native list control.
pub trait NativeControl {
    /// The control's entries in display order.
    fn entries(&self) -> Vec<NativeEntry>;

    /// Replaces all entries.
    fn set_entries(&mut self, entries: Vec<NativeEntry>);

    /// Switches between single and multiple selection.
    fn set_multiple(&mut self, multiple: bool);

    /// Marks exactly the entries whose native values are in `values` as selected.
    fn apply_selection(&mut self, values: &[String]);

    /// Native values of the selected entries, in entry order.
    fn selected_values(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.value)
            .collect()
    }

    /// The native value of the first selected entry, or `""`.
    fn value(&self) -> String {
        self.selected_values().into_iter().next().unwrap_or_default()
    }
}

/// An in-memory list control with `<select>` semantics.
///
/// In single mode at most one entry is selected; when a selection pass leaves
/// none selected, the first enabled entry becomes selected, like a browser's
/// dropdown. In multiple mode any set of entries may be selected.
#[derive(Debug, Clone, Default)]
pub struct ListControl {
    entries: Vec<NativeEntry>,
    multiple: bool,
}

impl ListControl {
    /// Creates an empty single-select control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the control allows multiple selection.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&NativeEntry> {
        self.entries.get(index)
    }

    /// Index of the first selected entry.
    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.selected)
    }

    /// Selects the first entry with native value `value`, deselecting all
    /// others. Selects nothing if no entry has that value.
    pub fn set_value(&mut self, value: &str) {
        let mut found = false;
        for entry in &mut self.entries {
            entry.selected = !found && entry.value == value;
            found |= entry.selected;
        }
    }

    /// Sets the selected flag of one entry.
    ///
    /// In single mode, selecting an entry deselects all others.
    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if index >= self.entries.len() {
            return;
        }
        if selected && !self.multiple {
            for entry in &mut self.entries {
                entry.selected = false;
            }
        }
        self.entries[index].selected = selected;
    }

    fn ensure_default_selection(&mut self) {
        if self.multiple || self.entries.iter().any(|entry| entry.selected) {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|entry| !entry.disabled) {
            entry.selected = true;
        }
    }
}

impl NativeControl for ListControl {
    fn entries(&self) -> Vec<NativeEntry> {
        self.entries.clone()
    }

    fn set_entries(&mut self, entries: Vec<NativeEntry>) {
        self.entries = entries;
        if !self.multiple {
            let mut found = false;
            for entry in &mut self.entries {
                if found {
                    entry.selected = false;
                }
                found |= entry.selected;
            }
        }
        self.ensure_default_selection();
    }

    fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }

    fn apply_selection(&mut self, values: &[String]) {
        let mut found = false;
        for entry in &mut self.entries {
            let wanted = values.contains(&entry.value);
            entry.selected = wanted && (self.multiple || !found);
            found |= entry.selected;
        }
        self.ensure_default_selection();
    }
}
