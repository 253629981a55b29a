//! Rendering of canonical options into native entries.
//!
//! Each option is rendered once, in canonical order, into a
//! [`RenderedOption`] carrying its identity, its label and its position.
//! An [`OptionDelegate`] then decides the text the control displays, which
//! lets hosts customize option content without touching selection logic.
//!
//! Positions are presentational only. For an option inside a named group,
//! `group_index` is the group's position and `index` the option's position
//! within the group. For an ungrouped option, `group_index` is `None` and
//! `index` is its position in the canonical list.

use crate::model::{label, FieldPath, OptionGroups, OptionValue, SelectionMapper};

use super::control::NativeEntry;

/// One option as presented to the control.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOption {
    /// The option item.
    pub option: OptionValue,
    /// Its native value.
    pub value: String,
    /// Its label.
    pub label: String,
    /// Position within its group, or within the canonical list when ungrouped.
    pub index: usize,
    /// Position of its named group, if any.
    pub group_index: Option<usize>,
    /// Name of its group, if any.
    pub group: Option<String>,
}

/// Computes the text displayed for a rendered option.
///
/// Closures of the form `Fn(&RenderedOption) -> String` are delegates too.
pub trait OptionDelegate: Send + Sync {
    /// The display text for `option`.
    fn display_text(&self, option: &RenderedOption) -> String;
}

/// Displays each option's label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptionDelegate;

impl OptionDelegate for DefaultOptionDelegate {
    fn display_text(&self, option: &RenderedOption) -> String {
        option.label.clone()
    }
}

impl<F> OptionDelegate for F
where
    F: Fn(&RenderedOption) -> String + Send + Sync,
{
    fn display_text(&self, option: &RenderedOption) -> String {
        self(option)
    }
}

/// Renders every option of `groups` in canonical order.
pub fn render_options(
    groups: &OptionGroups,
    mapper: &SelectionMapper,
    label_path: Option<&FieldPath>,
) -> Vec<RenderedOption> {
    let value_path = mapper.effective_value_path();
    let mut rendered = Vec::with_capacity(groups.option_count());
    for (group_index, group) in groups.groups().iter().enumerate() {
        let named = group.name().map(str::to_owned);
        for (index, option) in group.options().iter().enumerate() {
            let (index, group_index) = match named {
                Some(_) => (index, Some(group_index)),
                None => (group_index, None),
            };
            rendered.push(RenderedOption {
                value: mapper.identity_of(option),
                label: label(Some(option), label_path, value_path),
                option: option.clone(),
                index,
                group_index,
                group: named.clone(),
            });
        }
    }
    rendered
}

/// Converts rendered options into unselected native entries.
pub fn native_entries(
    rendered: &[RenderedOption],
    delegate: &dyn OptionDelegate,
) -> Vec<NativeEntry> {
    rendered
        .iter()
        .map(|option| NativeEntry {
            value: option.value.clone(),
            text: delegate.display_text(option),
            group: option.group.clone(),
            disabled: false,
            selected: false,
        })
        .collect()
}
