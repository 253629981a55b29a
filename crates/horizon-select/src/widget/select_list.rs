//! The select list controller.
//!
//! [`SelectList`] binds a domain value and an options collection to a
//! [`NativeControl`]. Data flows one way: the host sets options, value and
//! configuration, and the list re-renders and marks the selection; when the
//! user changes the control, the host calls [`SelectList::change`] and the
//! list emits the chosen value through [`SelectList::update`]. The list never
//! writes the emitted value back into its own state.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use horizon_select::widget::{ListControl, NativeControl, SelectList};
//! use horizon_select::{OptionValue, SelectConfig, Selection};
//!
//! let mut list = SelectList::new(
//!     ListControl::new(),
//!     SelectConfig::new(),
//!     vec!["unknown", "male", "female"],
//!     "female",
//! );
//! assert_eq!(list.control().value(), "female");
//!
//! let updates = Arc::new(Mutex::new(Vec::new()));
//! let sink = updates.clone();
//! list.update.connect(move |selection: &Selection| sink.lock().unwrap().push(selection.clone()));
//!
//! list.control_mut().set_value("male");
//! list.change();
//! assert_eq!(
//!     updates.lock().unwrap().as_slice(),
//!     &[Selection::Single(Some(OptionValue::from("male")))]
//! );
//! ```

use horizon_select_core::logging::{span_names, targets};
use horizon_select_core::{PerfSpan, Property, Signal};

use crate::config::{Attributes, SelectAttrs, SelectConfig};
use crate::model::{normalize, OptionGroups, OptionValue, OptionsSource, Selection, SelectionMapper};

use super::control::{NativeControl, NativeEntry};
use super::render::{native_entries, render_options, DefaultOptionDelegate, OptionDelegate, RenderedOption};

/// A selection list bound to a native control.
pub struct SelectList<C: NativeControl> {
    control: C,
    config: SelectConfig,
    source: OptionsSource,
    value: Property<OptionValue>,
    attributes: Attributes,
    groups: OptionGroups,
    mapper: SelectionMapper,
    rendered: Vec<RenderedOption>,
    delegate: Box<dyn OptionDelegate>,

    /// Emitted once per user change with the resolved selection.
    pub update: Signal<Selection>,
}

impl<C: NativeControl> SelectList<C> {
    /// Creates a list and renders it onto `control`.
    pub fn new(
        control: C,
        config: SelectConfig,
        options: impl Into<OptionsSource>,
        value: impl Into<OptionValue>,
    ) -> Self {
        let mut list = Self {
            control,
            config,
            source: options.into(),
            value: Property::new(value.into()),
            attributes: Attributes::default(),
            groups: OptionGroups::default(),
            mapper: SelectionMapper::default(),
            rendered: Vec::new(),
            delegate: Box::new(DefaultOptionDelegate),
            update: Signal::new(),
        };
        list.refresh();
        list
    }

    /// Creates a list from parsed host attributes.
    pub fn from_attrs(control: C, attrs: SelectAttrs) -> Self {
        let SelectAttrs {
            config,
            options,
            value,
            attributes,
        } = attrs;
        let mut list = Self::new(control, config, options, value);
        list.attributes = attributes;
        list
    }

    /// Replaces the delegate computing each option's display text.
    pub fn with_delegate(mut self, delegate: impl OptionDelegate + 'static) -> Self {
        self.delegate = Box::new(delegate);
        self.refresh();
        self
    }

    /// The native control.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Mutable access to the native control, for driving user interaction.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// The current configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The options collection as given.
    pub fn options(&self) -> &OptionsSource {
        &self.source
    }

    /// The normalized options.
    pub fn groups(&self) -> &OptionGroups {
        &self.groups
    }

    /// The options in render order, with their positions.
    pub fn rendered_options(&self) -> &[RenderedOption] {
        &self.rendered
    }

    /// Attributes forwarded to the control.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The externally bound value.
    pub fn value(&self) -> &Property<OptionValue> {
        &self.value
    }

    /// Replaces the options and re-renders.
    pub fn set_options(&mut self, options: impl Into<OptionsSource>) {
        self.source = options.into();
        self.refresh();
    }

    /// Replaces the bound value and re-marks the selection.
    pub fn set_value(&mut self, value: impl Into<OptionValue>) {
        if self.value.set(value.into()) {
            self.sync_selection();
        }
    }

    /// Replaces the configuration and re-renders.
    pub fn set_config(&mut self, config: SelectConfig) {
        if self.config != config {
            self.config = config;
            self.refresh();
        }
    }

    /// The selection derived from the bound value.
    ///
    /// Values without a matching option are dropped.
    pub fn selection(&self) -> Selection {
        self.value.with(|value| {
            if self.config.multiple {
                Selection::Multiple(
                    value
                        .elements()
                        .iter()
                        .filter_map(|element| self.mapper.find_by_value(&self.groups, element))
                        .collect(),
                )
            } else {
                Selection::Single(self.mapper.find_by_value(&self.groups, value))
            }
        })
    }

    /// Handles a user change of the control's selection.
    ///
    /// Reads the selected native values, resolves them back to option items
    /// and emits [`update`](Self::update) exactly once.
    pub fn change(&mut self) {
        let _perf = PerfSpan::new(span_names::CHANGE);
        let selection = if self.config.multiple {
            let natives = self.control.selected_values();
            Selection::Multiple(self.mapper.resolve_selected_multiple(&self.groups, &natives))
        } else {
            let native = self.control.value();
            Selection::Single(self.mapper.resolve_selected(&self.groups, &native))
        };
        tracing::debug!(target: targets::SELECTION, ?selection, "user changed selection");
        self.update.emit(selection);
    }

    fn refresh(&mut self) {
        let _perf = PerfSpan::new(span_names::REFRESH);

        self.mapper = SelectionMapper::new(
            self.config.option_value_path.clone(),
            self.config.option_target_path.clone(),
        );
        self.groups = normalize(&self.source, self.config.group_label_path.as_ref());
        self.rendered = render_options(
            &self.groups,
            &self.mapper,
            self.config.option_label_path.as_ref(),
        );

        let duplicates = self.groups.duplicate_identities(self.mapper.effective_value_path());
        if !duplicates.is_empty() {
            tracing::debug!(
                target: targets::SYNC,
                ?duplicates,
                "options share native values; the first match wins"
            );
        }

        let mut entries = Vec::with_capacity(self.rendered.len() + 1);
        if self.config.prompt.is_enabled() {
            entries.push(
                NativeEntry::new("", self.config.prompt.label().unwrap_or_default())
                    .with_disabled(!self.config.prompt_is_selectable),
            );
        }
        entries.extend(native_entries(&self.rendered, self.delegate.as_ref()));

        tracing::debug!(
            target: targets::SYNC,
            groups = self.groups.len(),
            options = self.rendered.len(),
            pre_grouped = self.groups.is_pre_grouped(),
            "rendering options"
        );
        self.control.set_multiple(self.config.multiple);
        self.control.set_entries(entries);
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        let selected = self.value.with(|value| {
            let mut selected: Vec<String> = if self.config.multiple {
                self.mapper.selected_identities(&self.groups, value)
            } else {
                self.mapper
                    .selected_identity(&self.groups, value)
                    .into_iter()
                    .collect()
            };
            if !self.config.multiple && self.config.prompt.is_enabled() && value.is_empty() {
                selected.push(String::new());
            }
            selected
        });
        tracing::trace!(target: targets::SYNC, ?selected, "marking selection");
        self.control.apply_selection(&selected);
    }
}

impl<C: NativeControl + std::fmt::Debug> std::fmt::Debug for SelectList<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectList")
            .field("control", &self.control)
            .field("config", &self.config)
            .field("value", &self.value)
            .field("groups", &self.groups)
            .field("update_connections", &self.update.connection_count())
            .finish_non_exhaustive()
    }
}
