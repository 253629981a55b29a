//! Horizon Select - selection-list binding for Horizon.
//!
//! Renders an options collection onto a native list control, marks the
//! options matching an externally bound value, and reports user changes back
//! as domain values. Option items may be plain values or structured records
//! addressed through field paths, and can be grouped by a field or supplied
//! already grouped.
//!
//! This crate re-exports the signal and property primitives of
//! `horizon-select-core`.
//!
//! # Example
//!
//! ```
//! use horizon_select::widget::{ListControl, NativeControl, SelectList};
//! use horizon_select::SelectAttrs;
//! use serde_json::json;
//!
//! let attrs = json!({
//!     "options": [{"id": 1, "name": "Ann"}, {"id": 2, "name": "Bob"}],
//!     "value": 2,
//!     "optionValuePath": "id",
//!     "optionTargetPath": "id",
//!     "optionLabelPath": "name",
//!     "title": "Person",
//! });
//! let serde_json::Value::Object(attrs) = attrs else { unreachable!() };
//!
//! let list = SelectList::from_attrs(ListControl::new(), SelectAttrs::from_attrs(attrs)?);
//! assert_eq!(list.control().value(), "2");
//! assert_eq!(list.control().entry(0).unwrap().text, "Ann");
//! assert_eq!(list.attributes().get("title"), Some(&json!("Person")));
//! # Ok::<(), horizon_select::Error>(())
//! ```

pub use horizon_select_core::*;

pub mod config;
pub mod error;
pub mod model;
pub mod widget;

pub use config::{Attributes, Prompt, SelectAttrs, SelectConfig, RESERVED_KEYS};
pub use error::{Error, Result};
pub use model::{FieldPath, GroupDescriptor, OptionGroup, OptionGroups, OptionValue, OptionsSource, Selection};
