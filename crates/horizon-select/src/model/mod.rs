//! Option model for Horizon Select.
//!
//! This module holds the option resolution engine, independent of any
//! control or rendering:
//!
//! - `OptionValue`: An option item or bound value (primitive or record)
//! - `FieldPath`: A dotted accessor into an option item
//! - `identity` / `label`: Native value and display text of an option
//! - `OptionsSource`: The options collection in one of its three shapes
//! - `normalize` / `OptionGroups`: The canonical grouped form of a source
//! - `SelectionMapper` / `Selection`: Forward and reverse selection mapping
//!
//! # Architecture Overview
//!
//! ```text
//! ┌───────────────┐  normalize  ┌──────────────┐  SelectionMapper  ┌───────────┐
//! │ OptionsSource │────────────>│ OptionGroups │<─────────────────>│ Selection │
//! └───────────────┘             └──────────────┘                   └───────────┘
//!                                      │
//!                               identity / label
//!                                      │
//!                                      v
//!                               native values
//! ```

mod group;
mod identity;
mod path;
pub mod selection;
mod source;
mod value;

pub use group::{normalize, OptionGroup, OptionGroups};
pub use identity::{identity, label};
pub use path::FieldPath;
pub use selection::{Selection, SelectionMapper};
pub use source::{GroupDescriptor, GroupedEntry, OptionsSource};
pub use value::OptionValue;
