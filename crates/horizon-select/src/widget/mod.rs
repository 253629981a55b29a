//! Binding options and a value to a native list control.
//!
//! - [`control`]: the [`NativeControl`] seam and the in-memory [`ListControl`]
//! - [`render`]: option positions and display text
//! - [`select_list`]: the [`SelectList`] controller

pub mod control;
pub mod render;
pub mod select_list;

pub use control::{ListControl, NativeControl, NativeEntry};
pub use render::{DefaultOptionDelegate, OptionDelegate, RenderedOption, native_entries, render_options};
pub use select_list::SelectList;
