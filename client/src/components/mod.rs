//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ColoursPanel` owns the element collection signal and provides it as
//! context; element views and their parameter widgets read snapshots from it
//! and write back through full-state replacement.

pub mod colour_element;
pub mod colours_panel;
pub mod drag_handle;
pub mod parameter_input;
