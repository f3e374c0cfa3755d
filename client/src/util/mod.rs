//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the pure parts stay testable natively.

pub mod clipboard;
pub mod clock;
pub mod file_io;
pub mod keyboard;
