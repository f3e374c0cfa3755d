//! Shared reactive state provided through Leptos context.
//!
//! The element collection itself is a `canvas::panel::Panel` held in a
//! signal by `ColoursPanel`; the structs here cover what lives outside it.

pub mod viewport;
