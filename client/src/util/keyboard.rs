//! Keyboard event mapping for the panel's shortcuts.
//!
//! Shortcuts are window-wide, but keys typed into form fields belong to the
//! field: those events are filtered out before they reach the panel.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use canvas::input::{Key, KeyInput, Modifiers};

/// Tag names of elements that take typed text.
const TYPING_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

pub fn map_modifiers(ctrl: bool, meta: bool) -> Modifiers {
    Modifiers { ctrl, meta }
}

pub fn key_input(key: &str, modifiers: Modifiers, repeat: bool) -> KeyInput {
    KeyInput { key: Key(key.to_owned()), modifiers, repeat }
}

/// Whether an element with this tag name swallows typed keys.
pub fn is_typing_tag(tag_name: &str) -> bool {
    TYPING_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Convert a DOM keyboard event into the panel's key input.
#[cfg(feature = "hydrate")]
pub fn from_event(ev: &web_sys::KeyboardEvent) -> KeyInput {
    key_input(&ev.key(), map_modifiers(ev.ctrl_key(), ev.meta_key()), ev.repeat())
}

/// Whether the event was dispatched to a text field or an editable region.
#[cfg(feature = "hydrate")]
pub fn targets_typing_element(ev: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .is_some_and(|el| is_typing_tag(&el.tag_name()) || el.is_content_editable())
}
