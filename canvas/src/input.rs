//! Input model: keys, modifier keys, held-key modes, and drag sessions.
//!
//! `DragSession` is the state a drag handle tracks between pointer-down and
//! pointer-up. It remembers the attribute value at drag start and turns the
//! raw pointer stream into a total offset, for both plain drags (absolute
//! client positions) and pointer-locked drags (per-event movement deltas
//! while the cursor is pinned).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::param::ParamValue;

/// Command modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Meta is held; the keystroke belongs to the browser or OS.
    #[must_use]
    pub fn is_command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"a"`, `"Backspace"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Case-insensitive match for single-character keys, exact otherwise.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        if self.0.chars().count() == 1 {
            self.0.eq_ignore_ascii_case(name)
        } else {
            self.0 == name
        }
    }
}

/// A key event as delivered to the panel.
#[derive(Debug, Clone)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Auto-repeat from a key being held down.
    pub repeat: bool,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: Key(key.to_owned()), modifiers: Modifiers::default(), repeat: false }
    }
}

/// Modes that last only while their key is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// `a`: a dropped file is appended instead of replacing the collection.
    pub append: bool,
    /// `b`: every element renders with normal compositing.
    pub suppress_blend: bool,
}

/// How a drag handle reads the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Offset is the pointer's client position minus its start position.
    Absolute,
    /// Pointer is locked; offset is the running sum of movement deltas.
    PointerLock,
}

/// An in-progress drag on one handle.
#[derive(Debug, Clone)]
pub struct DragSession {
    mode: DragMode,
    saved: ParamValue,
    start: Point,
    accumulated: Point,
}

impl DragSession {
    /// Begin a drag at client position `start`, remembering the attribute's
    /// current value.
    #[must_use]
    pub fn begin(mode: DragMode, saved: ParamValue, start: Point) -> Self {
        Self { mode, saved, start, accumulated: Point::default() }
    }

    /// The attribute value when the drag started.
    #[must_use]
    pub fn saved(&self) -> &ParamValue {
        &self.saved
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Feed one pointer-move event and return the total offset since the
    /// drag began. `client` is the event's client position, `movement` its
    /// movement delta; each mode reads the one that stays meaningful.
    pub fn pointer_moved(&mut self, client: Point, movement: Point) -> Point {
        match self.mode {
            DragMode::Absolute => client.delta_from(self.start),
            DragMode::PointerLock => {
                self.accumulated = self.accumulated.offset(movement);
                self.accumulated
            }
        }
    }
}
