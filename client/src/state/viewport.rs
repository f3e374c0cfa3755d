//! Window size the canvas is laid out against.
//!
//! `Root` provides a `RwSignal<ViewportState>` and keeps it in step with the
//! window's inner size; the panel sizes its container from it.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use canvas::consts::DEFAULT_VIEWPORT;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        let (width, height) = DEFAULT_VIEWPORT;
        Self { width, height }
    }
}

impl ViewportState {
    /// Inline size style for the canvas container.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("position: relative; width: {}px; height: {}px;", self.width, self.height)
    }
}
