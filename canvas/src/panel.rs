//! Panel controller core: the ordered element collection and every
//! operation that rewrites it.
//!
//! The panel is the single writer of the collection. Element views hold read
//! snapshots and ask for changes through [`Panel::replace`] and the reorder
//! and delete operations. Imports replace or extend the collection
//! atomically; a failed import never reaches the panel, because parsing
//! happens before any method here is called.
//!
//! Keyboard handling follows the engine pattern: [`Panel::on_key_down`]
//! updates held-key modes and returns [`Action`]s for the host (file
//! download) to carry out.
//!
//! Paint order: `zIndex` decides, array position breaks ties. The host
//! renders slots in array order with `z-index` from the state, which the
//! browser resolves the same way [`Panel::paint_order`] does.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use rand::Rng;

use crate::consts::{EXPECTED_DROP_MIME, HEX_DIGITS, NEW_HEIGHT_FROM, NEW_HEIGHT_SPAN, NEW_WIDTH_FROM, NEW_WIDTH_SPAN};
use crate::element::{ElementState, serialize_collection};
use crate::filename::save_filename;
use crate::geom::Point;
use crate::input::{HeldKeys, KeyInput};

/// Actions returned from key handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Offer `contents` as a file download named `filename`.
    Save { filename: String, contents: String },
    /// The collection was emptied.
    Cleared,
    /// A render-only flag changed (blend suppression).
    RenderNeeded,
}

/// The element collection plus transient held-key modes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    elements: Vec<ElementState>,
    held: HeldKeys,
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A panel holding `elements` in paint order.
    #[must_use]
    pub fn with_elements(elements: Vec<ElementState>) -> Self {
        Self { elements, held: HeldKeys::default() }
    }

    // --- Queries ---

    #[must_use]
    pub fn elements(&self) -> &[ElementState] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ElementState> {
        self.elements.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn held_keys(&self) -> HeldKeys {
        self.held
    }

    /// Whether elements composite with their stored blend mode right now.
    #[must_use]
    pub fn blend_enabled(&self) -> bool {
        !self.held.suppress_blend
    }

    /// Slot indices from bottom to top: by `zIndex` (absent counts as 0),
    /// then by array position.
    #[must_use]
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by(|&a, &b| {
            let za = self.elements[a].z_index.unwrap_or(0.0);
            let zb = self.elements[b].z_index.unwrap_or(0.0);
            za.total_cmp(&zb).then(a.cmp(&b))
        });
        order
    }

    // --- Element lifecycle ---

    /// Append a new element at canvas-relative `position` with a random
    /// colour, border colour and size. Returns the new slot index.
    pub fn create_at<R: Rng + ?Sized>(&mut self, position: Point, rng: &mut R) -> usize {
        let element = ElementState {
            position,
            colour: random_colour(rng),
            border_color: random_colour(rng),
            width: random_size(rng, NEW_WIDTH_FROM, NEW_WIDTH_SPAN),
            height: random_size(rng, NEW_HEIGHT_FROM, NEW_HEIGHT_SPAN),
            ..ElementState::default()
        };
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Remove the element at `index`; later slots shift down by one.
    pub fn delete(&mut self, index: usize) -> Option<ElementState> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Swap the element one slot towards the back. No-op at the back.
    pub fn to_back(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.elements.len() {
            return false;
        }
        self.elements.swap(index, index - 1);
        true
    }

    /// Swap the element one slot towards the front. No-op at the front.
    pub fn to_front(&mut self, index: usize) -> bool {
        if index >= self.elements.len().saturating_sub(1) {
            return false;
        }
        self.elements.swap(index, index + 1);
        true
    }

    /// Replace the whole slot at `index` with an edited snapshot.
    pub fn replace(&mut self, index: usize, state: ElementState) -> bool {
        let Some(slot) = self.elements.get_mut(index) else {
            return false;
        };
        *slot = state;
        true
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    // --- Import / export ---

    /// Serialize the collection for the clipboard or a file.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serialize_collection(&self.elements)
    }

    /// Append pasted elements after the existing ones. Returns how many were added.
    pub fn paste(&mut self, elements: Vec<ElementState>) -> usize {
        let added = elements.len();
        self.elements.extend(elements);
        added
    }

    /// Apply a dropped collection: appended while `a` is held, otherwise it
    /// replaces the current one. Returns the resulting length.
    pub fn drop_elements(&mut self, elements: Vec<ElementState>) -> usize {
        if self.held.append {
            self.elements.extend(elements);
        } else {
            self.elements = elements;
        }
        self.elements.len()
    }

    /// Build the save action for the current collection.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error.
    pub fn save(&self, timestamp_ms: u64) -> Result<Action, serde_json::Error> {
        Ok(Action::Save { filename: save_filename(timestamp_ms), contents: self.to_json()? })
    }

    // --- Keyboard ---

    /// Handle a key press. `timestamp_ms` names the file when `s` saves.
    ///
    /// Keys pressed with Ctrl or Meta are left to the browser, and
    /// auto-repeat never triggers a second save or clear.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error from a save.
    pub fn on_key_down(&mut self, input: &KeyInput, timestamp_ms: u64) -> Result<Vec<Action>, serde_json::Error> {
        if input.modifiers.is_command() {
            return Ok(Vec::new());
        }
        let key = &input.key;
        if key.is("a") {
            self.held.append = true;
        } else if key.is("b") {
            if !self.held.suppress_blend {
                self.held.suppress_blend = true;
                return Ok(vec![Action::RenderNeeded]);
            }
        } else if key.is("s") && !input.repeat {
            return Ok(vec![self.save(timestamp_ms)?]);
        } else if key.is("Backspace") && !input.repeat {
            self.clear();
            return Ok(vec![Action::Cleared]);
        }
        Ok(Vec::new())
    }

    /// Handle a key release, ending any held-key mode it started.
    pub fn on_key_up(&mut self, input: &KeyInput) -> Vec<Action> {
        if input.key.is("a") {
            self.held.append = false;
        } else if input.key.is("b") && self.held.suppress_blend {
            self.held.suppress_blend = false;
            return vec![Action::RenderNeeded];
        }
        Vec::new()
    }

    /// Drop all held-key modes, e.g. when the window loses focus and the
    /// matching key-up will never arrive.
    pub fn release_keys(&mut self) -> Vec<Action> {
        let was_suppressed = self.held.suppress_blend;
        self.held = HeldKeys::default();
        if was_suppressed { vec![Action::RenderNeeded] } else { Vec::new() }
    }
}

/// Alert text for a dropped file whose MIME type is not JSON, if any.
#[must_use]
pub fn drop_mime_warning(mime: &str) -> Option<String> {
    (mime != EXPECTED_DROP_MIME).then(|| format!("expected {EXPECTED_DROP_MIME}, got {mime}"))
}

/// A random `#RRGGBB` colour with uppercase digits.
pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut colour = String::with_capacity(7);
    colour.push('#');
    for _ in 0..6 {
        colour.push(char::from(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())]));
    }
    colour
}

/// `from + floor(rand * span)`, i.e. a whole number in `from..from + span`.
pub fn random_size<R: Rng + ?Sized>(rng: &mut R, from: u32, span: u32) -> f64 {
    f64::from(from + rng.random_range(0..span))
}
