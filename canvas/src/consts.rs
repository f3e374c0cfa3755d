//! Shared constants for the canvas crate.

// ── Rotation ────────────────────────────────────────────────────

/// Grad in half a turn; a full turn is 400 grad.
pub const GRAD_PER_HALF_TURN: f64 = 200.0;

// ── New elements ────────────────────────────────────────────────

/// Lower bound and span of a freshly created element's width.
/// The width is `WIDTH_FROM + floor(rand * WIDTH_SPAN)`.
pub const NEW_WIDTH_FROM: u32 = 97;
pub const NEW_WIDTH_SPAN: u32 = 222;

/// Lower bound and span of a freshly created element's height.
pub const NEW_HEIGHT_FROM: u32 = 130;
pub const NEW_HEIGHT_SPAN: u32 = 244;

/// Digits a random colour is drawn from.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// ── Import / export ─────────────────────────────────────────────

/// MIME type expected from a dropped collection file.
pub const EXPECTED_DROP_MIME: &str = "application/json";

/// Content type of a saved collection file.
pub const SAVE_CONTENT_TYPE: &str = "text/json";

/// Substitution key for save-file names: base-4 digit `d` maps to `KEY[d]`.
pub const FILENAME_KEY: &[u8; 4] = b"colr";

// ── Viewport ────────────────────────────────────────────────────

/// Canvas size used until the real window size is known.
pub const DEFAULT_VIEWPORT: (f64, f64) = (500.0, 500.0);
