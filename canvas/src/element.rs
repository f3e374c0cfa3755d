//! Element model: the attribute record of one colour element and the
//! collection-level JSON import.
//!
//! An [`ElementState`] is an immutable snapshot. Edits never mutate a state in
//! place; [`ElementState::with_param`] returns a new snapshot with one
//! attribute replaced, and the panel swaps the whole slot. Offsets
//! (`textPosition`, both shadow offsets) are stored in the element's
//! unrotated local frame, so a stored state never depends on its angle.
//!
//! The JSON shape is the exchange format for clipboard and files: camelCase
//! keys, points as `[x, y]` arrays. Missing keys take the defaults below and
//! unknown keys ride along in [`ElementState::extra`] so they survive a
//! round-trip. An unrecognised `borderStyle` or `blendMode` keyword falls
//! back to `solid` or unset instead of failing the import.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ImportError, ParamError};
use crate::geom::Point;
use crate::param::{ParamName, ParamValue};

/// CSS border style of the main box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Hidden,
}

impl BorderStyle {
    /// All styles in menu order.
    pub const ALL: [Self; 5] = [Self::Solid, Self::Dashed, Self::Dotted, Self::Double, Self::Hidden];

    /// CSS keywords in menu order.
    pub const NAMES: [&'static str; 5] = ["solid", "dashed", "dotted", "double", "hidden"];

    /// The CSS keyword for this style.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
            Self::Hidden => "hidden",
        }
    }

    /// Look up a style by CSS keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

/// Compositing mode between an element and the layers beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// All modes in menu order.
    pub const ALL: [Self; 16] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// CSS keywords in menu order.
    pub const NAMES: [&'static str; 16] = [
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ];

    /// The CSS `mix-blend-mode` keyword for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::ColorDodge => "color-dodge",
            Self::ColorBurn => "color-burn",
            Self::HardLight => "hard-light",
            Self::SoftLight => "soft-light",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
        }
    }

    /// Look up a mode by CSS keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

/// One placed colour element, as stored in the panel and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementState {
    /// Top-left of the outer container, relative to the canvas.
    pub position: Point,
    /// Background of the main box as a CSS colour string.
    pub colour: String,
    pub width: f64,
    pub height: f64,
    /// Rotation of the main box in grad (400 per turn). Unrestricted.
    pub angle: f64,
    pub border_width: f64,
    pub border_radius: f64,
    #[serde(deserialize_with = "lenient_border_style")]
    pub border_style: BorderStyle,
    pub border_color: String,
    /// Explicit stacking order. `null` means CSS `auto`.
    pub z_index: Option<f64>,
    /// `null` means the element composites normally.
    #[serde(deserialize_with = "lenient_blend_mode")]
    pub blend_mode: Option<BlendMode>,

    /// Overlay text; the text controls are hidden while this is empty.
    pub text: String,
    pub text_colour: String,
    /// Local offset of the text overlay inside the main box.
    pub text_position: Point,
    pub font_size: f64,
    pub font: String,
    pub font_style: String,
    pub font_weight: String,
    #[serde(rename = "textShadowXYOffset")]
    pub text_shadow_offset: Point,
    pub text_shadow_blur: f64,
    pub text_shadow_color: String,

    #[serde(rename = "shadowXYOffset")]
    pub shadow_offset: Point,
    pub shadow_spread: f64,
    pub shadow_blur: f64,
    pub shadow_color: String,
    pub shadow_inset: bool,

    /// Keys this build does not know about, kept for re-export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            position: Point::new(100.0, 100.0),
            colour: "blue".to_owned(),
            width: 100.0,
            height: 100.0,
            angle: 0.0,
            border_width: 0.0,
            border_radius: 0.0,
            border_style: BorderStyle::Solid,
            border_color: "black".to_owned(),
            z_index: Some(0.0),
            blend_mode: Some(BlendMode::Normal),
            text: String::new(),
            text_colour: "black".to_owned(),
            text_position: Point::default(),
            font_size: 16.0,
            font: "sans-serif".to_owned(),
            font_style: "normal".to_owned(),
            font_weight: "normal".to_owned(),
            text_shadow_offset: Point::default(),
            text_shadow_blur: 0.0,
            text_shadow_color: "transparent".to_owned(),
            shadow_offset: Point::default(),
            shadow_spread: 0.0,
            shadow_blur: 0.0,
            shadow_color: "transparent".to_owned(),
            shadow_inset: false,
            extra: serde_json::Map::new(),
        }
    }
}

impl ElementState {
    /// Whether the element carries overlay text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Read one attribute by name.
    #[must_use]
    pub fn param(&self, name: ParamName) -> ParamValue {
        match name {
            ParamName::Position => ParamValue::Point(self.position),
            ParamName::Colour => ParamValue::Text(self.colour.clone()),
            ParamName::Width => ParamValue::Number(self.width),
            ParamName::Height => ParamValue::Number(self.height),
            ParamName::Angle => ParamValue::Number(self.angle),
            ParamName::BorderWidth => ParamValue::Number(self.border_width),
            ParamName::BorderRadius => ParamValue::Number(self.border_radius),
            ParamName::BorderStyle => ParamValue::Text(self.border_style.as_str().to_owned()),
            ParamName::BorderColor => ParamValue::Text(self.border_color.clone()),
            ParamName::ZIndex => ParamValue::MaybeNumber(self.z_index),
            ParamName::BlendMode => {
                ParamValue::Text(self.blend_mode.unwrap_or_default().as_str().to_owned())
            }
            ParamName::Text => ParamValue::Text(self.text.clone()),
            ParamName::TextColour => ParamValue::Text(self.text_colour.clone()),
            ParamName::TextPosition => ParamValue::Point(self.text_position),
            ParamName::FontSize => ParamValue::Number(self.font_size),
            ParamName::Font => ParamValue::Text(self.font.clone()),
            ParamName::FontStyle => ParamValue::Text(self.font_style.clone()),
            ParamName::FontWeight => ParamValue::Text(self.font_weight.clone()),
            ParamName::TextShadowXYOffset => ParamValue::Point(self.text_shadow_offset),
            ParamName::TextShadowBlur => ParamValue::Number(self.text_shadow_blur),
            ParamName::TextShadowColor => ParamValue::Text(self.text_shadow_color.clone()),
            ParamName::ShadowXYOffset => ParamValue::Point(self.shadow_offset),
            ParamName::ShadowSpread => ParamValue::Number(self.shadow_spread),
            ParamName::ShadowBlur => ParamValue::Number(self.shadow_blur),
            ParamName::ShadowColor => ParamValue::Text(self.shadow_color.clone()),
            ParamName::ShadowInset => ParamValue::Flag(self.shadow_inset),
        }
    }

    /// Return a copy of this state with one attribute replaced.
    ///
    /// This is the only edit path for an element: the result replaces the
    /// whole slot in the panel.
    ///
    /// # Errors
    ///
    /// [`ParamError::TypeMismatch`] when `value` is the wrong variant for
    /// `name`, [`ParamError::UnknownOption`] when a choice parameter gets a
    /// keyword outside its option list.
    pub fn with_param(&self, name: ParamName, value: ParamValue) -> Result<Self, ParamError> {
        let mut next = self.clone();
        match (name, value) {
            (ParamName::Position, ParamValue::Point(p)) => next.position = p,
            (ParamName::Colour, ParamValue::Text(s)) => next.colour = s,
            (ParamName::Width, ParamValue::Number(n)) => next.width = n,
            (ParamName::Height, ParamValue::Number(n)) => next.height = n,
            (ParamName::Angle, ParamValue::Number(n)) => next.angle = n,
            (ParamName::BorderWidth, ParamValue::Number(n)) => next.border_width = n,
            (ParamName::BorderRadius, ParamValue::Number(n)) => next.border_radius = n,
            (ParamName::BorderStyle, ParamValue::Text(s)) => {
                next.border_style = BorderStyle::from_name(&s)
                    .ok_or(ParamError::UnknownOption { name: name.as_str(), value: s })?;
            }
            (ParamName::BorderColor, ParamValue::Text(s)) => next.border_color = s,
            (ParamName::ZIndex, ParamValue::MaybeNumber(n)) => next.z_index = n,
            (ParamName::ZIndex, ParamValue::Number(n)) => next.z_index = Some(n),
            (ParamName::BlendMode, ParamValue::Text(s)) => {
                let mode = BlendMode::from_name(&s)
                    .ok_or(ParamError::UnknownOption { name: name.as_str(), value: s })?;
                next.blend_mode = Some(mode);
            }
            (ParamName::Text, ParamValue::Text(s)) => next.text = s,
            (ParamName::TextColour, ParamValue::Text(s)) => next.text_colour = s,
            (ParamName::TextPosition, ParamValue::Point(p)) => next.text_position = p,
            (ParamName::FontSize, ParamValue::Number(n)) => next.font_size = n,
            (ParamName::Font, ParamValue::Text(s)) => next.font = s,
            (ParamName::FontStyle, ParamValue::Text(s)) => next.font_style = s,
            (ParamName::FontWeight, ParamValue::Text(s)) => next.font_weight = s,
            (ParamName::TextShadowXYOffset, ParamValue::Point(p)) => next.text_shadow_offset = p,
            (ParamName::TextShadowBlur, ParamValue::Number(n)) => next.text_shadow_blur = n,
            (ParamName::TextShadowColor, ParamValue::Text(s)) => next.text_shadow_color = s,
            (ParamName::ShadowXYOffset, ParamValue::Point(p)) => next.shadow_offset = p,
            (ParamName::ShadowSpread, ParamValue::Number(n)) => next.shadow_spread = n,
            (ParamName::ShadowBlur, ParamValue::Number(n)) => next.shadow_blur = n,
            (ParamName::ShadowColor, ParamValue::Text(s)) => next.shadow_color = s,
            (ParamName::ShadowInset, ParamValue::Flag(b)) => next.shadow_inset = b,
            (name, _) => {
                return Err(ParamError::TypeMismatch { name: name.as_str(), expected: name.value_kind() });
            }
        }
        Ok(next)
    }
}

/// Parse clipboard or file text into a collection of elements.
///
/// # Errors
///
/// [`ImportError::Json`] for malformed JSON or an entry that is not an
/// element object, [`ImportError::NotAnArray`] when the top level is valid
/// JSON but not an array.
pub fn parse_collection(text: &str) -> Result<Vec<ElementState>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray(json_kind(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a collection to the exchange format.
///
/// # Errors
///
/// Propagates the serializer error. None is expected for these types, but
/// the copy and save paths log rather than assume.
pub fn serialize_collection(elements: &[ElementState]) -> Result<String, serde_json::Error> {
    serde_json::to_string(elements)
}

// A keyword this build does not know imports as if it were absent, the way a
// browser drops a CSS value it cannot parse.
fn lenient_border_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BorderStyle, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(BorderStyle::from_name).unwrap_or_default())
}

fn lenient_blend_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BlendMode>, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_str().and_then(BlendMode::from_name))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
