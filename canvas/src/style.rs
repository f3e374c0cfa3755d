//! Style deriver: element state to the three inline-style bundles.
//!
//! [`derive_styles`] is pure and total. The outer container (`origin`) is
//! sized to the box plus both borders so borders never clip, and carries
//! position, stacking and compositing. The `main` box carries paint, border,
//! rotation and box shadow. `text` is the absolutely positioned overlay.
//!
//! Rotation stays in grad end to end: the stored `angle` goes straight into
//! `rotate(<angle>grad)`.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::element::{BlendMode, BorderStyle, ElementState};
use crate::geom::Point;

/// Outer container: position, size including borders, stacking, compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginStyle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// `None` renders as `auto`.
    pub z_index: Option<f64>,
    pub mix_blend_mode: BlendMode,
}

/// The visible box.
#[derive(Debug, Clone, PartialEq)]
pub struct MainStyle {
    pub background: String,
    pub width: f64,
    pub height: f64,
    /// Rotation in grad.
    pub rotate: f64,
    pub border_width: f64,
    pub border_radius: f64,
    pub border_color: String,
    pub border_style: BorderStyle,
    pub box_shadow: String,
}

/// The text overlay inside the main box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub left: f64,
    pub top: f64,
    pub font_size: f64,
    pub font_family: String,
    pub font_style: String,
    pub font_weight: String,
    pub color: String,
    pub text_shadow: String,
}

/// All three derived bundles of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyles {
    pub origin: OriginStyle,
    pub main: MainStyle,
    pub text: TextStyle,
}

/// Derive the style bundles of `state`.
///
/// With `blend_enabled` false the origin composites as `normal` regardless of
/// the stored blend mode; the state is not touched.
#[must_use]
pub fn derive_styles(state: &ElementState, blend_enabled: bool) -> ElementStyles {
    let origin = OriginStyle {
        left: state.position.x,
        top: state.position.y,
        width: state.width + state.border_width * 2.0,
        height: state.height + state.border_width * 2.0,
        z_index: state.z_index,
        mix_blend_mode: if blend_enabled { state.blend_mode.unwrap_or_default() } else { BlendMode::Normal },
    };

    let main = MainStyle {
        background: state.colour.clone(),
        width: state.width,
        height: state.height,
        rotate: state.angle,
        border_width: state.border_width,
        border_radius: state.border_radius,
        border_color: state.border_color.clone(),
        border_style: state.border_style,
        box_shadow: box_shadow(state.shadow_inset, state.shadow_offset, state.shadow_blur, state.shadow_spread, &state.shadow_color),
    };

    let text = TextStyle {
        left: state.text_position.x,
        top: state.text_position.y,
        font_size: state.font_size,
        font_family: state.font.clone(),
        font_style: state.font_style.clone(),
        font_weight: state.font_weight.clone(),
        color: state.text_colour.clone(),
        text_shadow: text_shadow(state.text_shadow_offset, state.text_shadow_blur, &state.text_shadow_color),
    };

    ElementStyles { origin, main, text }
}

/// `[inset ]<x>px <y>px <blur>px <spread>px <colour>`
#[must_use]
pub fn box_shadow(inset: bool, offset: Point, blur: f64, spread: f64, color: &str) -> String {
    let inset = if inset { "inset " } else { "" };
    format!("{inset}{}px {}px {blur}px {spread}px {color}", offset.x, offset.y)
}

/// `<x>px <y>px <blur>px <colour>`
#[must_use]
pub fn text_shadow(offset: Point, blur: f64, color: &str) -> String {
    format!("{}px {}px {blur}px {color}", offset.x, offset.y)
}

impl OriginStyle {
    /// Inline CSS for the container.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from("position: absolute;");
        push_px(&mut css, "left", self.left);
        push_px(&mut css, "top", self.top);
        push_px(&mut css, "width", self.width);
        push_px(&mut css, "height", self.height);
        match self.z_index {
            Some(z) => push(&mut css, "z-index", z),
            None => push(&mut css, "z-index", "auto"),
        }
        push(&mut css, "mix-blend-mode", self.mix_blend_mode.as_str());
        css
    }
}

impl MainStyle {
    /// Inline CSS for the box.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from("position: absolute; left: 0px; top: 0px;");
        push(&mut css, "background", &self.background);
        push_px(&mut css, "width", self.width);
        push_px(&mut css, "height", self.height);
        push(&mut css, "transform", format_args!("rotate({}grad)", self.rotate));
        push_px(&mut css, "border-width", self.border_width);
        push_px(&mut css, "border-radius", self.border_radius);
        push(&mut css, "border-color", &self.border_color);
        push(&mut css, "border-style", self.border_style.as_str());
        push(&mut css, "box-shadow", &self.box_shadow);
        css
    }
}

impl TextStyle {
    /// Inline CSS for the text overlay.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from("position: absolute; white-space: pre;");
        push_px(&mut css, "left", self.left);
        push_px(&mut css, "top", self.top);
        push_px(&mut css, "font-size", self.font_size);
        push(&mut css, "font-family", &self.font_family);
        push(&mut css, "font-style", &self.font_style);
        push(&mut css, "font-weight", &self.font_weight);
        push(&mut css, "color", &self.color);
        push(&mut css, "text-shadow", &self.text_shadow);
        css
    }
}

/// Append one declaration. The value ends at the first `;`, `{` or `}`, so a
/// stored string can only ever set its own property.
fn push(css: &mut String, property: &str, value: impl std::fmt::Display) {
    let value = value.to_string();
    let value = value.find([';', '{', '}']).map_or(value.as_str(), |end| &value[..end]);
    css.push_str(&format!(" {property}: {};", value.trim_end()));
}

fn push_px(css: &mut String, property: &str, value: f64) {
    push(css, property, format_args!("{value}px"));
}
