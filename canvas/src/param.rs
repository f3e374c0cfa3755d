//! Parameter registry: which control edits which attribute, and when it shows.
//!
//! The controls stack of every element is rendered from [`PARAMETERS`], one
//! entry per attribute in display order. Each entry names a [`WidgetKind`]
//! whose update rule lives in [`crate::widget`], carries static widget props,
//! and optionally derives extra props from the live state or hides itself
//! behind a visibility predicate. Adding an attribute means adding a
//! [`ParamName`] variant and a row here; no per-attribute handler code.

#[cfg(test)]
#[path = "param_test.rs"]
mod param_test;

use crate::element::{BlendMode, BorderStyle, ElementState};
use crate::geom::Point;
use crate::widget::WidgetKind;

/// Names of the editable attributes of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    Position,
    Colour,
    Width,
    Height,
    Angle,
    BorderWidth,
    BorderRadius,
    BorderStyle,
    BorderColor,
    ZIndex,
    BlendMode,
    Text,
    TextColour,
    TextPosition,
    FontSize,
    Font,
    FontStyle,
    FontWeight,
    TextShadowXYOffset,
    TextShadowBlur,
    TextShadowColor,
    ShadowXYOffset,
    ShadowSpread,
    ShadowBlur,
    ShadowColor,
    ShadowInset,
}

impl ParamName {
    /// The attribute's key in the JSON exchange format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Colour => "colour",
            Self::Width => "width",
            Self::Height => "height",
            Self::Angle => "angle",
            Self::BorderWidth => "borderWidth",
            Self::BorderRadius => "borderRadius",
            Self::BorderStyle => "borderStyle",
            Self::BorderColor => "borderColor",
            Self::ZIndex => "zIndex",
            Self::BlendMode => "blendMode",
            Self::Text => "text",
            Self::TextColour => "textColour",
            Self::TextPosition => "textPosition",
            Self::FontSize => "fontSize",
            Self::Font => "font",
            Self::FontStyle => "fontStyle",
            Self::FontWeight => "fontWeight",
            Self::TextShadowXYOffset => "textShadowXYOffset",
            Self::TextShadowBlur => "textShadowBlur",
            Self::TextShadowColor => "textShadowColor",
            Self::ShadowXYOffset => "shadowXYOffset",
            Self::ShadowSpread => "shadowSpread",
            Self::ShadowBlur => "shadowBlur",
            Self::ShadowColor => "shadowColor",
            Self::ShadowInset => "shadowInset",
        }
    }

    /// Which [`ParamValue`] variant the attribute holds, for error messages.
    #[must_use]
    pub fn value_kind(self) -> &'static str {
        match self {
            Self::Position | Self::TextPosition | Self::TextShadowXYOffset | Self::ShadowXYOffset => "point",
            Self::Width
            | Self::Height
            | Self::Angle
            | Self::BorderWidth
            | Self::BorderRadius
            | Self::FontSize
            | Self::TextShadowBlur
            | Self::ShadowSpread
            | Self::ShadowBlur => "number",
            Self::ZIndex => "optional number",
            Self::ShadowInset => "flag",
            Self::Colour
            | Self::BorderStyle
            | Self::BorderColor
            | Self::BlendMode
            | Self::Text
            | Self::TextColour
            | Self::Font
            | Self::FontStyle
            | Self::FontWeight
            | Self::TextShadowColor
            | Self::ShadowColor => "text",
        }
    }

    /// Whether single-axis drags of this attribute clamp at zero.
    ///
    /// Every scalar is a length except `angle`, which turns freely.
    #[must_use]
    pub fn is_non_negative(self) -> bool {
        !matches!(self, Self::Angle)
    }
}

/// A dynamically typed attribute value flowing between widgets and state.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    /// A number input that may be blank.
    MaybeNumber(Option<f64>),
    Point(Point),
    Flag(bool),
}

impl ParamValue {
    /// Short display form used in drag-handle labels.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{}", n.round()),
            Self::MaybeNumber(Some(n)) => format!("{n}"),
            Self::MaybeNumber(None) => String::new(),
            Self::Point(p) => format!("{:.0},{:.0}", p.x, p.y),
            Self::Flag(b) => b.to_string(),
        }
    }
}

/// Static widget configuration, fixed for the whole app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetProps {
    /// Label shown on drag handles and checkboxes; the attribute key when absent.
    pub text: Option<&'static str>,
    /// Placeholder and tooltip of text and number inputs.
    pub placeholder: Option<&'static str>,
    /// Tooltip of select menus.
    pub title: Option<&'static str>,
    /// Choices of a select menu.
    pub options: &'static [&'static str],
}

impl WidgetProps {
    pub const NONE: Self = Self { text: None, placeholder: None, title: None, options: &[] };
}

/// Widget props computed from the live element state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateProps {
    /// Element angle in grad; pointer-locked XY drags rotate their deltas by it.
    pub angle: Option<f64>,
}

/// Static props merged with state-derived props; what a widget actually gets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedProps {
    pub text: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub title: Option<&'static str>,
    pub options: &'static [&'static str],
    /// Rotation applied to drag deltas, in grad. Zero when not derived.
    pub angle: f64,
}

impl ResolvedProps {
    /// Label for the widget: the configured text, or the attribute key.
    #[must_use]
    pub fn label(&self, name: ParamName) -> &'static str {
        self.text.unwrap_or(name.as_str())
    }
}

/// One row of the parameter registry.
#[derive(Debug, Clone, Copy)]
pub struct ParameterConfig {
    pub name: ParamName,
    pub kind: WidgetKind,
    pub props: WidgetProps,
    pub props_by_state: Option<fn(&ElementState) -> StateProps>,
    pub visibility: Option<fn(&ElementState) -> bool>,
}

impl ParameterConfig {
    /// Whether this control renders for `state`. Visible when no predicate is set.
    #[must_use]
    pub fn is_visible(&self, state: &ElementState) -> bool {
        self.visibility.is_none_or(|visible| visible(state))
    }

    /// Merge static props with the props derived from `state`.
    #[must_use]
    pub fn resolve_props(&self, state: &ElementState) -> ResolvedProps {
        let derived = self.props_by_state.map(|f| f(state)).unwrap_or_default();
        ResolvedProps {
            text: self.props.text,
            placeholder: self.props.placeholder,
            title: self.props.title,
            options: self.props.options,
            angle: derived.angle.unwrap_or(0.0),
        }
    }
}

fn has_text(state: &ElementState) -> bool {
    state.has_text()
}

fn angle_of(state: &ElementState) -> StateProps {
    StateProps { angle: Some(state.angle) }
}

const fn entry(name: ParamName, kind: WidgetKind, props: WidgetProps) -> ParameterConfig {
    ParameterConfig { name, kind, props, props_by_state: None, visibility: None }
}

const fn labelled(text: &'static str) -> WidgetProps {
    WidgetProps { text: Some(text), ..WidgetProps::NONE }
}

const fn placeholder(text: &'static str) -> WidgetProps {
    WidgetProps { placeholder: Some(text), ..WidgetProps::NONE }
}

const fn menu(title: &'static str, options: &'static [&'static str]) -> WidgetProps {
    WidgetProps { title: Some(title), options, ..WidgetProps::NONE }
}

/// The controls stack, in display order.
pub static PARAMETERS: &[ParameterConfig] = &[
    entry(ParamName::Colour, WidgetKind::TextInput, placeholder("colour")),
    entry(ParamName::Position, WidgetKind::XYDrag, WidgetProps::NONE),
    entry(ParamName::Width, WidgetKind::YDragPointerLock, WidgetProps::NONE),
    entry(ParamName::Height, WidgetKind::YDragPointerLock, WidgetProps::NONE),
    entry(ParamName::Angle, WidgetKind::YDragPointerLock, WidgetProps::NONE),
    entry(ParamName::BorderWidth, WidgetKind::YDragPointerLock, labelled("border width")),
    entry(ParamName::BorderRadius, WidgetKind::YDragPointerLock, labelled("border radius")),
    entry(ParamName::BorderStyle, WidgetKind::SelectArray, menu("border style", &BorderStyle::NAMES)),
    entry(ParamName::BorderColor, WidgetKind::TextInput, placeholder("border colour")),
    entry(ParamName::ZIndex, WidgetKind::NumberInput, placeholder("z-index")),
    entry(ParamName::BlendMode, WidgetKind::SelectArray, menu("blend mode", &BlendMode::NAMES)),
    entry(ParamName::Text, WidgetKind::TextInput, placeholder("text")),
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::TextColour, WidgetKind::TextInput, placeholder("text color"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::FontSize, WidgetKind::YDragPointerLock, labelled("font size"))
    },
    ParameterConfig {
        props_by_state: Some(angle_of),
        visibility: Some(has_text),
        ..entry(ParamName::TextPosition, WidgetKind::XYDragPointerLock, labelled("text position"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::Font, WidgetKind::TextInput, placeholder("font family"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::FontStyle, WidgetKind::TextInput, placeholder("font style"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::FontWeight, WidgetKind::TextInput, placeholder("font weight"))
    },
    ParameterConfig {
        props_by_state: Some(angle_of),
        visibility: Some(has_text),
        ..entry(ParamName::TextShadowXYOffset, WidgetKind::XYDragPointerLock, labelled("text shadow offset"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::TextShadowBlur, WidgetKind::YDragPointerLock, labelled("text shadow blur"))
    },
    ParameterConfig {
        visibility: Some(has_text),
        ..entry(ParamName::TextShadowColor, WidgetKind::TextInput, placeholder("text shadow color"))
    },
    ParameterConfig {
        props_by_state: Some(angle_of),
        ..entry(ParamName::ShadowXYOffset, WidgetKind::XYDragPointerLock, labelled("shadow offset"))
    },
    entry(ParamName::ShadowSpread, WidgetKind::YDragPointerLock, labelled("shadow spread")),
    entry(ParamName::ShadowBlur, WidgetKind::YDragPointerLock, labelled("shadow blur")),
    entry(ParamName::ShadowColor, WidgetKind::TextInput, placeholder("shadow color")),
    entry(ParamName::ShadowInset, WidgetKind::Checkbox, labelled("inset shadow")),
];

/// Registry rows that render for `state`, in display order.
pub fn visible_parameters(state: &ElementState) -> impl Iterator<Item = &'static ParameterConfig> + '_ {
    PARAMETERS.iter().filter(move |config| config.is_visible(state))
}

/// Find the registry row for an attribute.
#[must_use]
pub fn parameter(name: ParamName) -> Option<&'static ParameterConfig> {
    PARAMETERS.iter().find(|config| config.name == name)
}
