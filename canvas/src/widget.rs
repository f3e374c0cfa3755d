//! Widget kinds and their value-update rules.
//!
//! Each [`WidgetKind`] is a pure strategy from (saved value, user input,
//! resolved props) to the attribute's next value. The browser host only
//! gathers input and forwards the result through the element's change
//! callback; every rule that decides a value lives here.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::geom::Point;
use crate::param::{ParamName, ParamValue, ResolvedProps};

/// The input widget a parameter is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Text field committed on Enter or blur.
    TextInput,
    /// Number field committed on Enter or blur; blank clears the value.
    NumberInput,
    /// Free 2D drag from the pointer's start position.
    XYDrag,
    /// 2D drag with the pointer locked, delta rotated into the element frame.
    XYDragPointerLock,
    /// Horizontal drag; right increases.
    XDrag,
    /// Vertical drag; up increases.
    YDrag,
    XDragPointerLock,
    YDragPointerLock,
    /// Choice from the props' option list.
    SelectArray,
    /// Boolean toggle.
    Checkbox,
}

/// Raw user input delivered by a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetInput {
    /// Text committed from a text or number field.
    Commit(String),
    /// Accumulated drag offset since the drag started, in screen pixels.
    Drag(Point),
    /// Option picked from a select menu.
    Select(String),
    /// Checkbox clicked.
    Toggle,
}

impl WidgetKind {
    /// Whether this widget is driven by pointer drags.
    #[must_use]
    pub fn is_drag(self) -> bool {
        matches!(
            self,
            Self::XYDrag
                | Self::XYDragPointerLock
                | Self::XDrag
                | Self::YDrag
                | Self::XDragPointerLock
                | Self::YDragPointerLock
        )
    }

    /// Whether the drag locks and re-centres the pointer.
    #[must_use]
    pub fn uses_pointer_lock(self) -> bool {
        matches!(self, Self::XYDragPointerLock | Self::XDragPointerLock | Self::YDragPointerLock)
    }

    /// Compute the attribute's next value.
    ///
    /// `saved` is the value when the interaction started (the drag start for
    /// drags, the current value otherwise). Returns `None` when the input
    /// does not apply to this widget or cannot be committed, in which case
    /// the attribute keeps its value.
    #[must_use]
    pub fn update(
        self,
        name: ParamName,
        saved: &ParamValue,
        input: WidgetInput,
        props: &ResolvedProps,
    ) -> Option<ParamValue> {
        match (self, input) {
            (Self::TextInput, WidgetInput::Commit(text)) => Some(ParamValue::Text(text)),
            (Self::NumberInput, WidgetInput::Commit(text)) => parse_number_input(&text),
            (Self::XYDrag, WidgetInput::Drag(delta)) => drag_point(saved, delta),
            (Self::XYDragPointerLock, WidgetInput::Drag(delta)) => drag_point(saved, delta.unrotate_grad(props.angle)),
            (Self::XDrag | Self::XDragPointerLock, WidgetInput::Drag(delta)) => drag_scalar(name, saved, delta.x),
            (Self::YDrag | Self::YDragPointerLock, WidgetInput::Drag(delta)) => drag_scalar(name, saved, -delta.y),
            (Self::SelectArray, WidgetInput::Select(option)) => {
                props.options.iter().any(|o| *o == option).then_some(ParamValue::Text(option))
            }
            (Self::Checkbox, WidgetInput::Toggle) => match saved {
                ParamValue::Flag(on) => Some(ParamValue::Flag(!on)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Parse a committed number field. Blank clears the value; text that is not
/// a finite number is rejected with `None`.
#[must_use]
pub fn parse_number_input(text: &str) -> Option<ParamValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(ParamValue::MaybeNumber(None));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(ParamValue::MaybeNumber(Some(n))),
        _ => None,
    }
}

fn drag_point(saved: &ParamValue, delta: Point) -> Option<ParamValue> {
    match saved {
        ParamValue::Point(p) => Some(ParamValue::Point(p.offset(delta))),
        _ => None,
    }
}

fn drag_scalar(name: ParamName, saved: &ParamValue, delta: f64) -> Option<ParamValue> {
    let ParamValue::Number(start) = saved else {
        return None;
    };
    let next = start + delta;
    Some(ParamValue::Number(if name.is_non_negative() { next.max(0.0) } else { next }))
}
