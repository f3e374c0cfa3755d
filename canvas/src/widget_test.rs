#![allow(clippy::float_cmp)]

use super::*;
use crate::element::ElementState;
use crate::param::parameter;

fn props_for(name: ParamName, state: &ElementState) -> ResolvedProps {
    parameter(name).unwrap().resolve_props(state)
}

fn plain(name: ParamName) -> ResolvedProps {
    props_for(name, &ElementState::default())
}

fn number(value: Option<ParamValue>) -> f64 {
    match value {
        Some(ParamValue::Number(n)) => n,
        other => panic!("expected number, got {other:?}"),
    }
}

fn point(value: Option<ParamValue>) -> Point {
    match value {
        Some(ParamValue::Point(p)) => p,
        other => panic!("expected point, got {other:?}"),
    }
}

// =============================================================
// Scalar drags
// =============================================================

#[test]
fn y_drag_up_increases() {
    let next = WidgetKind::YDragPointerLock.update(
        ParamName::Height,
        &ParamValue::Number(50.0),
        WidgetInput::Drag(Point::new(0.0, -20.0)),
        &plain(ParamName::Height),
    );
    assert_eq!(number(next), 70.0);
}

#[test]
fn width_drag_clamps_at_zero() {
    let next = WidgetKind::YDragPointerLock.update(
        ParamName::Width,
        &ParamValue::Number(50.0),
        WidgetInput::Drag(Point::new(0.0, 70.0)),
        &plain(ParamName::Width),
    );
    assert_eq!(number(next), 0.0);
}

#[test]
fn angle_drag_goes_negative() {
    let next = WidgetKind::YDragPointerLock.update(
        ParamName::Angle,
        &ParamValue::Number(10.0),
        WidgetInput::Drag(Point::new(0.0, 30.0)),
        &plain(ParamName::Angle),
    );
    assert_eq!(number(next), -20.0);
}

#[test]
fn x_drag_right_increases() {
    let next = WidgetKind::XDrag.update(
        ParamName::BorderRadius,
        &ParamValue::Number(5.0),
        WidgetInput::Drag(Point::new(12.0, 99.0)),
        &plain(ParamName::BorderRadius),
    );
    assert_eq!(number(next), 17.0);
}

#[test]
fn drag_offsets_from_saved_not_current() {
    // Two moves of one drag each report the total offset; the second result
    // must not stack on the first.
    let saved = ParamValue::Number(40.0);
    let props = plain(ParamName::FontSize);
    let kind = WidgetKind::YDragPointerLock;
    let first = kind.update(ParamName::FontSize, &saved, WidgetInput::Drag(Point::new(0.0, -5.0)), &props);
    let second = kind.update(ParamName::FontSize, &saved, WidgetInput::Drag(Point::new(0.0, -8.0)), &props);
    assert_eq!(number(first), 45.0);
    assert_eq!(number(second), 48.0);
}

// =============================================================
// Point drags
// =============================================================

#[test]
fn xy_drag_offsets_position() {
    let next = WidgetKind::XYDrag.update(
        ParamName::Position,
        &ParamValue::Point(Point::new(100.0, 100.0)),
        WidgetInput::Drag(Point::new(20.0, -10.0)),
        &plain(ParamName::Position),
    );
    assert_eq!(point(next), Point::new(120.0, 90.0));
}

#[test]
fn locked_xy_drag_unrotates_by_element_angle() {
    let state = ElementState { angle: 100.0, ..ElementState::default() };
    let next = WidgetKind::XYDragPointerLock.update(
        ParamName::ShadowXYOffset,
        &ParamValue::Point(Point::default()),
        WidgetInput::Drag(Point::new(10.0, 0.0)),
        &props_for(ParamName::ShadowXYOffset, &state),
    );
    let p = point(next);
    assert!(p.x.abs() < 1e-9);
    assert!((p.y + 10.0).abs() < 1e-9);
}

#[test]
fn locked_xy_drag_unrotated_at_zero_angle() {
    let next = WidgetKind::XYDragPointerLock.update(
        ParamName::ShadowXYOffset,
        &ParamValue::Point(Point::new(1.0, 1.0)),
        WidgetInput::Drag(Point::new(3.0, 4.0)),
        &plain(ParamName::ShadowXYOffset),
    );
    assert_eq!(point(next), Point::new(4.0, 5.0));
}

#[test]
fn drag_with_wrong_saved_kind_is_ignored() {
    let next = WidgetKind::XYDrag.update(
        ParamName::Position,
        &ParamValue::Number(1.0),
        WidgetInput::Drag(Point::new(1.0, 1.0)),
        &plain(ParamName::Position),
    );
    assert_eq!(next, None);
}

// =============================================================
// Inputs
// =============================================================

#[test]
fn text_input_commits_verbatim() {
    let next = WidgetKind::TextInput.update(
        ParamName::Colour,
        &ParamValue::Text("blue".into()),
        WidgetInput::Commit("rgb(1, 2, 3)".into()),
        &plain(ParamName::Colour),
    );
    assert_eq!(next, Some(ParamValue::Text("rgb(1, 2, 3)".into())));
}

#[test]
fn number_input_blank_clears() {
    assert_eq!(parse_number_input("   "), Some(ParamValue::MaybeNumber(None)));
}

#[test]
fn number_input_parses_finite() {
    assert_eq!(parse_number_input(" -3.5 "), Some(ParamValue::MaybeNumber(Some(-3.5))));
}

#[test]
fn number_input_rejects_garbage_and_non_finite() {
    assert_eq!(parse_number_input("abc"), None);
    assert_eq!(parse_number_input("inf"), None);
    assert_eq!(parse_number_input("NaN"), None);
}

#[test]
fn select_accepts_listed_option() {
    let next = WidgetKind::SelectArray.update(
        ParamName::BlendMode,
        &ParamValue::Text("normal".into()),
        WidgetInput::Select("multiply".into()),
        &plain(ParamName::BlendMode),
    );
    assert_eq!(next, Some(ParamValue::Text("multiply".into())));
}

#[test]
fn select_rejects_unlisted_option() {
    let next = WidgetKind::SelectArray.update(
        ParamName::BorderStyle,
        &ParamValue::Text("solid".into()),
        WidgetInput::Select("groove".into()),
        &plain(ParamName::BorderStyle),
    );
    assert_eq!(next, None);
}

#[test]
fn checkbox_toggles() {
    let props = plain(ParamName::ShadowInset);
    let on = WidgetKind::Checkbox.update(ParamName::ShadowInset, &ParamValue::Flag(false), WidgetInput::Toggle, &props);
    assert_eq!(on, Some(ParamValue::Flag(true)));
    let off = WidgetKind::Checkbox.update(ParamName::ShadowInset, &ParamValue::Flag(true), WidgetInput::Toggle, &props);
    assert_eq!(off, Some(ParamValue::Flag(false)));
}

#[test]
fn mismatched_input_is_ignored() {
    let next = WidgetKind::Checkbox.update(
        ParamName::ShadowInset,
        &ParamValue::Flag(false),
        WidgetInput::Commit("true".into()),
        &plain(ParamName::ShadowInset),
    );
    assert_eq!(next, None);
}

// =============================================================
// Classification
// =============================================================

#[test]
fn drag_kinds_and_pointer_lock() {
    assert!(WidgetKind::XYDrag.is_drag());
    assert!(!WidgetKind::XYDrag.uses_pointer_lock());
    assert!(WidgetKind::YDragPointerLock.uses_pointer_lock());
    assert!(!WidgetKind::TextInput.is_drag());
    assert!(!WidgetKind::Checkbox.uses_pointer_lock());
}
