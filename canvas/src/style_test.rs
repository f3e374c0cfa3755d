#![allow(clippy::float_cmp)]

use super::*;

fn styled() -> ElementState {
    ElementState {
        position: Point::new(10.0, 20.0),
        colour: "red".into(),
        width: 80.0,
        height: 40.0,
        angle: 50.0,
        border_width: 3.0,
        z_index: Some(2.0),
        blend_mode: Some(BlendMode::Multiply),
        text: "hi".into(),
        text_position: Point::new(4.0, 5.0),
        shadow_offset: Point::new(1.0, 2.0),
        shadow_blur: 6.0,
        shadow_spread: 1.5,
        shadow_color: "gray".into(),
        ..ElementState::default()
    }
}

// =============================================================
// derive_styles
// =============================================================

#[test]
fn derive_is_deterministic_and_leaves_state_alone() {
    let state = styled();
    let copy = state.clone();
    assert_eq!(derive_styles(&state, true), derive_styles(&state, true));
    assert_eq!(state, copy);
}

#[test]
fn origin_size_includes_both_borders() {
    let origin = derive_styles(&styled(), true).origin;
    assert_eq!((origin.left, origin.top), (10.0, 20.0));
    assert_eq!((origin.width, origin.height), (86.0, 46.0));
}

#[test]
fn origin_carries_stacking_and_blend() {
    let origin = derive_styles(&styled(), true).origin;
    assert_eq!(origin.z_index, Some(2.0));
    assert_eq!(origin.mix_blend_mode, BlendMode::Multiply);
}

#[test]
fn suppressed_blend_forces_normal() {
    let state = styled();
    assert_eq!(derive_styles(&state, false).origin.mix_blend_mode, BlendMode::Normal);
    assert_eq!(state.blend_mode, Some(BlendMode::Multiply));
}

#[test]
fn absent_blend_composites_normally() {
    let state = ElementState { blend_mode: None, ..styled() };
    assert_eq!(derive_styles(&state, true).origin.mix_blend_mode, BlendMode::Normal);
}

#[test]
fn main_carries_paint_and_rotation() {
    let main = derive_styles(&styled(), true).main;
    assert_eq!(main.background, "red");
    assert_eq!((main.width, main.height), (80.0, 40.0));
    assert_eq!(main.rotate, 50.0);
    assert_eq!(main.box_shadow, "1px 2px 6px 1.5px gray");
}

#[test]
fn text_style_follows_text_attributes() {
    let text = derive_styles(&styled(), true).text;
    assert_eq!((text.left, text.top), (4.0, 5.0));
    assert_eq!(text.font_size, 16.0);
    assert_eq!(text.font_family, "sans-serif");
    assert_eq!(text.text_shadow, "0px 0px 0px transparent");
}

// =============================================================
// Shadow strings
// =============================================================

#[test]
fn box_shadow_inset_prefix() {
    assert_eq!(box_shadow(true, Point::new(-1.0, 0.0), 2.0, 0.0, "black"), "inset -1px 0px 2px 0px black");
    assert_eq!(box_shadow(false, Point::new(-1.0, 0.0), 2.0, 0.0, "black"), "-1px 0px 2px 0px black");
}

#[test]
fn text_shadow_format() {
    assert_eq!(text_shadow(Point::new(3.0, 4.0), 5.0, "#FFF"), "3px 4px 5px #FFF");
}

// =============================================================
// CSS output
// =============================================================

#[test]
fn origin_css() {
    let css = derive_styles(&styled(), true).origin.to_css();
    assert_eq!(
        css,
        "position: absolute; left: 10px; top: 20px; width: 86px; height: 46px; z-index: 2; mix-blend-mode: multiply;"
    );
}

#[test]
fn origin_css_auto_z_index() {
    let state = ElementState { z_index: None, ..styled() };
    assert!(derive_styles(&state, true).origin.to_css().contains("z-index: auto;"));
}

#[test]
fn main_css_rotates_in_grad() {
    let css = derive_styles(&styled(), true).main.to_css();
    assert!(css.starts_with("position: absolute; left: 0px; top: 0px;"));
    assert!(css.contains("transform: rotate(50grad);"));
    assert!(css.contains("border-width: 3px;"));
    assert!(css.contains("border-style: solid;"));
    assert!(css.contains("box-shadow: 1px 2px 6px 1.5px gray;"));
}

#[test]
fn text_css_preserves_whitespace() {
    let css = derive_styles(&styled(), true).text.to_css();
    assert!(css.starts_with("position: absolute; white-space: pre;"));
    assert!(css.contains("left: 4px; top: 5px;"));
    assert!(css.contains("color: black;"));
}

#[test]
fn string_values_cannot_add_declarations() {
    let state = ElementState {
        colour: "red; display: none".into(),
        font: "serif} body { color: red".into(),
        shadow_color: "gray;position:fixed".into(),
        ..styled()
    };
    let styles = derive_styles(&state, true);

    let main = styles.main.to_css();
    assert!(main.contains(" background: red;"));
    assert!(!main.contains("display"));
    assert!(!main.contains("fixed"));
    assert!(main.contains("box-shadow: 1px 2px 6px 1.5px gray;"));

    let text = styles.text.to_css();
    assert!(text.contains(" font-family: serif;"));
    assert!(!text.contains('{') && !text.contains('}'));
}
