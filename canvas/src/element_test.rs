#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults and JSON shape
// =============================================================

#[test]
fn empty_object_takes_every_default() {
    let state: ElementState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, ElementState::default());
}

#[test]
fn defaults_match_documented_values() {
    let state = ElementState::default();
    assert_eq!(state.position, Point::new(100.0, 100.0));
    assert_eq!(state.colour, "blue");
    assert_eq!((state.width, state.height), (100.0, 100.0));
    assert_eq!(state.border_color, "black");
    assert_eq!(state.z_index, Some(0.0));
    assert_eq!(state.blend_mode, Some(BlendMode::Normal));
    assert_eq!(state.font_size, 16.0);
    assert_eq!(state.font, "sans-serif");
    assert_eq!(state.shadow_color, "transparent");
    assert!(!state.shadow_inset);
}

#[test]
fn missing_keys_default_and_present_keys_win() {
    let state: ElementState =
        serde_json::from_str(r#"{"colour":"red","position":[5,6],"angle":-50}"#).unwrap();
    assert_eq!(state.colour, "red");
    assert_eq!(state.position, Point::new(5.0, 6.0));
    assert_eq!(state.angle, -50.0);
    assert_eq!(state.width, 100.0);
}

#[test]
fn serializes_camel_case_keys() {
    let json = serde_json::to_value(ElementState::default()).unwrap();
    for key in [
        "borderWidth",
        "zIndex",
        "blendMode",
        "textColour",
        "textShadowXYOffset",
        "shadowXYOffset",
        "shadowInset",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["blendMode"], "normal");
    assert_eq!(json["position"], serde_json::json!([100.0, 100.0]));
}

#[test]
fn null_z_index_and_blend_survive_round_trip() {
    let state = ElementState { z_index: None, blend_mode: None, ..ElementState::default() };
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains(r#""zIndex":null"#));
    let back: ElementState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn unknown_keys_pass_through() {
    let state: ElementState = serde_json::from_str(r#"{"colour":"red","legacyId":42}"#).unwrap();
    assert_eq!(state.extra.get("legacyId"), Some(&serde_json::json!(42)));
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["legacyId"], 42);
}

#[test]
fn kebab_case_blend_modes() {
    let state: ElementState = serde_json::from_str(r#"{"blendMode":"color-dodge"}"#).unwrap();
    assert_eq!(state.blend_mode, Some(BlendMode::ColorDodge));
}

// =============================================================
// Collections
// =============================================================

#[test]
fn collection_round_trip_is_equal() {
    let elements = vec![
        ElementState::default(),
        ElementState { text: "hi".into(), angle: 120.0, z_index: None, ..ElementState::default() },
    ];
    let json = serialize_collection(&elements).unwrap();
    assert_eq!(parse_collection(&json).unwrap(), elements);
}

#[test]
fn empty_collection() {
    assert_eq!(serialize_collection(&[]).unwrap(), "[]");
    assert!(parse_collection("[]").unwrap().is_empty());
}

#[test]
fn parse_rejects_non_array() {
    assert!(matches!(parse_collection(r#"{"colour":"red"}"#), Err(ImportError::NotAnArray("an object"))));
    assert!(matches!(parse_collection("3"), Err(ImportError::NotAnArray("a number"))));
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse_collection("[{"), Err(ImportError::Json(_))));
}

#[test]
fn parse_rejects_non_object_entries() {
    assert!(matches!(parse_collection("[1, 2]"), Err(ImportError::Json(_))));
}

#[test]
fn unknown_keywords_fall_back_without_losing_the_collection() {
    let text = r#"[
        {"colour":"red","blendMode":"multiply","borderStyle":"dashed"},
        {"colour":"green","blendMode":"plus-lighter","borderStyle":"groove"},
        {"colour":"blue","blendMode":7,"borderStyle":null}
    ]"#;
    let elements = parse_collection(text).unwrap();
    assert_eq!(elements.len(), 3);

    assert_eq!(elements[0].blend_mode, Some(BlendMode::Multiply));
    assert_eq!(elements[0].border_style, BorderStyle::Dashed);

    assert_eq!(elements[1].colour, "green");
    assert_eq!(elements[1].blend_mode, None);
    assert_eq!(elements[1].border_style, BorderStyle::Solid);

    assert_eq!(elements[2].blend_mode, None);
    assert_eq!(elements[2].border_style, BorderStyle::Solid);
}

// =============================================================
// param / with_param
// =============================================================

#[test]
fn param_reads_each_kind() {
    let state = ElementState { width: 42.0, z_index: None, shadow_inset: true, ..ElementState::default() };
    assert_eq!(state.param(ParamName::Width), ParamValue::Number(42.0));
    assert_eq!(state.param(ParamName::ZIndex), ParamValue::MaybeNumber(None));
    assert_eq!(state.param(ParamName::ShadowInset), ParamValue::Flag(true));
    assert_eq!(state.param(ParamName::BorderStyle), ParamValue::Text("solid".into()));
}

#[test]
fn absent_blend_mode_reads_as_normal() {
    let state = ElementState { blend_mode: None, ..ElementState::default() };
    assert_eq!(state.param(ParamName::BlendMode), ParamValue::Text("normal".into()));
}

#[test]
fn with_param_replaces_one_attribute() {
    let state = ElementState::default();
    let next = state.with_param(ParamName::Height, ParamValue::Number(7.0)).unwrap();
    assert_eq!(next.height, 7.0);
    assert_eq!(ElementState { height: 100.0, ..next }, state);
}

#[test]
fn with_param_does_not_mutate_original() {
    let state = ElementState::default();
    let _next = state.with_param(ParamName::Colour, ParamValue::Text("red".into())).unwrap();
    assert_eq!(state.colour, "blue");
}

#[test]
fn every_param_round_trips_through_with_param() {
    let state = ElementState { text: "t".into(), ..ElementState::default() };
    for config in crate::param::PARAMETERS {
        let value = state.param(config.name);
        let next = state.with_param(config.name, value).unwrap();
        assert_eq!(next, state, "{}", config.name.as_str());
    }
}

#[test]
fn with_param_rejects_wrong_type() {
    let err = ElementState::default().with_param(ParamName::Width, ParamValue::Text("x".into())).unwrap_err();
    assert_eq!(err, ParamError::TypeMismatch { name: "width", expected: "number" });
}

#[test]
fn with_param_rejects_unknown_option() {
    let err = ElementState::default()
        .with_param(ParamName::BlendMode, ParamValue::Text("glow".into()))
        .unwrap_err();
    assert_eq!(err, ParamError::UnknownOption { name: "blendMode", value: "glow".into() });
}

#[test]
fn z_index_accepts_plain_number_and_blank() {
    let state = ElementState::default();
    assert_eq!(state.with_param(ParamName::ZIndex, ParamValue::Number(3.0)).unwrap().z_index, Some(3.0));
    assert_eq!(state.with_param(ParamName::ZIndex, ParamValue::MaybeNumber(None)).unwrap().z_index, None);
}

#[test]
fn has_text_tracks_text() {
    assert!(!ElementState::default().has_text());
    assert!(ElementState { text: "x".into(), ..ElementState::default() }.has_text());
}

// =============================================================
// Option keywords
// =============================================================

#[test]
fn option_names_match_variants() {
    for (mode, name) in BlendMode::ALL.iter().zip(BlendMode::NAMES) {
        assert_eq!(mode.as_str(), name);
        assert_eq!(BlendMode::from_name(name), Some(*mode));
    }
    for (style, name) in BorderStyle::ALL.iter().zip(BorderStyle::NAMES) {
        assert_eq!(style.as_str(), name);
        assert_eq!(BorderStyle::from_name(name), Some(*style));
    }
}
