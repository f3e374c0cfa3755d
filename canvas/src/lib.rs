//! Editor core for the colour-element panel.
//!
//! This crate holds everything about the editor that does not need a
//! browser: the element model and its JSON exchange format, the parameter
//! registry that drives each element's controls, widget update rules, drag
//! session math, style derivation, and the panel controller that owns the
//! collection. The `client` crate wires DOM events to these types and
//! carries out the [`panel::Action`]s they return.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | Element collection, lifecycle, import/export and key handling |
//! | [`element`] | Element state, defaults, and collection JSON |
//! | [`param`] | Parameter registry and widget props |
//! | [`widget`] | Widget kinds and their value-update rules |
//! | [`input`] | Keys, held-key modes, and drag sessions |
//! | [`style`] | Element state to inline-style bundles |
//! | [`geom`] | 2D points and grad rotation |
//! | [`filename`] | Save-file names from timestamps |
//! | [`error`] | Import and parameter errors |
//! | [`consts`] | Shared constants (new-element ranges, MIME types, etc.) |

pub mod consts;
pub mod element;
pub mod error;
pub mod filename;
pub mod geom;
pub mod input;
pub mod panel;
pub mod param;
pub mod style;
pub mod widget;
