//! Error types for element editing and collection import.

use thiserror::Error;

/// Failure to turn clipboard or file text into a collection of elements.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not valid JSON, or an entry is not a valid element.
    #[error("malformed collection json: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is valid JSON but its top level is not an array.
    #[error("expected a json array of elements, got {0}")]
    NotAnArray(&'static str),
}

/// A parameter edit that cannot be applied to an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The value variant does not match the parameter's type.
    #[error("parameter `{name}` expects a {expected} value")]
    TypeMismatch { name: &'static str, expected: &'static str },

    /// A choice parameter was given a value outside its option list.
    #[error("`{value}` is not a valid option for `{name}`")]
    UnknownOption { name: &'static str, value: String },
}
