//! Error types for RUT and location validation.

use thiserror::Error;

use crate::rut::ValidationMode;

/// Failure of a single RUT validation call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RutError {
    /// Input does not have the shape required by the validation mode
    #[error("{}", invalid_format_message(.0))]
    InvalidFormat(ValidationMode),

    /// Check character does not match the computed one
    #[error("The Chilean RUT is not valid.")]
    ChecksumFailed,
}

fn invalid_format_message(mode: &ValidationMode) -> &'static str {
    match mode {
        ValidationMode::Strict => "Enter a valid Chilean RUT. The format is XX.XXX.XXX-X.",
        ValidationMode::Lenient => "Enter a valid Chilean RUT.",
    }
}

impl RutError {
    /// Message key a host framework can use to look up a translated string
    pub fn message_key(&self) -> &'static str {
        match self {
            RutError::InvalidFormat(ValidationMode::Strict) => "strict",
            RutError::InvalidFormat(ValidationMode::Lenient) => "invalid",
            RutError::ChecksumFailed => "checksum",
        }
    }
}

/// Failure of the composite region/province/commune field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("This field is required.")]
    Required,

    #[error("Enter a valid location.")]
    Incomplete,

    /// Selections do not form a chain in the catalog
    #[error("Enter a valid location. {0}")]
    Mismatch(String),
}

impl LocationError {
    pub fn message_key(&self) -> &'static str {
        match self {
            LocationError::Required => "required",
            LocationError::Incomplete => "incomplete",
            LocationError::Mismatch(_) => "mismatch",
        }
    }
}
