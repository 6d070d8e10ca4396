//! Validator interface for host form frameworks.

use crate::error::RutError;
use crate::rut::{validate, ValidationMode};

/// A field cleaner: raw submitted text in, cleaned text or error out.
///
/// Empty input cleans to an empty string, following the form convention
/// for optional fields.
pub trait FieldValidator {
    fn clean(&self, raw: &str) -> Result<String, RutError>;
}

/// Chilean RUT field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RutField {
    mode: ValidationMode,
}

impl RutField {
    /// Lenient field: accepts RUTs that validate even if loosely punctuated
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict field: input must look like `XX.XXX.XXX-X`
    pub fn strict() -> Self {
        Self::with_mode(ValidationMode::Strict)
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }
}

impl FieldValidator for RutField {
    fn clean(&self, raw: &str) -> Result<String, RutError> {
        Ok(validate(raw, self.mode)?
            .map(|rut| rut.into_string())
            .unwrap_or_default())
    }
}
