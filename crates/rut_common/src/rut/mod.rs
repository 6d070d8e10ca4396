//! Chilean RUT (Rol Unico Tributario) handling.
//!
//! A RUT is a digit body followed by a check character (`0`-`9` or `K`),
//! usually written as `12.345.678-5`. Validation runs in three steps:
//! strip punctuation, recompute the check character, and re-format the
//! body with dot separators.

mod canonical;
mod checksum;
mod format;
mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use canonical::{canonicalize, CanonicalRut};
pub use checksum::expected_check;
pub use format::{format, format_compact, FormattedRut};
pub use validate::{is_valid, validate};

/// How strictly the raw input shape is checked before the checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Only `XX.XXX.XXX-X` (leading group optional) is accepted
    Strict,
    /// Digits with optional dots, optional hyphen, check character
    #[default]
    Lenient,
}

impl ValidationMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "true" | "on" | "yes" => Ok(Self::Strict),
            "lenient" | "false" | "off" | "no" => Ok(Self::Lenient),
            _ => Err(format!(
                "Invalid validation mode: '{}'. Valid values: strict, lenient",
                s
            )),
        }
    }
}
