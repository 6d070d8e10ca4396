//! Canonical (punctuation-free) form of a RUT.

use serde::{Deserialize, Serialize};

use super::checksum::expected_check;
use super::format::{format, FormattedRut};

/// Digits-only body plus uppercase check character
///
/// Built only through [`canonicalize`] or deserialization, both of which
/// reject non-digit bodies and check characters outside `0`-`9`/`K`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CanonicalParts")]
pub struct CanonicalRut {
    body: String,
    check: char,
}

/// Unchecked wire form of [`CanonicalRut`]
#[derive(Deserialize)]
struct CanonicalParts {
    body: String,
    check: char,
}

impl TryFrom<CanonicalParts> for CanonicalRut {
    type Error = String;

    fn try_from(parts: CanonicalParts) -> Result<Self, Self::Error> {
        if !parts.body.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("RUT body '{}' must contain only digits", parts.body));
        }
        if !(parts.check.is_ascii_digit() || parts.check == 'K') {
            return Err(format!(
                "RUT check character '{}' must be 0-9 or K",
                parts.check
            ));
        }
        Ok(Self {
            body: parts.body,
            check: parts.check,
        })
    }
}

impl CanonicalRut {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check(&self) -> char {
        self.check
    }

    /// Check character the body should carry
    pub fn expected_check(&self) -> Option<char> {
        expected_check(&self.body)
    }

    pub fn is_consistent(&self) -> bool {
        self.expected_check() == Some(self.check)
    }

    pub fn formatted(&self) -> FormattedRut {
        FormattedRut::from_display(format(&self.body, self.check))
    }

    /// Body and check concatenated, e.g. `76543216`
    pub fn compact(&self) -> String {
        let mut out = self.body.clone();
        out.push(self.check);
        out
    }
}

/// Strip spaces, dots and hyphens and split off the trailing check character.
///
/// Returns `None` when nothing is left after stripping, when the body has a
/// non-digit character, or when the check character is not `0`-`9`/`K`.
/// A single remaining character yields an empty body.
pub fn canonicalize(raw: &str) -> Option<CanonicalRut> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();

    let mut chars = stripped.chars();
    let check = chars.next_back()?.to_ascii_uppercase();
    let body = chars.as_str();

    if !(check.is_ascii_digit() || check == 'K') {
        return None;
    }
    if !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(CanonicalRut {
        body: body.to_string(),
        check,
    })
}
