//! Shape check, checksum comparison and formatting in one call.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::canonical::canonicalize;
use super::format::FormattedRut;
use super::ValidationMode;
use crate::error::RutError;

/// `XX.XXX.XXX-X` with the leading group optional
static STRICT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}\.)?\d{3}\.\d{3}-[\dkK]$").unwrap());

static LENIENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]{1,11}-?[\dkK]$").unwrap());

fn pattern(mode: ValidationMode) -> &'static Regex {
    match mode {
        ValidationMode::Strict => &*STRICT_PATTERN,
        ValidationMode::Lenient => &*LENIENT_PATTERN,
    }
}

/// Validate a raw RUT and return its canonical display form.
///
/// Surrounding whitespace is ignored. Blank input returns `Ok(None)`:
/// an optional field left empty is not an error.
pub fn validate(raw: &str, mode: ValidationMode) -> Result<Option<FormattedRut>, RutError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if !pattern(mode).is_match(value) {
        debug!(mode = %mode, "RUT rejected by shape check");
        return Err(RutError::InvalidFormat(mode));
    }

    let rut = canonicalize(value).ok_or(RutError::InvalidFormat(mode))?;
    let expected = rut.expected_check().ok_or(RutError::InvalidFormat(mode))?;
    if expected != rut.check() {
        debug!(body = %rut.body(), expected = %expected, found = %rut.check(), "RUT checksum mismatch");
        return Err(RutError::ChecksumFailed);
    }

    Ok(Some(rut.formatted()))
}

/// True when `raw` is a non-empty RUT that passes validation
pub fn is_valid(raw: &str, mode: ValidationMode) -> bool {
    matches!(validate(raw, mode), Ok(Some(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(raw: &str) -> Result<Option<FormattedRut>, RutError> {
        validate(raw, ValidationMode::Lenient)
    }

    fn strict(raw: &str) -> Result<Option<FormattedRut>, RutError> {
        validate(raw, ValidationMode::Strict)
    }

    #[test]
    fn test_lenient_accepts_any_punctuation() {
        for raw in ["7.654.321-6", "7654321-6", "76543216", "7654.321-6"] {
            let rut = lenient(raw).unwrap().unwrap();
            assert_eq!(rut.as_str(), "7.654.321-6", "input {}", raw);
        }
    }

    #[test]
    fn test_lenient_trims_surrounding_whitespace() {
        assert_eq!(
            lenient("  7.654.321-6\n").unwrap().unwrap().as_str(),
            "7.654.321-6"
        );
    }

    #[test]
    fn test_lenient_rejects_inner_spaces() {
        assert_eq!(
            lenient("7 654 321-6"),
            Err(RutError::InvalidFormat(ValidationMode::Lenient))
        );
    }

    #[test]
    fn test_strict_requires_punctuation() {
        assert_eq!(
            strict("76543216"),
            Err(RutError::InvalidFormat(ValidationMode::Strict))
        );
        assert_eq!(
            strict("7654321-6"),
            Err(RutError::InvalidFormat(ValidationMode::Strict))
        );
        assert_eq!(strict("7.654.321-6").unwrap().unwrap().as_str(), "7.654.321-6");
        assert_eq!(strict("12.345.678-5").unwrap().unwrap().as_str(), "12.345.678-5");
    }

    #[test]
    fn test_strict_accepts_missing_leading_group() {
        // body 123456 -> check 0
        assert_eq!(strict("123.456-0").unwrap().unwrap().as_str(), "123.456-0");
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(lenient("7.654.321-0"), Err(RutError::ChecksumFailed));
        assert_eq!(strict("7.654.321-0"), Err(RutError::ChecksumFailed));
    }

    #[test]
    fn test_k_is_case_insensitive() {
        assert_eq!(lenient("12.345.670-k").unwrap().unwrap().as_str(), "12.345.670-K");
        assert_eq!(lenient("12345670K").unwrap().unwrap().as_str(), "12.345.670-K");
    }

    #[test]
    fn test_empty_passthrough() {
        assert_eq!(lenient(""), Ok(None));
        assert_eq!(strict("   "), Ok(None));
        assert!(!is_valid("", ValidationMode::Lenient));
    }

    #[test]
    fn test_letters_rejected_as_format() {
        assert_eq!(
            lenient("7a54321-6"),
            Err(RutError::InvalidFormat(ValidationMode::Lenient))
        );
        assert_eq!(
            lenient("7654321-x"),
            Err(RutError::InvalidFormat(ValidationMode::Lenient))
        );
    }

    #[test]
    fn test_lenient_length_limit() {
        // 12 body characters exceed the lenient shape
        assert_eq!(
            lenient("123456789012-5"),
            Err(RutError::InvalidFormat(ValidationMode::Lenient))
        );
        assert_eq!(
            lenient("1234567890-3").unwrap().unwrap().as_str(),
            "1.234.567.890-3"
        );
    }

    #[test]
    fn test_degenerate_empty_body_reaches_checksum() {
        assert_eq!(lenient(".5"), Err(RutError::ChecksumFailed));
    }
}
