//! Command implementations
//!
//! Each command returns data; printing is done by `main` so the commands
//! can be exercised directly from tests.

use anyhow::{bail, Context, Result};
use rut_common::{
    expected_check, format_compact, validate, LocationError, LocationField, LocationParts,
    RutConfig, Territory, TerritoryCatalog, ValidationMode,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of validating one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub input: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ValidationReport {
    /// Human-readable single line
    pub fn render(&self) -> String {
        match (&self.formatted, &self.error) {
            (_, Some(err)) => format!("{}: {}", self.input, err.message),
            (Some(rut), None) => format!("{}: {}", self.input, rut),
            (None, None) => format!("{}: (empty)", self.input),
        }
    }
}

/// Validate each input independently
pub fn validate_all(inputs: &[String], mode: ValidationMode) -> Vec<ValidationReport> {
    inputs
        .iter()
        .map(|input| match validate(input, mode) {
            Ok(formatted) => ValidationReport {
                input: input.clone(),
                ok: true,
                formatted: formatted.map(|rut| rut.into_string()),
                error: None,
            },
            Err(err) => ValidationReport {
                input: input.clone(),
                ok: false,
                formatted: None,
                error: Some(ErrorDetails {
                    code: err.message_key().to_string(),
                    message: err.to_string(),
                }),
            },
        })
        .collect()
}

/// Strict flag on the command line wins over the config default
pub fn effective_mode(config: &RutConfig, strict_flag: bool) -> ValidationMode {
    if strict_flag {
        ValidationMode::Strict
    } else {
        config.validation.mode()
    }
}

/// Check character for a body; dots and spaces are ignored
pub fn check_digit(body: &str) -> Result<char> {
    let digits: String = body.chars().filter(|c| !matches!(c, '.' | ' ')).collect();
    if digits.is_empty() {
        bail!("RUT body is empty");
    }
    expected_check(&digits).with_context(|| format!("RUT body '{}' must contain only digits", body))
}

/// Display form of a compact code, e.g. `76543216` -> `7.654.321-6`
pub fn format_code(code: &str) -> Result<String> {
    let compact: String = code
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    format_compact(&compact).context("Nothing to format")
}

/// Resolve and load the territory catalog: CLI path first, then config
pub fn load_catalog(cli_path: Option<&Path>, config: &RutConfig) -> Result<TerritoryCatalog> {
    let path: PathBuf = match cli_path {
        Some(path) => path.to_path_buf(),
        None => match &config.territory.catalog {
            Some(path) => path.clone(),
            None => bail!("No territory catalog configured. Pass --catalog or set territory.catalog"),
        },
    };
    info!(path = %path.display(), "Loading territory catalog");
    TerritoryCatalog::load(&path)
}

/// Render `code  name` lines
pub fn render_choices<'a>(entries: impl IntoIterator<Item = &'a Territory>) -> Vec<String> {
    entries
        .into_iter()
        .map(|t| format!("{:<8}{}", t.code, t.name))
        .collect()
}

/// Clean a location selection, checked against the catalog when one is given
pub fn clean_location(
    catalog: Option<&TerritoryCatalog>,
    parts: &LocationParts,
    required: bool,
) -> Result<Option<String>, LocationError> {
    let field = LocationField::new(required);
    match catalog {
        Some(catalog) => field.clean_with(catalog, parts),
        None => {
            debug!("No catalog available, checking completeness only");
            field.clean(parts)
        }
    }
}
