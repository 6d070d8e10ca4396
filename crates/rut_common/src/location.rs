//! Composite location field (region, province, commune)
//!
//! The stored value is the commune code alone; region and province are
//! derived from its prefixes when the three selectors are re-populated.

use serde::{Deserialize, Serialize};

use crate::error::LocationError;
use crate::territory::{TerritoryCatalog, PROVINCE_CODE_LEN, REGION_CODE_LEN};

/// The three selector values of a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationParts {
    pub region: String,
    pub province: String,
    pub commune: String,
}

impl LocationParts {
    pub fn new(
        region: impl Into<String>,
        province: impl Into<String>,
        commune: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            province: province.into(),
            commune: commune.into(),
        }
    }

    fn components(&self) -> [&str; 3] {
        [self.region.as_str(), self.province.as_str(), self.commune.as_str()]
    }
}

/// Split a stored commune code back into selector values.
///
/// Returns `None` for blank values. Values shorter than a prefix length
/// yield the whole value for that prefix.
pub fn decompress(value: &str) -> Option<LocationParts> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(LocationParts::new(
        prefix(value, REGION_CODE_LEN),
        prefix(value, PROVINCE_CODE_LEN),
        value,
    ))
}

fn prefix(value: &str, len: usize) -> &str {
    match value.char_indices().nth(len) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Cleaner for the three-selector location input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationField {
    pub required: bool,
}

impl LocationField {
    pub fn new(required: bool) -> Self {
        Self { required }
    }

    /// Collapse the selections into the commune code.
    ///
    /// All blank is an absent value (or `Required`); a partial selection is
    /// `Incomplete`.
    pub fn clean(&self, parts: &LocationParts) -> Result<Option<String>, LocationError> {
        let components = parts.components();
        let blank = components.iter().filter(|c| c.trim().is_empty()).count();

        if blank == components.len() {
            return if self.required {
                Err(LocationError::Required)
            } else {
                Ok(None)
            };
        }
        if blank > 0 {
            return Err(LocationError::Incomplete);
        }

        Ok(Some(parts.commune.trim().to_string()))
    }

    /// Like [`clean`](Self::clean), then check the selections against a catalog.
    pub fn clean_with(
        &self,
        catalog: &TerritoryCatalog,
        parts: &LocationParts,
    ) -> Result<Option<String>, LocationError> {
        let Some(commune) = self.clean(parts)? else {
            return Ok(None);
        };
        let region = parts.region.trim();
        let province = parts.province.trim();

        if !catalog.regions.contains(region) {
            return Err(LocationError::Mismatch(format!("Unknown region '{}'.", region)));
        }
        if !catalog.provinces.contains(province) || !province.starts_with(region) {
            return Err(LocationError::Mismatch(format!(
                "Province '{}' is not in region '{}'.",
                province, region
            )));
        }
        if !catalog.communes.contains(&commune) || !commune.starts_with(province) {
            return Err(LocationError::Mismatch(format!(
                "Commune '{}' is not in province '{}'.",
                commune, province
            )));
        }

        Ok(Some(commune))
    }
}
