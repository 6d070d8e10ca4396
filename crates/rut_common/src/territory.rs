//! Region / province / commune choice tables
//!
//! The tables are data supplied by the host (typically a TOML file), not
//! bundled. Codes nest by prefix: a province code starts with its region
//! code and a commune code starts with its province code, which is what
//! lets dependent selectors filter their options.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Length of a region code
pub const REGION_CODE_LEN: usize = 2;

/// Length of a province code
pub const PROVINCE_CODE_LEN: usize = 3;

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub code: String,
    pub name: String,
}

impl Territory {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Ordered list of choices for one selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceTable {
    entries: Vec<Territory>,
}

impl ChoiceTable {
    pub fn new(entries: Vec<Territory>) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: &str) -> Option<&Territory> {
        self.entries.iter().find(|t| t.code == code)
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.get(code).map(|t| t.name.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// `(code, name)` pairs in table order
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|t| (t.code.as_str(), t.name.as_str()))
    }

    /// Entries whose code starts with `prefix`
    pub fn children_of<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Territory> {
        self.entries.iter().filter(move |t| t.code.starts_with(prefix))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Territory> for ChoiceTable {
    fn from_iter<I: IntoIterator<Item = Territory>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The three linked tables behind a location selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryCatalog {
    #[serde(default)]
    pub regions: ChoiceTable,
    #[serde(default)]
    pub provinces: ChoiceTable,
    #[serde(default)]
    pub communes: ChoiceTable,
}

impl TerritoryCatalog {
    /// Parse and check a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog: TerritoryCatalog =
            toml::from_str(contents).context("Failed to parse territory catalog")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let catalog = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid territory catalog {}", path.display()))?;
        debug!(
            path = %path.display(),
            regions = catalog.regions.len(),
            provinces = catalog.provinces.len(),
            communes = catalog.communes.len(),
            "Loaded territory catalog"
        );
        Ok(catalog)
    }

    pub fn provinces_in(&self, region_code: &str) -> Vec<&Territory> {
        self.provinces
            .iter()
            .filter(|p| p.code.starts_with(region_code))
            .collect()
    }

    pub fn communes_in(&self, province_code: &str) -> Vec<&Territory> {
        self.communes
            .iter()
            .filter(|c| c.code.starts_with(province_code))
            .collect()
    }

    /// Check code uniqueness and prefix nesting across the three tables
    pub fn validate(&self) -> Result<()> {
        check_unique("region", &self.regions)?;
        check_unique("province", &self.provinces)?;
        check_unique("commune", &self.communes)?;

        for province in self.provinces.iter() {
            if !self.regions.iter().any(|r| province.code.starts_with(&r.code)) {
                bail!(
                    "Province '{}' ({}) does not belong to any region",
                    province.code,
                    province.name
                );
            }
        }
        for commune in self.communes.iter() {
            if !self.provinces.iter().any(|p| commune.code.starts_with(&p.code)) {
                bail!(
                    "Commune '{}' ({}) does not belong to any province",
                    commune.code,
                    commune.name
                );
            }
        }

        if self.regions.is_empty() {
            warn!("Territory catalog has no regions");
        }
        Ok(())
    }
}

fn check_unique(kind: &str, table: &ChoiceTable) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in table.iter() {
        if !seen.insert(entry.code.as_str()) {
            bail!("Duplicate {} code '{}'", kind, entry.code);
        }
    }
    Ok(())
}
