//! Toolkit configuration
//!
//! Config file: $RUT_CONFIG, ~/.config/rut/config.toml or /etc/rut/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::rut::ValidationMode;
use crate::{CONFIG_ENV, SYSTEM_CONFIG_PATH};

/// Validation defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Require the `XX.XXX.XXX-X` shape
    #[serde(default)]
    pub strict: bool,
}

impl ValidationConfig {
    pub fn mode(&self) -> ValidationMode {
        ValidationMode::from_strict(self.strict)
    }
}

/// Where the region/province/commune tables live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub territory: TerritoryConfig,
}

/// Inputs to config file discovery, normally read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// `--config` on the command line
    pub explicit: Option<PathBuf>,
    /// $RUT_CONFIG
    pub env_config: Option<PathBuf>,
    /// $XDG_CONFIG_HOME
    pub xdg_config_home: Option<PathBuf>,
    /// $HOME
    pub home: Option<PathBuf>,
    pub system: PathBuf,
}

impl ConfigSources {
    pub fn from_env(explicit: Option<&Path>) -> Self {
        let var = |name: &str| std::env::var_os(name).map(PathBuf::from);
        Self {
            explicit: explicit.map(Path::to_path_buf),
            env_config: var(CONFIG_ENV),
            xdg_config_home: var("XDG_CONFIG_HOME"),
            home: var("HOME"),
            system: PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }

    /// ~/.config/rut/config.toml, honouring $XDG_CONFIG_HOME
    pub fn user_path(&self) -> Option<PathBuf> {
        if let Some(xdg) = &self.xdg_config_home {
            return Some(xdg.join("rut").join("config.toml"));
        }
        self.home
            .as_ref()
            .map(|home| home.join(".config").join("rut").join("config.toml"))
    }

    /// Pick the config file to read
    ///
    /// Priority:
    /// 1. explicit path (must exist)
    /// 2. $RUT_CONFIG (must exist)
    /// 3. User config, if present
    /// 4. System config, if present
    ///
    /// `None` means defaults.
    pub fn resolve(&self) -> Option<PathBuf> {
        if let Some(path) = self.explicit.as_ref().or(self.env_config.as_ref()) {
            return Some(path.clone());
        }
        if let Some(user_path) = self.user_path() {
            if user_path.exists() {
                return Some(user_path);
            }
        }
        if self.system.exists() {
            return Some(self.system.clone());
        }
        None
    }
}

impl RutConfig {
    /// Get default user config path: ~/.config/rut/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        ConfigSources::from_env(None)
            .user_path()
            .context("Cannot determine home directory")
    }

    pub fn system_config_path() -> PathBuf {
        PathBuf::from(SYSTEM_CONFIG_PATH)
    }

    /// Load configuration from the file chosen by [`ConfigSources::resolve`]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(&ConfigSources::from_env(explicit))
    }

    pub fn load_with(sources: &ConfigSources) -> Result<Self> {
        match sources.resolve() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Set validation mode from a user string (`strict`, `lenient`, ...)
    pub fn set_mode(&mut self, mode: &str) -> Result<()> {
        let mode: ValidationMode = mode.parse().map_err(anyhow::Error::msg)?;
        self.validation.strict = mode.is_strict();
        Ok(())
    }
}
