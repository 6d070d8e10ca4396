//! RUT Common - Chilean identification number validation and location helpers
//!
//! The `rut` module holds the check-digit algorithm and the canonical
//! formatting rules. `territory` and `location` back the dependent
//! region/province/commune selectors used next to a RUT field in forms.

pub mod config;
pub mod error;
pub mod field;
pub mod location;
pub mod rut;
pub mod territory;

pub use config::{ConfigSources, RutConfig, TerritoryConfig, ValidationConfig};
pub use error::{LocationError, RutError};
pub use field::{FieldValidator, RutField};
pub use location::{decompress, LocationField, LocationParts};
pub use rut::{
    canonicalize, expected_check, format, format_compact, is_valid, validate, CanonicalRut,
    FormattedRut, ValidationMode,
};
pub use territory::{ChoiceTable, Territory, TerritoryCatalog};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RUT_CONFIG";

/// System-wide config file path
pub const SYSTEM_CONFIG_PATH: &str = "/etc/rut/config.toml";
