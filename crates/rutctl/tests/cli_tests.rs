//! CLI-level tests: argument parsing plus the command functions main dispatches to

use clap::Parser;
use rut_common::{LocationError, LocationParts, RutConfig, ValidationMode};
use rutctl::commands::{
    check_digit, clean_location, effective_mode, format_code, load_catalog, render_choices,
    validate_all,
};
use rutctl::{Cli, Commands};
use std::fs;

const CATALOG: &str = r#"
regions = [
    { code = "13", name = "Metropolitana de Santiago" },
]
provinces = [
    { code = "131", name = "Santiago" },
    { code = "132", name = "Cordillera" },
]
communes = [
    { code = "13101", name = "Santiago" },
    { code = "13201", name = "Puente Alto" },
]
"#;

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_parse_validate_with_flags() {
    let cli = Cli::try_parse_from(["rutctl", "validate", "7.654.321-6", "76543216", "--strict"])
        .unwrap();
    match cli.command {
        Commands::Validate { ruts, strict, json } => {
            assert_eq!(ruts, vec!["7.654.321-6", "76543216"]);
            assert!(strict);
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_validate_requires_input() {
    assert!(Cli::try_parse_from(["rutctl", "validate"]).is_err());
}

#[test]
fn test_parse_global_catalog_after_subcommand() {
    let cli = Cli::try_parse_from(["rutctl", "regions", "--catalog", "/tmp/t.toml"]).unwrap();
    assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("/tmp/t.toml")));
    assert!(matches!(cli.command, Commands::Regions));
}

#[test]
fn test_parse_check_digit() {
    let cli = Cli::try_parse_from(["rutctl", "check-digit", "7654321"]).unwrap();
    assert!(matches!(cli.command, Commands::CheckDigit { ref body } if body == "7654321"));
}

// ============================================================================
// Validate command
// ============================================================================

#[test]
fn test_validate_all_mixed_results() {
    let inputs = vec![
        "7.654.321-6".to_string(),
        "76543216".to_string(),
        "7.654.321-0".to_string(),
        "".to_string(),
    ];

    let lenient = validate_all(&inputs, ValidationMode::Lenient);
    assert!(lenient[0].ok);
    assert_eq!(lenient[1].formatted.as_deref(), Some("7.654.321-6"));
    assert!(!lenient[2].ok);
    assert_eq!(lenient[2].error.as_ref().unwrap().code, "checksum");
    assert!(lenient[3].ok);
    assert!(lenient[3].formatted.is_none());

    let strict = validate_all(&inputs, ValidationMode::Strict);
    assert!(strict[0].ok);
    assert_eq!(strict[1].error.as_ref().unwrap().code, "strict");
}

#[test]
fn test_validate_report_json_shape() {
    let reports = validate_all(&["12345670k".to_string()], ValidationMode::Lenient);
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["formatted"], "12.345.670-K");
    assert_eq!(json[0]["ok"], true);
    assert!(json[0].get("error").is_none());
}

#[test]
fn test_strict_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[validation]\nstrict = true\n").unwrap();

    let config = RutConfig::load(Some(&path)).unwrap();
    assert_eq!(effective_mode(&config, false), ValidationMode::Strict);
}

// ============================================================================
// Check digit / format commands
// ============================================================================

#[test]
fn test_check_digit_command() {
    assert_eq!(check_digit("7654321").unwrap(), '6');
    assert_eq!(check_digit("12.345.670").unwrap(), 'K');
    assert_eq!(check_digit("14").unwrap(), '0');
}

#[test]
fn test_format_command() {
    assert_eq!(format_code("76543216").unwrap(), "7.654.321-6");
    assert_eq!(format_code("7.654.321-6").unwrap(), "7.654.321-6");
}

// ============================================================================
// Territory commands
// ============================================================================

#[test]
fn test_catalog_from_cli_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("territory.toml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = load_catalog(Some(&path), &RutConfig::default()).unwrap();
    let lines = render_choices(catalog.provinces_in("13"));
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("131"));
    assert!(lines[1].ends_with("Cordillera"));
}

#[test]
fn test_catalog_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("territory.toml");
    fs::write(&path, CATALOG).unwrap();

    let mut config = RutConfig::default();
    config.territory.catalog = Some(path);
    let catalog = load_catalog(None, &config).unwrap();
    assert_eq!(catalog.communes_in("132").len(), 1);
}

#[test]
fn test_catalog_missing_configuration() {
    let err = load_catalog(None, &RutConfig::default()).unwrap_err();
    assert!(err.to_string().contains("--catalog"));
}

#[test]
fn test_location_command() {
    let catalog = rut_common::TerritoryCatalog::from_toml_str(CATALOG).unwrap();

    let parts = LocationParts::new("13", "132", "13201");
    assert_eq!(
        clean_location(Some(&catalog), &parts, false),
        Ok(Some("13201".to_string()))
    );

    let partial = LocationParts::new("13", "", "");
    assert_eq!(
        clean_location(None, &partial, false),
        Err(LocationError::Incomplete)
    );
}
