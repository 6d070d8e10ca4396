//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chilean RUT toolkit
#[derive(Parser, Debug)]
#[command(name = "rutctl")]
#[command(about = "Validate and format Chilean RUTs, browse territory tables", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides $RUT_CONFIG and default locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Territory catalog file (overrides territory.catalog from config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more RUTs and print their canonical form
    Validate {
        /// RUTs to validate, e.g. 7.654.321-6
        #[arg(required = true)]
        ruts: Vec<String>,

        /// Require the XX.XXX.XXX-X format
        #[arg(long)]
        strict: bool,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Compute the check character for a RUT body
    CheckDigit {
        /// Digits of the body; dots and spaces are ignored
        body: String,
    },

    /// Format a compact RUT (body followed by check character) without validating
    Format {
        code: String,
    },

    /// List regions
    Regions,

    /// List provinces of a region
    Provinces {
        region: String,
    },

    /// List communes of a province
    Communes {
        province: String,
    },

    /// Clean a region/province/commune selection into a location code
    Location {
        region: String,
        province: String,
        commune: String,

        /// Treat an all-blank selection as an error
        #[arg(long)]
        required: bool,
    },
}
