//! rutctl library
//!
//! Exposes the CLI definition and command implementations for testing.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands};
