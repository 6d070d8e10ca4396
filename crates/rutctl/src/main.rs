//! rutctl - command-line front end for the RUT toolkit

use anyhow::Result;
use clap::Parser;
use rut_common::{LocationParts, RutConfig};
use std::process::ExitCode;

use rutctl::cli::{Cli, Commands};
use rutctl::{commands, logging};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = RutConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { ruts, strict, json } => {
            let mode = commands::effective_mode(&config, strict);
            let reports = commands::validate_all(&ruts, mode);
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report.render());
                }
            }
            Ok(if reports.iter().all(|r| r.ok) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::CheckDigit { body } => {
            println!("{}", commands::check_digit(&body)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Format { code } => {
            println!("{}", commands::format_code(&code)?);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Regions => {
            let catalog = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            print_lines(commands::render_choices(catalog.regions.iter()));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Provinces { region } => {
            let catalog = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            print_lines(commands::render_choices(catalog.provinces_in(&region)));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Communes { province } => {
            let catalog = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            print_lines(commands::render_choices(catalog.communes_in(&province)));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Location {
            region,
            province,
            commune,
            required,
        } => {
            let has_catalog = cli.catalog.is_some() || config.territory.catalog.is_some();
            let catalog = if has_catalog {
                Some(commands::load_catalog(cli.catalog.as_deref(), &config)?)
            } else {
                None
            };
            let parts = LocationParts::new(region, province, commune);
            match commands::clean_location(catalog.as_ref(), &parts, required) {
                Ok(Some(code)) => println!("{}", code),
                Ok(None) => println!("(empty)"),
                Err(err) => {
                    eprintln!("{}", err);
                    return Ok(ExitCode::FAILURE);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
