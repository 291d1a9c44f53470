// ABOUTME: Ruffier CLI - command-line front end for the Ruffier fitness screening test
// ABOUTME: Evaluates pulse readings for an age and prints the age-column reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate three 15-second pulse counts for a 10-year-old
//! ruffier-cli evaluate --p1 20 --p2 30 --p3 25 --age 10
//!
//! # Same, as pretty JSON
//! ruffier-cli evaluate --p1 20 --p2 30 --p3 25 --age 10 --format json --pretty
//!
//! # Print the reference bands for every age column
//! ruffier-cli table
//!
//! # Print the reference bands for one age
//! ruffier-cli table --age 13
//! ```

mod commands;

use clap::{Parser, Subcommand};
use ruffier::{
    config::CliConfig, errors::AppResult, formatters::OutputFormat, logging::LoggingConfig,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ruffier-cli",
    about = "Ruffier index fitness screening",
    long_about = "Computes the Ruffier index from three 15-second pulse counts and rates it against the age-dependent reference table."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text, json, toon); overrides RUFFIER_OUTPUT_FORMAT
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Pretty-print JSON output; overrides RUFFIER_PRETTY
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate a Ruffier test
    Evaluate {
        /// Resting pulse, counted over 15 seconds
        #[arg(long, allow_negative_numbers = true)]
        p1: f64,

        /// Pulse right after 30 squats, counted over 15 seconds
        #[arg(long, allow_negative_numbers = true)]
        p2: f64,

        /// Pulse after one minute of rest, counted over 15 seconds
        #[arg(long, allow_negative_numbers = true)]
        p3: f64,

        /// Age in years; anything below 7 reports that the table has no data
        #[arg(long, allow_negative_numbers = true)]
        age: i64,
    },

    /// Print the reference index bands
    Table {
        /// Only print the column covering this age
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env(default_level).init() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let status = u8::try_from(e.code.exit_code()).unwrap_or(1);
            ExitCode::from(status)
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = CliConfig::from_env()?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if cli.pretty {
        config.pretty = true;
    }

    match cli.command {
        Command::Evaluate { p1, p2, p3, age } => commands::evaluate::run(p1, p2, p3, age, &config),
        Command::Table { age } => commands::table::run(age, &config),
    }
}
