//! tensorguard command-line tool
//!
//! Validates integers, strings, pairs, and tensor shapes with the built-in
//! checkers. Exit status is 0 when every value is valid, 1 when any is
//! invalid, and 2 on usage, configuration, or constraint failures.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tensorguard_validator::Mode;

use crate::config::{CliConfig, OutputFormat, Overrides};

/// Constraint validation from the command line
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "tensorguard")]
struct Cli {
    /// Config file (defaults to ./tensorguard.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Evaluation mode: aggregate or short-circuit
    #[arg(long, global = true, value_name = "MODE")]
    mode: Option<Mode>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that an integer is positive
    #[command(allow_negative_numbers = true)]
    Int {
        value: i64,

        /// Also require the value to exceed this bound
        #[arg(long, value_name = "N")]
        greater_than: Option<i64>,
    },

    /// Check that a string has an even number of characters
    String { value: String },

    /// Check a positive integer and an even-length string together
    #[command(allow_negative_numbers = true)]
    Pair { int: i64, string: String },

    /// Check the shape of a zero tensor built with the given dimensions
    Shape {
        /// Expected shape, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        expect: Vec<usize>,

        /// Shape of the tensor to build, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        actual: Vec<usize>,

        /// Also require this many axes, checked first
        #[arg(long, value_name = "N")]
        dims: Option<usize>,
    },

    /// Run the reference scenarios and print every outcome
    Demo,
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Int { .. } => "int",
            Self::String { .. } => "string",
            Self::Pair { .. } => "pair",
            Self::Shape { .. } => "shape",
            Self::Demo => "demo",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let overrides = Overrides {
        config: cli.config,
        mode: cli.mode,
        output: cli.output,
        verbose: cli.verbose,
    };
    let config = CliConfig::load(&overrides)?;
    tensorguard_log::init(&config.log_config()).context("failed to initialize logging")?;

    let mode = config.mode;
    // Invalid demo scenarios do not fail the run.
    let strict = !matches!(cli.command, Command::Demo);
    tracing::info!(command = cli.command.name(), %mode, "running");

    let reports = match cli.command {
        Command::Int {
            value,
            greater_than,
        } => vec![commands::check_int(value, greater_than, mode)?],
        Command::String { value } => vec![commands::check_string(&value, mode)?],
        Command::Pair { int, string } => vec![commands::check_pair(int, string, mode)?],
        Command::Shape {
            expect,
            actual,
            dims,
        } => vec![commands::check_shape(&expect, &actual, dims, mode)?],
        Command::Demo => commands::demo(mode)?,
    };

    println!("{}", commands::render(&reports, config.output)?);

    let failed = strict && reports.iter().any(|report| report.outcome.is_invalid());
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
