//! Layered configuration
//!
//! Built-in defaults, then `./tensorguard.toml` (or `--config`), then
//! `RUST_LOG`, then `TENSORGUARD_*` environment variables, then
//! command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tensorguard_log::Format as LogFormat;
use tensorguard_log::config::{LOG_ENV, LOG_FORMAT_ENV, RUST_LOG_ENV};
use tensorguard_validator::Mode;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tensorguard.toml";

const ENV_PREFIX: &str = "TENSORGUARD_";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `valid` / `invalid:` followed by one message per line.
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}

/// `[log]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub mode: Mode,
    pub output: OutputFormat,
    pub log: LogSection,
}

/// Values given on the command line. `None` leaves lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub output: Option<OutputFormat>,
    pub verbose: u8,
}

impl CliConfig {
    /// Resolves the configuration from every layer.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::figment(overrides, |key| std::env::var(key).ok())?
            .extract()
            .context("invalid configuration")
    }

    fn figment(
        overrides: &Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        figment = match &overrides.config {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file {} does not exist", path.display());
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file_exact(DEFAULT_CONFIG_FILE)),
        };

        // TENSORGUARD_LOG is a bare filter string, not a table, so the log
        // variables are mapped by hand.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&["mode", "output"]));
        if let Some(level) = lookup(LOG_ENV).or_else(|| lookup(RUST_LOG_ENV)) {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            figment = figment.merge(Serialized::default("log.format", format.to_lowercase()));
        }

        if let Some(mode) = overrides.mode {
            figment = figment.merge(Serialized::default("mode", mode));
        }
        if let Some(output) = overrides.output {
            figment = figment.merge(Serialized::default("output", output));
        }
        if let Some(level) = verbosity_level(overrides.verbose) {
            figment = figment.merge(Serialized::default("log.level", level));
        }

        Ok(figment)
    }

    /// Logger settings derived from the `[log]` table.
    pub fn log_config(&self) -> tensorguard_log::Config {
        tensorguard_log::Config::from_env()
            .with_level(self.log.level.clone())
            .with_format(self.log.format)
    }
}

fn verbosity_level(count: u8) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
