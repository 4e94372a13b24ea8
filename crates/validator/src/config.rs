//! Engine configuration
//!
//! Only the evaluation mode is configurable; everything else about a
//! constraint is fixed when it is built.

use serde::{Deserialize, Serialize};

use crate::foundation::Mode;

/// Environment variable consulted by [`ValidatorConfig::from_env`].
pub const MODE_ENV: &str = "TENSORGUARD_MODE";

/// Configuration for adapters built with [`Adapter::from_config`](crate::adapter::Adapter::from_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Evaluation mode adapters use.
    pub mode: Mode,
}

impl ValidatorConfig {
    /// Creates a configuration with the given mode.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Fail-fast configuration for hot paths.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self::new(Mode::ShortCircuit)
    }

    /// Reads the configuration from the environment.
    ///
    /// An unset or unparsable `TENSORGUARD_MODE` keeps the default mode; the
    /// latter is logged.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(MODE_ENV) {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(error) => {
                    tracing::warn!(%error, "ignoring {MODE_ENV}");
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(ValidatorConfig::default().mode, Mode::Aggregate);
        assert_eq!(ValidatorConfig::fail_fast().mode, Mode::ShortCircuit);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());

        let config: ValidatorConfig = serde_json::from_str(r#"{"mode":"short-circuit"}"#).unwrap();
        assert_eq!(config.mode, Mode::ShortCircuit);
    }
}
