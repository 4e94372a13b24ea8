//! Configuration presets for common scenarios

use super::{Config, Format, LOG_ENV, LOG_FORMAT_ENV, RUST_LOG_ENV};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // TENSORGUARD_LOG wins over RUST_LOG
        if let Some(level) = lookup(LOG_ENV).or_else(|| lookup(RUST_LOG_ENV)) {
            config.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        if lookup("NO_COLOR").is_some() {
            config.ansi = false;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            ansi: true,
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            ansi: false,
        }
    }

    /// Test configuration (captures output)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            ansi: false,
        }
    }
}
