//! Logger builder implementation

// External dependencies
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

// Internal crates
use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Helper macro to build the fmt layer for a given format.
/// Events always go to stderr so command output on stdout stays parseable.
macro_rules! create_fmt_layer {
    ($style:ident, $ansi:expr) => {
        fmt::layer()
            .$style()
            .with_ansi($ansi)
            .with_target(true)
            .with_writer(std::io::stderr)
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", &self.config.level, e)))?;

        let registry = Registry::default().with(filter);
        let installed = match self.config.format {
            Format::Pretty => registry
                .with(create_fmt_layer!(pretty, self.config.ansi))
                .try_init(),
            Format::Compact => registry
                .with(create_fmt_layer!(compact, self.config.ansi))
                .try_init(),
            Format::Json => registry.with(create_fmt_layer!(json, false)).try_init(),
        };

        installed.map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;
        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected_before_install() {
        let config = Config::test().with_level("tensorguard=loud");
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Filter(ref msg) if msg.starts_with("tensorguard=loud")));
    }

    #[test]
    fn test_second_install_reports_already_initialized() {
        let config = Config::test();
        // The first call may lose to another test in this binary; the second never wins.
        let _ = LoggerBuilder::from_config(config.clone()).build();
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::AlreadyInitialized(_)));
        assert!(tracing::dispatcher::has_been_set());
    }
}
