//! # tensorguard-log
//!
//! Subscriber setup for tensorguard binaries. Libraries in the workspace
//! only emit `tracing` events; this crate decides where they go.
//!
//! ```rust,ignore
//! use tensorguard_log::{Config, init};
//!
//! init(&Config::from_env())?;
//! tracing::info!("ready");
//! ```

pub mod builder;
pub mod config;
pub mod core;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use crate::core::{LogError, LogResult};

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LogError::Filter`] for an unparsable level directive and
/// [`LogError::AlreadyInitialized`] if a global subscriber is already set.
pub fn init(config: &Config) -> LogResult<()> {
    LoggerBuilder::from_config(config.clone()).build()
}

/// Installs the subscriber from `TENSORGUARD_LOG` / `TENSORGUARD_LOG_FORMAT`.
///
/// # Errors
///
/// See [`init`].
pub fn auto_init() -> LogResult<()> {
    init(&Config::from_env())
}
