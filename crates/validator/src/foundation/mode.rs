//! Evaluation modes
//!
//! A chain either reports every violated rule ([`Mode::Aggregate`]) or stops
//! at the first constraint that reports anything ([`Mode::ShortCircuit`]).
//! The mode is always chosen explicitly by the caller, per call or per adapter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a constraint chain is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Run every leaf constraint and collect all messages in declaration order.
    #[default]
    Aggregate,
    /// Stop at the first leaf constraint that reports any message.
    #[serde(alias = "short_circuit", alias = "fail-fast")]
    ShortCircuit,
}

impl Mode {
    /// Returns the canonical kebab-case name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Aggregate => "aggregate",
            Mode::ShortCircuit => "short-circuit",
        }
    }

    /// Returns `true` for [`Mode::ShortCircuit`].
    #[must_use]
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Mode::ShortCircuit)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation mode '{0}', expected 'aggregate' or 'short-circuit'")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" | "all" => Ok(Mode::Aggregate),
            "short-circuit" | "short_circuit" | "fail-fast" | "first" => Ok(Mode::ShortCircuit),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_aggregate() {
        assert_eq!(Mode::default(), Mode::Aggregate);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("aggregate".parse::<Mode>(), Ok(Mode::Aggregate));
        assert_eq!("Short-Circuit".parse::<Mode>(), Ok(Mode::ShortCircuit));
        assert_eq!("short_circuit".parse::<Mode>(), Ok(Mode::ShortCircuit));
        assert_eq!("fail-fast".parse::<Mode>(), Ok(Mode::ShortCircuit));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sometimes".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for mode in [Mode::Aggregate, Mode::ShortCircuit] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Mode::ShortCircuit).unwrap();
        assert_eq!(json, "\"short-circuit\"");
        let mode: Mode = serde_json::from_str("\"short_circuit\"").unwrap();
        assert_eq!(mode, Mode::ShortCircuit);
    }
}
