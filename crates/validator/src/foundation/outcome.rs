//! Validation outcomes
//!
//! [`Outcome`] is the result of one validation call: the value back, or the
//! ordered list of violation messages. There are no partial states, and an
//! `Invalid` outcome never carries an empty list.

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

// ============================================================================
// VIOLATIONS
// ============================================================================

/// Ordered, non-empty list of human-readable violation messages.
///
/// The first two messages are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violations {
    messages: SmallVec<[String; 2]>,
}

impl Violations {
    /// Builds a violation list, or `None` if `messages` is empty.
    pub fn new<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: SmallVec<[String; 2]> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Returns the messages in report order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the first message.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.messages[0]
    }

    /// Returns the number of messages (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    /// Consumes the list and returns the messages.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.messages.into_vec()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "validation outcome must be checked"]
pub enum Outcome<V> {
    /// Every constraint passed; the value is handed back unchanged.
    Valid(V),
    /// At least one constraint reported a violation.
    Invalid(Violations),
}

impl<V> Outcome<V> {
    /// Builds an outcome from collected findings.
    pub(crate) fn from_findings(value: V, findings: Vec<String>) -> Self {
        match Violations::new(findings) {
            Some(violations) => Outcome::Invalid(violations),
            None => Outcome::Valid(value),
        }
    }

    /// Returns `true` for `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the violations of an `Invalid` outcome.
    #[must_use]
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Outcome::Valid(_) => None,
            Outcome::Invalid(v) => Some(v),
        }
    }

    /// Returns the messages; empty for `Valid`.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Outcome::Valid(_) => &[],
            Outcome::Invalid(v) => v.messages(),
        }
    }

    /// Returns the value of a `Valid` outcome.
    #[must_use]
    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Valid(value) => Some(value),
            Outcome::Invalid(_) => None,
        }
    }

    /// Converts into a `Result`, with the violations as the error.
    pub fn into_result(self) -> Result<V, Violations> {
        match self {
            Outcome::Valid(value) => Ok(value),
            Outcome::Invalid(v) => Err(v),
        }
    }

    /// Maps the value of a `Valid` outcome.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Outcome::Valid(value) => Outcome::Valid(f(value)),
            Outcome::Invalid(v) => Outcome::Invalid(v),
        }
    }
}

impl<V> Serialize for Outcome<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "status", rename_all = "lowercase")]
        enum Repr<'a> {
            Valid,
            Invalid { errors: &'a [String] },
        }

        let repr = match self {
            Outcome::Valid(_) => Repr::Valid,
            Outcome::Invalid(v) => Repr::Invalid {
                errors: v.messages(),
            },
        };
        repr.serialize(serializer)
    }
}
