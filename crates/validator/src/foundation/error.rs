//! Error types
//!
//! Two channels are kept apart:
//!
//! - a value that breaks a rule is an ordinary return value
//!   ([`Outcome::Invalid`](crate::foundation::Outcome::Invalid));
//! - a rule that itself misbehaves is a [`ConstraintImplementationError`]
//!   and always propagates, whatever the evaluation mode.
//!
//! [`BuildError`] covers contract violations at construction time.

use std::borrow::Cow;

/// Boxed error returned by a fallible error-finder.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// IMPLEMENTATION FAILURE
// ============================================================================

/// A constraint's error-finder failed instead of reporting findings.
///
/// This signals a defect in the constraint, not in the validated value.
/// It is never folded into an `Invalid` message list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintImplementationError {
    /// The error-finder returned an error.
    #[error("constraint '{constraint}' failed to evaluate: {source}")]
    Failed {
        /// Name of the offending constraint.
        constraint: Cow<'static, str>,
        /// The error the finder returned.
        #[source]
        source: BoxError,
    },

    /// The error-finder panicked.
    #[error("constraint '{constraint}' panicked: {message}")]
    Panicked {
        /// Name of the offending constraint.
        constraint: Cow<'static, str>,
        /// Panic payload, when it was a string.
        message: String,
    },
}

impl ConstraintImplementationError {
    /// Creates a `Failed` error.
    pub fn failed(constraint: impl Into<Cow<'static, str>>, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            constraint: constraint.into(),
            source: source.into(),
        }
    }

    /// Creates a `Panicked` error.
    pub fn panicked(constraint: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Panicked {
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the constraint that misbehaved.
    #[must_use]
    pub fn constraint_name(&self) -> &str {
        match self {
            Self::Failed { constraint, .. } | Self::Panicked { constraint, .. } => constraint,
        }
    }

    /// Returns `true` if the finder panicked rather than returning an error.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

// ============================================================================
// CONSTRUCTION FAILURE
// ============================================================================

/// A checker or chain could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Constraint names must not be blank.
    #[error("constraint name must not be empty")]
    EmptyName,

    /// A chain needs at least one member.
    #[error("chain '{name}' must contain at least one constraint")]
    EmptyChain {
        /// Name requested for the chain (may be empty).
        name: String,
    },
}

/// Checks a constraint name and normalises it.
pub(crate) fn checked_name(name: impl Into<Cow<'static, str>>) -> Result<Cow<'static, str>, BuildError> {
    let name = name.into();
    if name.trim().is_empty() {
        Err(BuildError::EmptyName)
    } else {
        Ok(name)
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_failed_keeps_source() {
        let err = ConstraintImplementationError::failed("shape", "index out of bounds");
        assert_eq!(err.constraint_name(), "shape");
        assert!(!err.is_panic());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("index out of bounds"));
    }

    #[test]
    fn test_panicked_display() {
        let err = ConstraintImplementationError::panicked("positive", "boom");
        assert!(err.is_panic());
        assert_eq!(err.to_string(), "constraint 'positive' panicked: boom");
    }

    #[test]
    fn test_checked_name() {
        assert_eq!(checked_name("ok").unwrap(), "ok");
        assert_eq!(checked_name("   "), Err(BuildError::EmptyName));
        assert_eq!(checked_name(String::new()), Err(BuildError::EmptyName));
    }

    #[test]
    fn test_panic_message_payloads() {
        let s: Box<dyn std::any::Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let s: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(s.as_ref()), "owned");
        let s: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(s.as_ref()), "non-string panic payload");
    }
}
