//! Typed adapters - build once, validate many
//!
//! An [`Adapter`] fixes a constraint and a mode so callers only supply the
//! value. It is immutable and cheap to clone; share it across threads freely.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let image = make_adapter(tensor_shape([3, 224, 224]), Mode::Aggregate);
//! for tensor in batch {
//!     image.check(&tensor)?.into_result()?;
//! }
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::engine;
use crate::foundation::{Constraint, ConstraintImplementationError, Mode, Outcome, SharedConstraint};

/// A constraint bound to an evaluation mode.
pub struct Adapter<T: ?Sized> {
    constraint: SharedConstraint<T>,
    mode: Mode,
}

impl<T: ?Sized> Adapter<T> {
    /// Creates an adapter from an already shared constraint.
    #[must_use]
    pub fn from_shared(constraint: SharedConstraint<T>, mode: Mode) -> Self {
        Self { constraint, mode }
    }

    /// Creates an adapter whose mode comes from configuration.
    pub fn from_config<C>(constraint: C, config: &ValidatorConfig) -> Self
    where
        C: Constraint<T> + 'static,
    {
        Self::from_shared(Arc::new(constraint), config.mode)
    }

    /// Validates a value with the fixed constraint and mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintImplementationError`] if the constraint itself
    /// fails to evaluate.
    pub fn check<V>(&self, value: V) -> Result<Outcome<V>, ConstraintImplementationError>
    where
        V: Borrow<T>,
    {
        engine::validate(value, self.constraint.as_ref(), self.mode)
    }

    /// Returns the evaluation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the constraint's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.constraint.name()
    }

    /// Returns the underlying constraint.
    #[must_use]
    pub fn constraint(&self) -> &SharedConstraint<T> {
        &self.constraint
    }

    /// Returns a new adapter over the same constraint with another mode.
    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            constraint: Arc::clone(&self.constraint),
            mode,
        }
    }
}

impl<T: ?Sized> Clone for Adapter<T> {
    fn clone(&self) -> Self {
        self.with_mode(self.mode)
    }
}

impl<T: ?Sized> fmt::Debug for Adapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("constraint", &self.constraint.name())
            .field("mode", &self.mode)
            .finish()
    }
}

/// Binds a constraint and a mode into an [`Adapter`].
pub fn make_adapter<T, C>(constraint: C, mode: Mode) -> Adapter<T>
where
    T: ?Sized,
    C: Constraint<T> + 'static,
{
    Adapter::from_shared(Arc::new(constraint), mode)
}
