//! Core traits for the validation system
//!
//! [`Constraint`] is the one capability every rule implements: leaf
//! checkers, chains and combinators alike. Because a chain is itself a
//! `Constraint`, chains nest freely.

use std::sync::Arc;

use crate::chain::{Chain, compose};
use crate::foundation::{BuildError, ConstraintImplementationError, Mode};

// ============================================================================
// CORE CONSTRAINT TRAIT
// ============================================================================

/// A named rule that a value either satisfies or violates.
///
/// Implementations must be pure: the same input always yields the same
/// findings, and the input is never mutated. Constraints are immutable once
/// built and are shared freely across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use tensorguard_validator::foundation::{Constraint, ConstraintImplementationError, Mode};
///
/// struct Positive;
///
/// impl Constraint<i64> for Positive {
///     fn name(&self) -> &str {
///         "positive"
///     }
///
///     fn evaluate(
///         &self,
///         value: &i64,
///         _mode: Mode,
///         sink: &mut Vec<String>,
///     ) -> Result<(), ConstraintImplementationError> {
///         if *value <= 0 {
///             sink.push("value must be > 0".to_owned());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Constraint<T: ?Sized>: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Appends this constraint's findings for `value` to `sink`.
    ///
    /// Leaves ignore `mode`. Composites evaluate their members in declaration
    /// order and, in [`Mode::ShortCircuit`], stop as soon as `sink` holds a
    /// finding. An empty `sink` on entry is therefore the only state a
    /// short-circuiting composite ever starts a member from.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintImplementationError`] when an error-finder fails
    /// rather than reporting; callers must propagate it unchanged.
    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError>;

    /// Number of leaf constraints reachable from this one.
    fn leaf_count(&self) -> usize {
        1
    }
}

/// A constraint behind an `Arc`, as stored in chains and adapters.
pub type SharedConstraint<T> = Arc<dyn Constraint<T>>;

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        (**self).evaluate(value, mode, sink)
    }

    fn leaf_count(&self) -> usize {
        (**self).leaf_count()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        (**self).evaluate(value, mode, sink)
    }

    fn leaf_count(&self) -> usize {
        (**self).leaf_count()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        (**self).evaluate(value, mode, sink)
    }

    fn leaf_count(&self) -> usize {
        (**self).leaf_count()
    }
}

// ============================================================================
// CONSTRAINT EXTENSION TRAIT
// ============================================================================

/// Fluent composition helpers, implemented for every sized constraint.
///
/// # Examples
///
/// ```rust,ignore
/// use tensorguard_validator::prelude::*;
///
/// let rule = greater_than(0).and(in_range(0, 10))?;
/// assert!(validate(5, &rule, Mode::Aggregate)?.is_valid());
/// ```
pub trait ConstraintExt<T: ?Sized + 'static>: Constraint<T> + Sized + 'static {
    /// Wraps the constraint in an `Arc` for storage in chains and adapters.
    fn shared(self) -> SharedConstraint<T> {
        Arc::new(self)
    }

    /// Composes `self` and `other` into a two-member chain.
    ///
    /// # Errors
    ///
    /// Never fails for two members; the `Result` mirrors [`compose`].
    fn and<C>(self, other: C) -> Result<Chain<T>, BuildError>
    where
        C: Constraint<T> + 'static,
    {
        compose(vec![self.shared(), other.shared()])
    }
}

impl<T: ?Sized + 'static, C: Constraint<T> + 'static> ConstraintExt<T> for C {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Constraint<str> for AlwaysValid {
        fn name(&self) -> &str {
            "always_valid"
        }

        fn evaluate(
            &self,
            _value: &str,
            _mode: Mode,
            _sink: &mut Vec<String>,
        ) -> Result<(), ConstraintImplementationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Constraint<str> for AlwaysFails {
        fn name(&self) -> &str {
            "always_fails"
        }

        fn evaluate(
            &self,
            _value: &str,
            _mode: Mode,
            sink: &mut Vec<String>,
        ) -> Result<(), ConstraintImplementationError> {
            sink.push("always fails".to_owned());
            Ok(())
        }
    }

    #[test]
    fn test_constraint_trait() {
        let mut sink = Vec::new();
        AlwaysValid.evaluate("x", Mode::Aggregate, &mut sink).unwrap();
        assert!(sink.is_empty());
        AlwaysFails.evaluate("x", Mode::Aggregate, &mut sink).unwrap();
        assert_eq!(sink, ["always fails"]);
    }

    #[test]
    fn test_pointer_impls_forward() {
        let boxed: Box<dyn Constraint<str>> = Box::new(AlwaysFails);
        let shared: SharedConstraint<str> = Arc::new(AlwaysFails);
        assert_eq!(boxed.name(), "always_fails");
        assert_eq!(shared.name(), "always_fails");
        assert_eq!((&AlwaysValid).leaf_count(), 1);
    }

    #[test]
    fn test_and_builds_chain() {
        let chain = AlwaysValid.and(AlwaysFails).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.name(), "always_valid+always_fails");

        let mut sink = Vec::new();
        chain.evaluate("x", Mode::Aggregate, &mut sink).unwrap();
        assert_eq!(sink, ["always fails"]);
    }
}
