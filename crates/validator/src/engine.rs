//! Applying a constraint to a value
//!
//! [`validate`] is the single entry point every other surface (adapters, the
//! CLI) goes through.

use std::borrow::Borrow;

use tracing::debug_span;

use crate::foundation::{Constraint, ConstraintImplementationError, Mode, Outcome};

/// Validates `value` against `constraint` in the given mode.
///
/// The value is handed back unchanged inside [`Outcome::Valid`]. Owned and
/// borrowed inputs both work: a `String` against a `Constraint<str>`, or a
/// `&Array` against a `Constraint<Array>`.
///
/// # Errors
///
/// Returns [`ConstraintImplementationError`] as soon as any evaluated
/// constraint fails to run, in either mode. Findings collected before that
/// point are discarded.
///
/// # Examples
///
/// ```rust,ignore
/// use tensorguard_validator::prelude::*;
///
/// let outcome = validate(-1, &positive(), Mode::Aggregate)?;
/// assert_eq!(outcome.messages(), ["value must be > 0"]);
/// ```
pub fn validate<V, T, C>(
    value: V,
    constraint: &C,
    mode: Mode,
) -> Result<Outcome<V>, ConstraintImplementationError>
where
    V: Borrow<T>,
    T: ?Sized,
    C: Constraint<T> + ?Sized,
{
    let span = debug_span!("validate", constraint = constraint.name(), %mode);
    let _entered = span.enter();

    let mut findings = Vec::new();
    constraint.evaluate(value.borrow(), mode, &mut findings)?;

    let outcome = Outcome::from_findings(value, findings);
    tracing::debug!(valid = outcome.is_valid(), violations = outcome.messages().len(), "validated");
    Ok(outcome)
}

/// Validates in [`Mode::Aggregate`]: every violated rule is reported.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_aggregate<V, T, C>(
    value: V,
    constraint: &C,
) -> Result<Outcome<V>, ConstraintImplementationError>
where
    V: Borrow<T>,
    T: ?Sized,
    C: Constraint<T> + ?Sized,
{
    validate(value, constraint, Mode::Aggregate)
}

/// Validates in [`Mode::ShortCircuit`]: only the first violated rule is reported.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_short_circuit<V, T, C>(
    value: V,
    constraint: &C,
) -> Result<Outcome<V>, ConstraintImplementationError>
where
    V: Borrow<T>,
    T: ?Sized,
    C: Constraint<T> + ?Sized,
{
    validate(value, constraint, Mode::ShortCircuit)
}
