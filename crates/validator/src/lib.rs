//! # tensorguard-validator
//!
//! A constraint-validation engine: build named checks once, compose them
//! into chains, and validate values in aggregate or short-circuit mode.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let rule = compose![positive(), in_range(0, 10)]?;
//! let outcome = validate(-1_i64, &rule, Mode::Aggregate)?;
//! assert_eq!(outcome.messages(), ["value must be > 0", "value must be in [0, 10], got -1"]);
//! ```
//!
//! ## Building Constraints
//!
//! - [`create_checker`](checker::create_checker) wraps an error-finder under a name.
//! - [`bind`](checker::bind) fixes the parameters of a parameterized finder.
//! - [`compose`](chain::compose) and [`compose!`] build ordered chains; chains nest.
//! - [`checker!`] declares reusable checker factories.
//! - [`field`](combinators::field), [`each`](combinators::each) and
//!   [`when`](combinators::when) adapt constraints to parts of a value.
//!
//! ## Outcomes and Errors
//!
//! [`validate`](engine::validate) returns `Ok(Outcome::Valid(value))`,
//! `Ok(Outcome::Invalid(violations))`, or `Err(ConstraintImplementationError)`
//! when a constraint itself is broken. The two are never mixed.
//!
//! ## Built-in Checkers
//!
//! - **Numeric**: [`positive`](checkers::positive), [`greater_than`](checkers::greater_than),
//!   [`in_range`](checkers::in_range)
//! - **String**: [`even_length`](checkers::even_length), [`not_empty`](checkers::not_empty)
//! - **Tensor**: [`tensor_shape`](checkers::tensor_shape),
//!   [`tensor_dimensions`](checkers::tensor_dimensions),
//!   [`tensor_value_range`](checkers::tensor_value_range)

// Field<T, U, C, F> and friends carry accessor closures in their types.
#![allow(clippy::type_complexity)]

pub mod adapter;
pub mod chain;
pub mod checker;
pub mod checkers;
pub mod combinators;
pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;

pub use adapter::{Adapter, make_adapter};
pub use chain::{Chain, compose, compose_named};
pub use checker::{Checker, IntoFindings, bind, create_checker, predicate};
pub use config::ValidatorConfig;
pub use engine::{validate, validate_aggregate, validate_short_circuit};
pub use foundation::{
    BuildError, Constraint, ConstraintExt, ConstraintImplementationError, Mode, Outcome,
    SharedConstraint, Violations,
};
