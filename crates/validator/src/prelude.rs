//! Prelude module for convenient imports.
//!
//! Provides a single `use tensorguard_validator::prelude::*;` import that
//! brings in the traits, factories, built-in checkers, and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let pair = compose![
//!     field(|p: &(i64, String)| &p.0, positive()),
//!     field(|p: &(i64, String)| p.1.as_str(), even_length()),
//! ]?;
//! let checker = make_adapter(pair, Mode::Aggregate);
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcomes, errors
// ============================================================================

pub use crate::foundation::{
    BuildError, Constraint, ConstraintExt, ConstraintImplementationError, Mode, Outcome,
    SharedConstraint, Violations,
};

// ============================================================================
// BUILDING: Checkers, chains, adapters
// ============================================================================

pub use crate::adapter::{Adapter, make_adapter};
pub use crate::chain::{Chain, compose_named};
pub use crate::checker::{Checker, IntoFindings, bind, create_checker, predicate};
pub use crate::config::ValidatorConfig;
pub use crate::engine::{validate, validate_aggregate, validate_short_circuit};
// Brings in both the `compose` function and the `compose!` macro.
pub use crate::{checker, compose};

// ============================================================================
// CHECKERS: All built-in checkers
// ============================================================================

pub use crate::checkers::{
    Shaped, even_length, greater_than, in_range, not_empty, positive, tensor_dimensions,
    tensor_shape, tensor_value_range,
};

// ============================================================================
// COMBINATORS: Projection and conditional adapters
// ============================================================================

pub use crate::combinators::{Each, Field, When, each, field, named_field, when};
