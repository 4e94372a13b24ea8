//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Constraint`], [`ConstraintExt`]
//! - **Outcomes**: [`Outcome`], [`Violations`]
//! - **Modes**: [`Mode`]
//! - **Errors**: [`ConstraintImplementationError`], [`BuildError`]
//!
//! # Architecture
//!
//! ## 1. Findings, not exceptions
//!
//! A constraint reports zero or more messages for a value. An empty report
//! means "pass"; there is no third, ambiguous answer.
//!
//! ```rust,ignore
//! let positive = create_checker("positive", |v: &i64| {
//!     if *v > 0 { vec![] } else { vec!["value must be > 0"] }
//! })?;
//! ```
//!
//! ## 2. Composition
//!
//! Constraints compose into chains, and chains are constraints:
//!
//! ```rust,ignore
//! let inner = compose(vec![positive.shared(), below_ten.shared()])?;
//! let outer = compose(vec![inner.shared(), even.shared()])?;
//! ```
//!
//! ## 3. Two failure channels
//!
//! Broken values come back as [`Outcome::Invalid`]. Broken constraints come
//! back as `Err(ConstraintImplementationError)`, in every mode.

pub mod error;
pub mod mode;
pub mod outcome;
pub mod traits;

pub use error::{BoxError, BuildError, ConstraintImplementationError};
pub use mode::{Mode, ParseModeError};
pub use outcome::{Outcome, Violations};
pub use traits::{Constraint, ConstraintExt, SharedConstraint};

/// Common imports for implementing constraints by hand.
pub mod prelude {
    pub use super::{
        BuildError, Constraint, ConstraintExt, ConstraintImplementationError, Mode, Outcome,
        SharedConstraint, Violations,
    };
}
