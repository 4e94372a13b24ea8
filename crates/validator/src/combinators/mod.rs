//! Combinators over constraints
//!
//! Chains ([`compose`](crate::chain::compose)) cover "all of these rules".
//! The combinators here cover the other shapes a value check takes:
//!
//! - [`Field`] - apply a rule to one part of a compound value
//! - [`Each`] - apply a rule to every element of a slice
//! - [`When`] - apply a rule only if a condition holds

pub mod each;
pub mod field;
pub mod when;

pub use each::{Each, each};
pub use field::{Field, field, named_field};
pub use when::{When, when};
