//! Built-in checkers
//!
//! Ready-made leaf constraints for integers, strings, and tensors. Each
//! factory returns a [`Checker`](crate::checker::Checker) that composes like
//! any user-defined one.

pub mod numeric;
pub mod string;
pub mod tensor;

pub use numeric::{greater_than, in_range, positive};
pub use string::{even_length, not_empty};
pub use tensor::{
    Shaped, dimension_errors, format_shape, shape_errors, tensor_dimensions, tensor_shape,
    tensor_value_range,
};
