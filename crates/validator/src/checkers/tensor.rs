//! Tensor checkers
//!
//! Shape checks work on anything that exposes its extent through [`Shaped`]:
//! every `ndarray` array or view, and plain shape slices. Shapes are rendered
//! the way tuples print in notebooks, so `[3, 2, 4]` reads `(3, 2, 4)` and a
//! one-dimensional `[5]` reads `(5,)`.

use ndarray::{ArrayBase, Data, Dimension, NdFloat, RawData};

use crate::checker::Checker;

/// Anything with a tensor shape.
pub trait Shaped {
    /// Returns the length of each axis.
    fn shape(&self) -> &[usize];

    /// Returns the number of axes.
    fn ndim(&self) -> usize {
        self.shape().len()
    }
}

impl<S, D> Shaped for ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fn shape(&self) -> &[usize] {
        ArrayBase::shape(self)
    }
}

impl Shaped for [usize] {
    fn shape(&self) -> &[usize] {
        self
    }
}

impl Shaped for Vec<usize> {
    fn shape(&self) -> &[usize] {
        self
    }
}

/// Formats a shape as a tuple literal.
#[must_use]
pub fn format_shape(shape: &[usize]) -> String {
    let axes = shape.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    if shape.len() == 1 {
        format!("({axes},)")
    } else {
        format!("({axes})")
    }
}

// ============================================================================
// ERROR FINDERS
// ============================================================================

/// Reports a mismatch between the value's shape and `expected`.
///
/// Usable directly with [`bind`](crate::checker::bind).
pub fn shape_errors<A, E>(value: &A, expected: &E) -> Option<String>
where
    A: Shaped + ?Sized,
    E: AsRef<[usize]> + ?Sized,
{
    let expected = expected.as_ref();
    let actual = value.shape();
    (actual != expected).then(|| {
        format!(
            "Tensor must be of size {}, current size: {}.",
            format_shape(expected),
            format_shape(actual)
        )
    })
}

/// Reports a mismatch between the value's number of axes and `expected`.
pub fn dimension_errors<A>(value: &A, expected: &usize) -> Option<String>
where
    A: Shaped + ?Sized,
{
    let actual = value.ndim();
    (actual != *expected).then(|| {
        format!("Tensor must have {expected} dimensions, current dimensions: {actual}.")
    })
}

// ============================================================================
// CHECKERS
// ============================================================================

/// Requires the exact shape `expected`.
#[must_use]
pub fn tensor_shape<A>(expected: impl Into<Vec<usize>>) -> Checker<A>
where
    A: Shaped + ?Sized + 'static,
{
    let expected: Vec<usize> = expected.into();
    let described = expected.clone();
    Checker::from_static("tensor_shape", move |value: &A| shape_errors(value, &expected))
        .with_params(described)
}

/// Requires exactly `expected` axes.
#[must_use]
pub fn tensor_dimensions<A>(expected: usize) -> Checker<A>
where
    A: Shaped + ?Sized + 'static,
{
    Checker::from_static("tensor_dimensions", move |value: &A| {
        dimension_errors(value, &expected)
    })
    .with_params(expected)
}

/// Requires every element to be finite and within `[min, max]`.
///
/// Reports the first out-of-range element and, separately, the first
/// non-finite one.
#[must_use]
pub fn tensor_value_range<F, S, D>(min: F, max: F) -> Checker<ArrayBase<S, D>>
where
    F: NdFloat,
    S: Data<Elem = F> + 'static,
    D: Dimension + 'static,
{
    Checker::from_static("tensor_value_range", move |tensor: &ArrayBase<S, D>| {
        let mut findings = Vec::new();
        if let Some(value) = tensor
            .iter()
            .find(|v| v.is_finite() && (**v < min || **v > max))
        {
            findings.push(format!("Tensor value {value} out of range [{min}, {max}]"));
        }
        if let Some(value) = tensor.iter().find(|v| !v.is_finite()) {
            findings.push(format!("Tensor contains non-finite value: {value}"));
        }
        findings
    })
    .with_params((min, max))
}
