//! WHEN combinator - conditional validation
//!
//! [`When`] evaluates its inner constraint only if a condition holds for the
//! value; otherwise the value passes.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! // Only batched tensors need a leading dimension of 8.
//! let rule = when(|shape: &Vec<usize>| shape.len() == 4, tensor_shape([8, 3, 224, 224]));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Constraint, ConstraintImplementationError, Mode};

/// Conditionally applies a constraint.
pub struct When<T: ?Sized, C, P> {
    inner: C,
    condition: P,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, C, P> When<T, C, P> {
    /// Creates a new `When` combinator.
    pub fn new(condition: P, inner: C) -> Self {
        Self {
            inner,
            condition,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, C: fmt::Debug, P> fmt::Debug for When<T, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("inner", &self.inner)
            .field("condition", &"<function>")
            .finish()
    }
}

impl<T, C, P> Constraint<T> for When<T, C, P>
where
    T: ?Sized,
    C: Constraint<T>,
    P: Fn(&T) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        if (self.condition)(value) {
            self.inner.evaluate(value, mode, sink)
        } else {
            Ok(())
        }
    }

    fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }
}

/// Creates a `When` combinator.
pub fn when<T, C, P>(condition: P, inner: C) -> When<T, C, P>
where
    T: ?Sized,
    C: Constraint<T>,
    P: Fn(&T) -> bool + Send + Sync,
{
    When::new(condition, inner)
}
