//! FIELD combinator - applies a constraint to one part of a compound value
//!
//! Lets a chain over a tuple or struct reuse constraints written for the
//! parts, without wrapping each part's finder by hand.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let pair_rule = compose(vec![
//!     field(|p: &(i64, String)| &p.0, positive()).shared(),
//!     field(|p: &(i64, String)| p.1.as_str(), even_length()).shared(),
//! ])?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Constraint, ConstraintImplementationError, Mode};

/// Applies a `Constraint<U>` to the `U` an accessor extracts from a `T`.
///
/// Messages from the inner constraint pass through unchanged.
pub struct Field<T: ?Sized, U: ?Sized, C, F> {
    name: Option<String>,
    inner: C,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T: ?Sized, U: ?Sized, C, F> Field<T, U, C, F> {
    /// Creates a field constraint that reports under the inner constraint's name.
    pub fn new(accessor: F, inner: C) -> Self {
        Self {
            name: None,
            inner,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Creates a field constraint with its own name.
    pub fn named(name: impl Into<String>, accessor: F, inner: C) -> Self {
        Self {
            name: Some(name.into()),
            inner,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the inner constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T: ?Sized, U: ?Sized, C: Clone, F: Clone> Clone for Field<T, U, C, F> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            inner: self.inner.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, U: ?Sized, C: fmt::Debug, F> fmt::Debug for Field<T, U, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("inner", &self.inner)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, C, F> Constraint<T> for Field<T, U, C, F>
where
    T: ?Sized,
    U: ?Sized,
    C: Constraint<U>,
    F: Fn(&T) -> &U + Send + Sync,
{
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.inner.name())
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        self.inner.evaluate((self.accessor)(value), mode, sink)
    }

    fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }
}

/// Creates a field constraint.
pub fn field<T, U, C, F>(accessor: F, inner: C) -> Field<T, U, C, F>
where
    T: ?Sized,
    U: ?Sized,
    C: Constraint<U>,
    F: Fn(&T) -> &U + Send + Sync,
{
    Field::new(accessor, inner)
}

/// Creates a field constraint with its own name.
pub fn named_field<T, U, C, F>(name: impl Into<String>, accessor: F, inner: C) -> Field<T, U, C, F>
where
    T: ?Sized,
    U: ?Sized,
    C: Constraint<U>,
    F: Fn(&T) -> &U + Send + Sync,
{
    Field::named(name, accessor, inner)
}
