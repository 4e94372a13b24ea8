//! Composite constraint chains
//!
//! A [`Chain`] applies an ordered list of constraints to the same value. It
//! is itself a [`Constraint`], so chains nest; evaluation flattens nested
//! chains depth-first in declaration order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let rule = compose(vec![positive().shared(), in_range(0, 10).shared()])?;
//! let outcome = validate(-3, &rule, Mode::Aggregate)?;
//! assert_eq!(outcome.messages().len(), 2);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::foundation::error::checked_name;
use crate::foundation::{BuildError, Constraint, ConstraintImplementationError, Mode, SharedConstraint};

/// An ordered sequence of constraints evaluated as one constraint.
pub struct Chain<T: ?Sized> {
    name: Cow<'static, str>,
    members: Arc<[SharedConstraint<T>]>,
}

impl<T: ?Sized> Chain<T> {
    /// Returns the members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[SharedConstraint<T>] {
        &self.members
    }

    /// Returns the number of direct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a chain cannot be built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the direct members' names in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name())
    }
}

impl<T: ?Sized> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            members: Arc::clone(&self.members),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("members", &self.member_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: ?Sized> Constraint<T> for Chain<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &self,
        value: &T,
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        // Findings already in the sink belong to the caller.
        let start = sink.len();
        for member in self.members.iter() {
            member.evaluate(value, mode, sink)?;
            if mode.is_short_circuit() && sink.len() > start {
                trace!(chain = %self.name, stopped_at = member.name(), "short-circuiting chain");
                return Ok(());
            }
        }
        Ok(())
    }

    fn leaf_count(&self) -> usize {
        self.members.iter().map(|m| m.leaf_count()).sum()
    }
}

/// Composes constraints into a chain named after its members.
///
/// The default name joins member names with `+`.
///
/// # Errors
///
/// Returns [`BuildError::EmptyChain`] if `constraints` is empty.
pub fn compose<T: ?Sized>(constraints: Vec<SharedConstraint<T>>) -> Result<Chain<T>, BuildError> {
    if constraints.is_empty() {
        return Err(BuildError::EmptyChain {
            name: String::new(),
        });
    }
    let name = constraints
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join("+");
    Ok(Chain {
        name: Cow::Owned(name),
        members: constraints.into(),
    })
}

/// Composes constraints into a chain with an explicit name.
///
/// # Errors
///
/// Returns [`BuildError::EmptyName`] for a blank name and
/// [`BuildError::EmptyChain`] if `constraints` is empty.
pub fn compose_named<T: ?Sized>(
    name: impl Into<Cow<'static, str>>,
    constraints: Vec<SharedConstraint<T>>,
) -> Result<Chain<T>, BuildError> {
    let name = checked_name(name)?;
    if constraints.is_empty() {
        return Err(BuildError::EmptyChain {
            name: name.into_owned(),
        });
    }
    Ok(Chain {
        name,
        members: constraints.into(),
    })
}
