//! Checkers - named leaf constraints built from error-finder functions
//!
//! An error-finder maps a value to zero or more problem descriptions. An
//! empty list means the value passes. [`create_checker`] wraps a finder under
//! a name; [`bind`] does the same for a parameterized finder, fixing its
//! parameters up front; [`predicate`] covers the common boolean-plus-message
//! case.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::prelude::*;
//!
//! let positive = create_checker("positive", |v: &i64| {
//!     if *v > 0 { vec![] } else { vec!["value must be > 0"] }
//! })?;
//!
//! let at_least = bind("at_least", |v: &i64, min: &i64| {
//!     (*v < *min).then(|| format!("value must be >= {min}"))
//! }, 10)?;
//! ```

use std::borrow::Cow;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::foundation::error::{checked_name, panic_message};
use crate::foundation::{BoxError, BuildError, Constraint, ConstraintImplementationError, Mode};

// ============================================================================
// FINDINGS
// ============================================================================

/// Anything an error-finder may return.
///
/// `Vec` and `Option` carry the findings directly. A `Result` lets a finder
/// signal that it could not evaluate the value at all; its `Err` becomes a
/// [`ConstraintImplementationError`], never a finding.
pub trait IntoFindings {
    /// Converts into the finder's findings, or the finder's own failure.
    fn into_findings(self) -> Result<Vec<String>, BoxError>;
}

impl<S: Into<String>> IntoFindings for Vec<S> {
    fn into_findings(self) -> Result<Vec<String>, BoxError> {
        Ok(self.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> IntoFindings for Option<S> {
    fn into_findings(self) -> Result<Vec<String>, BoxError> {
        Ok(self.into_iter().map(Into::into).collect())
    }
}

impl<R, E> IntoFindings for Result<R, E>
where
    R: IntoFindings,
    E: Into<BoxError>,
{
    fn into_findings(self) -> Result<Vec<String>, BoxError> {
        self.map_err(Into::into)?.into_findings()
    }
}

// ============================================================================
// CHECKER
// ============================================================================

type Finder<T> = dyn Fn(&T) -> Result<Vec<String>, BoxError> + Send + Sync;

/// A named leaf constraint wrapping one error-finder.
///
/// Cloning is cheap: the finder is shared behind an `Arc`.
pub struct Checker<T: ?Sized> {
    name: Cow<'static, str>,
    params: Option<String>,
    finder: Arc<Finder<T>>,
}

impl<T: ?Sized + 'static> Checker<T> {
    /// Builds a checker under a compile-time name.
    ///
    /// Used by the built-in checkers and the [`checker!`](crate::checker!) macro.
    ///
    /// # Panics
    ///
    /// Panics if `name` is blank.
    pub fn from_static<F, R>(name: &'static str, finder: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: IntoFindings,
    {
        assert!(!name.trim().is_empty(), "checker name must not be empty");
        Self {
            name: Cow::Borrowed(name),
            params: None,
            finder: Arc::new(move |value: &T| finder(value).into_findings()),
        }
    }

    /// Records a Debug rendering of the parameters this checker was built with.
    #[must_use]
    pub fn with_params(mut self, params: impl fmt::Debug) -> Self {
        self.params = Some(format!("{params:?}"));
        self
    }

    /// Returns the Debug rendering of the bound parameters, if any.
    #[must_use]
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Runs the finder directly and returns its findings.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintImplementationError`] if the finder returns an
    /// error or panics.
    pub fn find_errors(&self, value: &T) -> Result<Vec<String>, ConstraintImplementationError> {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.finder)(value))) {
            Ok(Ok(findings)) => Ok(findings),
            Ok(Err(source)) => {
                error!(constraint = %self.name, error = %source, "checker failed to evaluate");
                Err(ConstraintImplementationError::failed(self.name.clone(), source))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(constraint = %self.name, panic = %message, "checker panicked");
                Err(ConstraintImplementationError::panicked(self.name.clone(), message))
            }
        }
    }
}

impl<T: ?Sized> Clone for Checker<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: self.params.clone(),
            finder: Arc::clone(&self.finder),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Checker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("finder", &"<function>")
            .finish()
    }
}

impl<T: ?Sized + 'static> Constraint<T> for Checker<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &self,
        value: &T,
        _mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        trace!(constraint = %self.name, "evaluating checker");
        let findings = self.find_errors(value)?;
        if !findings.is_empty() {
            debug!(constraint = %self.name, count = findings.len(), "checker reported violations");
        }
        sink.extend(findings);
        Ok(())
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Creates a named checker from an error-finder.
///
/// # Errors
///
/// Returns [`BuildError::EmptyName`] if `name` is blank.
///
/// # Examples
///
/// ```rust,ignore
/// let even = create_checker("even_length", |s: &str| {
///     let n = s.chars().count();
///     (n % 2 != 0).then(|| format!("String length must be even, length: {n}."))
/// })?;
/// ```
pub fn create_checker<T, F, R>(
    name: impl Into<Cow<'static, str>>,
    finder: F,
) -> Result<Checker<T>, BuildError>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: IntoFindings,
{
    let name = checked_name(name)?;
    Ok(Checker {
        name,
        params: None,
        finder: Arc::new(move |value: &T| finder(value).into_findings()),
    })
}

/// Creates a checker from a parameterized finder with `params` fixed.
///
/// The result takes only the value, like any other checker. The bound
/// parameters are kept for diagnostics, see [`Checker::params`].
///
/// # Errors
///
/// Returns [`BuildError::EmptyName`] if `name` is blank.
///
/// # Examples
///
/// ```rust,ignore
/// let shape = bind("tensor_shape", shape_errors, vec![3, 2, 4])?;
/// assert_eq!(shape.params(), Some("[3, 2, 4]"));
/// ```
pub fn bind<T, P, F, R>(
    name: impl Into<Cow<'static, str>>,
    factory: F,
    params: P,
) -> Result<Checker<T>, BuildError>
where
    T: ?Sized + 'static,
    P: fmt::Debug + Send + Sync + 'static,
    F: Fn(&T, &P) -> R + Send + Sync + 'static,
    R: IntoFindings,
{
    let described = format!("{params:?}");
    let mut checker = create_checker(name, move |value: &T| factory(value, &params))?;
    checker.params = Some(described);
    Ok(checker)
}

/// Creates a checker from a boolean predicate and one fixed message.
///
/// # Errors
///
/// Returns [`BuildError::EmptyName`] if `name` is blank.
pub fn predicate<T, F>(
    name: impl Into<Cow<'static, str>>,
    pred: F,
    message: impl Into<String>,
) -> Result<Checker<T>, BuildError>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    create_checker(name, move |value: &T| {
        if pred(value) {
            None
        } else {
            Some(message.clone())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive() -> Checker<i64> {
        create_checker("positive", |v: &i64| {
            if *v > 0 {
                vec![]
            } else {
                vec!["value must be > 0"]
            }
        })
        .unwrap()
    }

    #[test]
    fn test_create_checker_rejects_blank_name() {
        let err = create_checker("  ", |_: &i64| Vec::<String>::new()).unwrap_err();
        assert_eq!(err, BuildError::EmptyName);
    }

    #[test]
    fn test_checker_findings() {
        let checker = positive();
        assert_eq!(checker.name(), "positive");
        assert!(checker.find_errors(&1).unwrap().is_empty());
        assert_eq!(checker.find_errors(&-1).unwrap(), ["value must be > 0"]);
    }

    #[test]
    fn test_evaluate_appends_to_sink() {
        let checker = positive();
        let mut sink = vec!["earlier".to_owned()];
        checker.evaluate(&0, Mode::Aggregate, &mut sink).unwrap();
        assert_eq!(sink, ["earlier", "value must be > 0"]);
    }

    #[test]
    fn test_bind_fixes_params() {
        let at_least = bind(
            "at_least",
            |v: &i64, min: &i64| (*v < *min).then(|| format!("value must be >= {min}")),
            10_i64,
        )
        .unwrap();

        assert_eq!(at_least.params(), Some("10"));
        assert!(at_least.find_errors(&10).unwrap().is_empty());
        assert_eq!(at_least.find_errors(&3).unwrap(), ["value must be >= 10"]);
    }

    #[test]
    fn test_predicate() {
        let short = predicate("short", |s: &str| s.len() < 4, "too long").unwrap();
        assert!(short.find_errors("abc").unwrap().is_empty());
        assert_eq!(short.find_errors("abcd").unwrap(), ["too long"]);
    }

    #[test]
    fn test_finder_error_is_implementation_failure() {
        let broken = create_checker("broken", |_: &i64| -> Result<Vec<String>, &'static str> {
            Err("lookup table missing")
        })
        .unwrap();

        let mut sink = Vec::new();
        let err = broken.evaluate(&1, Mode::Aggregate, &mut sink).unwrap_err();
        assert_eq!(err.constraint_name(), "broken");
        assert!(!err.is_panic());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_finder_panic_is_caught() {
        let broken = create_checker("broken", |v: &i64| -> Vec<String> {
            if *v > 0 {
                panic!("unexpected internal state");
            }
            Vec::new()
        })
        .unwrap();

        let err = broken.find_errors(&1).unwrap_err();
        assert!(err.is_panic());
        assert!(err.to_string().contains("unexpected internal state"));
        assert!(broken.find_errors(&-1).unwrap().is_empty());
    }

    #[test]
    fn test_clone_shares_finder() {
        let checker = positive();
        let copy = checker.clone();
        assert_eq!(copy.name(), checker.name());
        assert_eq!(copy.find_errors(&-5).unwrap(), checker.find_errors(&-5).unwrap());
        assert!(format!("{copy:?}").contains("positive"));
    }
}
