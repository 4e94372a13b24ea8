//! Macros for declaring checkers and chains with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`checker!`]: declare a factory function returning a named [`Checker`](crate::checker::Checker)
//! - [`compose!`]: build a [`Chain`](crate::chain::Chain) from a list of constraints
//!
//! # Examples
//!
//! ```rust,ignore
//! use tensorguard_validator::{checker, compose};
//!
//! checker! {
//!     /// Rejects zero.
//!     pub fn non_zero() -> i64 as "non_zero";
//!     errors(value) { (*value == 0).then_some("value must not be 0") }
//! }
//!
//! checker! {
//!     pub fn below(limit: i64) -> i64 as "below";
//!     errors(value) { (*value >= limit).then(|| format!("value must be < {limit}")) }
//! }
//!
//! let rule = compose![non_zero(), below(10)]?;
//! ```

// ============================================================================
// CHECKER MACRO
// ============================================================================

/// Declares a factory function that returns a named checker.
///
/// The `errors` block receives the value by reference and returns anything
/// implementing [`IntoFindings`](crate::checker::IntoFindings). Factory
/// parameters are captured by the finder and recorded as the checker's
/// bound parameters.
///
/// # Variants
///
/// **No parameters**:
/// ```rust,ignore
/// checker! {
///     pub fn not_empty() -> str as "not_empty";
///     errors(s) { s.is_empty().then_some("String must not be empty") }
/// }
/// ```
///
/// **With parameters**:
/// ```rust,ignore
/// checker! {
///     pub fn greater_than(bound: i64) -> i64 as "greater_than";
///     errors(v) { (*v <= bound).then(|| format!("value must be > {bound}")) }
/// }
/// ```
#[macro_export]
macro_rules! checker {
    // ── Variant 1: no parameters ─────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $factory:ident() -> $input:ty as $name:literal;
        errors($inp:ident) $body:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $factory() -> $crate::checker::Checker<$input> {
            $crate::checker::Checker::from_static($name, |$inp: &$input| $body)
        }
    };

    // ── Variant 2: bound parameters ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $factory:ident($($arg:ident: $aty:ty),+ $(,)?) -> $input:ty as $name:literal;
        errors($inp:ident) $body:block
    ) => {
        $(#[$meta])*
        #[must_use]
        $vis fn $factory($($arg: $aty),+) -> $crate::checker::Checker<$input> {
            let params = [$(::std::format!("{:?}", $arg)),+].join(", ");
            $crate::checker::Checker::from_static($name, move |$inp: &$input| $body)
                .with_params(::std::format_args!("{params}"))
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes constraints, in order, into a chain.
///
/// Expands to a call to [`compose`](crate::chain::compose) and therefore
/// returns `Result<Chain<T>, BuildError>`.
///
/// ```rust,ignore
/// let rule = compose![positive(), in_range(0, 10)]?;
/// ```
#[macro_export]
macro_rules! compose {
    ($($constraint:expr),+ $(,)?) => {
        $crate::chain::compose(::std::vec![
            $($crate::foundation::ConstraintExt::shared($constraint)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================
