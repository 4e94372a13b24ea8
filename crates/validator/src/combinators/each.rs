//! EACH combinator - applies a constraint to every element of a slice

use crate::foundation::{Constraint, ConstraintImplementationError, Mode};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies an element constraint to every element of a `[T]`.
///
/// Every message is prefixed with the element index (`[2]: ...`). In
/// [`Mode::ShortCircuit`] evaluation stops after the first failing element.
///
/// # Examples
///
/// ```rust,ignore
/// use tensorguard_validator::prelude::*;
///
/// let all_positive = each(positive());
/// let outcome = validate(vec![1, -2, -3], &all_positive, Mode::Aggregate)?;
/// assert_eq!(outcome.messages(), ["[1]: value must be > 0", "[2]: value must be > 0"]);
/// ```
#[derive(Debug, Clone)]
pub struct Each<C> {
    name: String,
    inner: C,
}

impl<C> Each<C> {
    /// Returns a reference to the element constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the element constraint.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Constraint<[T]> for Each<C>
where
    C: Constraint<T>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(
        &self,
        value: &[T],
        mode: Mode,
        sink: &mut Vec<String>,
    ) -> Result<(), ConstraintImplementationError> {
        let mut element_findings = Vec::new();
        for (index, element) in value.iter().enumerate() {
            self.inner.evaluate(element, mode, &mut element_findings)?;
            if element_findings.is_empty() {
                continue;
            }
            sink.extend(
                element_findings
                    .drain(..)
                    .map(|message| format!("[{index}]: {message}")),
            );
            if mode.is_short_circuit() {
                break;
            }
        }
        Ok(())
    }

    fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }
}

/// Creates an EACH combinator named `each(<inner>)`.
pub fn each<T, C>(inner: C) -> Each<C>
where
    C: Constraint<T>,
{
    let name = format!("each({})", inner.name());
    Each { name, inner }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::predicate;

    fn positive() -> crate::checker::Checker<i32> {
        predicate("positive", |v: &i32| *v > 0, "Must be positive").unwrap()
    }

    fn run(values: &[i32], mode: Mode) -> Vec<String> {
        let mut sink = Vec::new();
        each(positive()).evaluate(values, mode, &mut sink).unwrap();
        sink
    }

    #[test]
    fn test_each_all_valid() {
        assert!(run(&[1, 2, 3], Mode::Aggregate).is_empty());
    }

    #[test]
    fn test_each_some_invalid() {
        assert_eq!(
            run(&[1, -2, -3], Mode::Aggregate),
            ["[1]: Must be positive", "[2]: Must be positive"]
        );
    }

    #[test]
    fn test_each_empty() {
        assert!(run(&[], Mode::Aggregate).is_empty());
    }

    #[test]
    fn test_each_short_circuit() {
        assert_eq!(run(&[1, -2, -3], Mode::ShortCircuit), ["[1]: Must be positive"]);
    }

    #[test]
    fn test_each_name() {
        assert_eq!(Constraint::<[i32]>::name(&each(positive())), "each(positive)");
    }
}
