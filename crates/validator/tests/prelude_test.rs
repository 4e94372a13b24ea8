//! Integration tests for the prelude module.
//!
//! Verifies that `use tensorguard_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use tensorguard_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_provides_factories_and_engine() {
    let rule = compose(vec![positive().shared(), greater_than(3).shared()]).unwrap();
    assert!(validate_aggregate(4_i64, &rule).unwrap().is_valid());
    assert!(validate_short_circuit(2_i64, &rule).unwrap().is_invalid());
}

#[test]
fn prelude_provides_compose_macro() {
    let rule = compose![not_empty(), even_length()].unwrap();
    assert_eq!(rule.member_names().collect::<Vec<_>>(), ["not_empty", "even_length"]);
}

// ============================================================================
// USER-DEFINED CHECKERS VIA PRELUDE
// ============================================================================

checker! {
    /// Accepts multiples of `step`.
    fn multiple_of(step: i64) -> i64 as "multiple_of";
    errors(value) { (value % step != 0).then(|| format!("value must be a multiple of {step}")) }
}

#[test]
fn checker_macro_via_prelude() {
    let rule = positive().and(multiple_of(5)).unwrap();
    let outcome = validate(12_i64, &rule, Mode::Aggregate).unwrap();
    assert_eq!(outcome.messages(), ["value must be a multiple of 5"]);
}

#[test]
fn create_checker_and_predicate_via_prelude() {
    let short = predicate("short", |s: &str| s.len() <= 4, "too long").unwrap();
    let no_space = create_checker("no_space", |s: &str| {
        s.contains(' ').then_some("must not contain spaces")
    })
    .unwrap();
    let rule = short.and(no_space).unwrap();

    let outcome = validate("a b c", &rule, Mode::Aggregate).unwrap();
    assert_eq!(outcome.messages(), ["too long", "must not contain spaces"]);
}

// ============================================================================
// CONFIGURED ADAPTERS
// ============================================================================

#[test]
fn adapter_from_config() {
    let config = ValidatorConfig::new(Mode::ShortCircuit);
    let adapter = Adapter::from_config(compose![not_empty(), even_length()].unwrap(), &config);
    assert_eq!(adapter.check("").unwrap().messages(), ["String must not be empty"]);
    assert!(adapter.check(String::from("ab")).unwrap().is_valid());
}

#[test]
fn conditional_constraint_via_prelude() {
    let rule = when(|v: &i64| *v != 0, positive());
    assert!(validate(0_i64, &rule, Mode::Aggregate).unwrap().is_valid());
    assert!(validate(-4_i64, &rule, Mode::Aggregate).unwrap().is_invalid());
}
