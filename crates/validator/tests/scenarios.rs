//! End-to-end scenarios: leaf checkers, composite chains, tensors, and the
//! implementation-error channel.

use ndarray::{Array2, Array3};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tensorguard_validator::prelude::*;

type Pair = (i64, String);

fn pair_chain() -> Chain<Pair> {
    compose![
        field(|p: &Pair| &p.0, positive()),
        field(|p: &Pair| p.1.as_str(), even_length()),
    ]
    .unwrap()
}

// ============================================================================
// SCENARIO A: positive integer
// ============================================================================

#[rstest]
#[case(Mode::Aggregate)]
#[case(Mode::ShortCircuit)]
fn positive_rejects_negative(#[case] mode: Mode) {
    let outcome = validate(-1_i64, &positive(), mode).unwrap();
    assert_eq!(outcome.messages(), ["value must be > 0"]);
}

#[test]
fn positive_accepts_and_returns_value() {
    let outcome = validate(1_i64, &positive(), Mode::Aggregate).unwrap();
    assert_eq!(outcome, Outcome::Valid(1));
}

// ============================================================================
// SCENARIO B: even-length string
// ============================================================================

#[test]
fn even_length_rejects_odd() {
    let outcome = validate("odd", &even_length(), Mode::Aggregate).unwrap();
    assert_eq!(
        outcome.messages(),
        ["String length must be even, length: 3."]
    );
}

#[test]
fn even_length_accepts_even() {
    let outcome = validate("even", &even_length(), Mode::Aggregate).unwrap();
    assert_eq!(outcome.into_value(), Some("even"));
}

// ============================================================================
// SCENARIO C: composite chain over a pair
// ============================================================================

#[test]
fn pair_chain_aggregates_both_violations() {
    let outcome = validate((-1_i64, String::from("odd")), &pair_chain(), Mode::Aggregate).unwrap();
    assert_eq!(
        outcome.messages(),
        [
            "value must be > 0",
            "String length must be even, length: 3."
        ]
    );
}

#[test]
fn pair_chain_short_circuits_on_first_violation() {
    let outcome = validate((-1_i64, String::from("odd")), &pair_chain(), Mode::ShortCircuit).unwrap();
    assert_eq!(outcome.messages(), ["value must be > 0"]);
}

#[rstest]
#[case(Mode::Aggregate)]
#[case(Mode::ShortCircuit)]
fn pair_chain_accepts_valid_pair(#[case] mode: Mode) {
    let value = (1_i64, String::from("even"));
    let outcome = validate(value.clone(), &pair_chain(), mode).unwrap();
    assert_eq!(outcome, Outcome::Valid(value));
}

#[test]
fn pair_chain_names_and_counts_leaves() {
    let chain = pair_chain();
    assert_eq!(chain.name(), "positive+even_length");
    assert_eq!(chain.leaf_count(), 2);
}

// ============================================================================
// SCENARIO D: tensor shape
// ============================================================================

#[test]
fn tensor_shape_reports_expected_and_actual() {
    let tensor = Array2::<f32>::zeros((7, 6));
    let checker = tensor_shape::<Array2<f32>>([3, 2, 4]);
    let outcome = validate(&tensor, &checker, Mode::Aggregate).unwrap();
    assert_eq!(
        outcome.messages(),
        ["Tensor must be of size (3, 2, 4), current size: (7, 6)."]
    );
}

#[test]
fn tensor_shape_via_bind() {
    let checker = bind(
        "tensor_shape",
        |t: &Array3<f32>, expected: &Vec<usize>| tensorguard_validator::checkers::shape_errors(t, expected),
        vec![3, 2, 4],
    )
    .unwrap();
    let tensor = Array3::<f32>::zeros((3, 2, 4));
    assert!(validate(&tensor, &checker, Mode::Aggregate).unwrap().is_valid());
    assert_eq!(checker.params(), Some("[3, 2, 4]"));
}

// ============================================================================
// SCENARIO E: broken constraints
// ============================================================================

fn panicking() -> Checker<i64> {
    create_checker("panicking", |_: &i64| -> Vec<String> {
        panic!("lookup table not loaded")
    })
    .unwrap()
}

#[rstest]
#[case(Mode::Aggregate)]
#[case(Mode::ShortCircuit)]
fn panic_in_finder_is_implementation_error(#[case] mode: Mode) {
    let err = validate(5_i64, &panicking(), mode).unwrap_err();
    assert!(err.is_panic());
    assert_eq!(err.constraint_name(), "panicking");
}

#[rstest]
#[case(Mode::Aggregate)]
#[case(Mode::ShortCircuit)]
fn implementation_error_inside_chain_propagates(#[case] mode: Mode) {
    // Reached only when the first member passes.
    let chain = compose![positive(), panicking()].unwrap();
    let err = validate(5_i64, &chain, mode).unwrap_err();
    assert_eq!(err.constraint_name(), "panicking");
}

#[test]
fn short_circuit_never_reaches_broken_member_after_violation() {
    let chain = compose![positive(), panicking()].unwrap();
    let outcome = validate(-5_i64, &chain, Mode::ShortCircuit).unwrap();
    assert_eq!(outcome.messages(), ["value must be > 0"]);
    assert!(validate(-5_i64, &chain, Mode::Aggregate).is_err());
}

// ============================================================================
// NESTING AND ADAPTERS
// ============================================================================

#[test]
fn nested_chains_report_in_declaration_order_without_dedup() {
    let inner = compose![positive(), greater_than(10)].unwrap();
    let outer = compose![inner, positive(), in_range(0, 5)].unwrap();

    let outcome = validate(-3_i64, &outer, Mode::Aggregate).unwrap();
    assert_eq!(
        outcome.messages(),
        [
            "value must be > 0",
            "value must be > 10",
            "value must be > 0",
            "value must be in [0, 5], got -3",
        ]
    );
}

#[test]
fn adapter_validates_many_values() {
    let adapter = make_adapter(pair_chain(), Mode::Aggregate);
    let results: Vec<bool> = [(1_i64, "ab"), (2, "abc"), (-1, "ab"), (3, "abcd")]
        .into_iter()
        .map(|(n, s)| adapter.check((n, s.to_owned())).unwrap().is_valid())
        .collect();
    assert_eq!(results, [true, false, false, true]);
}

#[test]
fn each_reports_offending_indices() {
    let values: Vec<i64> = vec![1, -2, 3, 0];
    let outcome = validate(values.as_slice(), &each(positive()), Mode::Aggregate).unwrap();
    assert_eq!(
        outcome.messages(),
        ["[1]: value must be > 0", "[3]: value must be > 0"]
    );
}

#[test]
fn outcome_serializes_for_reporting() {
    let outcome = validate("odd", &even_length(), Mode::Aggregate).unwrap();
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({
            "status": "invalid",
            "errors": ["String length must be even, length: 3."],
        })
    );
}
