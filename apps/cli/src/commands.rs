//! Rules behind each subcommand and the rendering of their results.

use anyhow::{Context, Result};
use ndarray::{ArrayD, IxDyn};
use serde::Serialize;
use tensorguard_validator::checkers::{self, format_shape};
use tensorguard_validator::prelude::*;

use crate::config::OutputFormat;

/// A `(count, label)` pair as checked by `tensorguard pair`.
pub type Pair = (i64, String);

/// One validated value, ready to print.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome<()>,
}

impl Report {
    fn new<V>(outcome: Outcome<V>) -> Self {
        Self {
            label: None,
            outcome: outcome.map(drop),
        }
    }

    fn labeled<V>(label: impl Into<String>, outcome: Outcome<V>) -> Self {
        Self {
            label: Some(label.into()),
            outcome: outcome.map(drop),
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// `positive`, optionally followed by `greater_than(bound)`.
pub fn int_rule(bound: Option<i64>) -> Result<Chain<i64>> {
    let rule = match bound {
        Some(bound) => compose![positive(), greater_than(bound)],
        None => compose![positive()],
    };
    Ok(rule?)
}

/// Positive count and even-length label, checked as one chain.
pub fn pair_rule() -> Result<Chain<Pair>> {
    let rule = compose![
        named_field("count", |p: &Pair| &p.0, positive()),
        named_field("label", |p: &Pair| p.1.as_str(), even_length()),
    ]?;
    Ok(rule)
}

/// Exact shape, preceded by an axis-count check when `dims` is given.
pub fn shape_rule(expect: &[usize], dims: Option<usize>) -> Result<Chain<ArrayD<f32>>> {
    let mut members: Vec<SharedConstraint<ArrayD<f32>>> = Vec::with_capacity(2);
    if let Some(dims) = dims {
        members.push(checkers::tensor_dimensions(dims).shared());
    }
    members.push(checkers::tensor_shape(expect.to_vec()).shared());
    Ok(compose(members)?)
}

// ============================================================================
// COMMANDS
// ============================================================================

pub fn check_int(value: i64, bound: Option<i64>, mode: Mode) -> Result<Report> {
    let outcome = validate(value, &int_rule(bound)?, mode)?;
    Ok(Report::new(outcome))
}

pub fn check_string(value: &str, mode: Mode) -> Result<Report> {
    let outcome = validate(value, &even_length(), mode)?;
    Ok(Report::new(outcome))
}

pub fn check_pair(count: i64, label: String, mode: Mode) -> Result<Report> {
    let outcome = validate((count, label), &pair_rule()?, mode)?;
    Ok(Report::new(outcome))
}

pub fn check_shape(
    expect: &[usize],
    actual: &[usize],
    dims: Option<usize>,
    mode: Mode,
) -> Result<Report> {
    let tensor = ArrayD::<f32>::zeros(IxDyn(actual));
    tracing::debug!(shape = %format_shape(tensor.shape()), "built zero tensor");
    let outcome = validate(&tensor, &shape_rule(expect, dims)?, mode)?;
    Ok(Report::new(outcome))
}

/// Runs the reference scenarios through adapters built once.
pub fn demo(mode: Mode) -> Result<Vec<Report>> {
    let ints = make_adapter(int_rule(None)?, mode);
    let strings = make_adapter(even_length(), mode);
    let pairs = make_adapter(pair_rule()?, mode);
    let shapes = make_adapter(shape_rule(&[3, 2, 4], None)?, mode);
    let tensor = ArrayD::<f32>::zeros(IxDyn(&[7, 6]));

    let reports = vec![
        Report::labeled("A positive(-1)", ints.check(-1_i64)?),
        Report::labeled("A positive(1)", ints.check(1_i64)?),
        Report::labeled("B even_length(\"odd\")", strings.check("odd")?),
        Report::labeled("B even_length(\"even\")", strings.check("even")?),
        Report::labeled(
            "C pair(-1, \"odd\")",
            pairs.check((-1_i64, "odd".to_string()))?,
        ),
        Report::labeled(
            "C pair(1, \"even\")",
            pairs.check((1_i64, "even".to_string()))?,
        ),
        Report::labeled("D tensor_shape(7, 6)", shapes.check(&tensor)?),
    ];
    Ok(reports)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders reports for stdout.
pub fn render(reports: &[Report], output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(reports.iter().map(render_text).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => {
            let json = match reports {
                [single] if single.label.is_none() => serde_json::to_string_pretty(single),
                _ => serde_json::to_string_pretty(reports),
            };
            json.context("failed to serialize report")
        }
    }
}

fn render_text(report: &Report) -> String {
    let prefix = report
        .label
        .as_deref()
        .map(|label| format!("{label}: "))
        .unwrap_or_default();
    match &report.outcome {
        Outcome::Valid(()) => format!("{prefix}valid"),
        Outcome::Invalid(violations) => {
            let mut out = format!("{prefix}invalid:");
            for message in violations {
                out.push_str("\n  - ");
                out.push_str(message);
            }
            out
        }
    }
}
