use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use crate::cli::OutputFormat;
use crate::evaluator::EvaluationResult;
use crate::models::{format_age, AgeThreshold};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary { pub total: usize, pub exceeded: usize }

impl Summary {
    pub fn of(results: &[EvaluationResult]) -> Self {
        Self { total: results.len(), exceeded: results.iter().filter(|r| r.exceeded).count() }
    }
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub namespace: &'a str,
    pub threshold: AgeThreshold,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions { pub format: OutputFormat, pub only_exceeded: bool }

#[derive(Serialize)]
struct JsonReport<'a> {
    namespace: &'a str,
    threshold_hours: i64,
    evaluated_at: DateTime<Utc>,
    machines: Vec<JsonMachine<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonMachine<'a> { name: &'a str, age_seconds: Option<i64>, exceeded: bool }

pub fn render<W: Write>(out: &mut W, ctx: &ReportContext<'_>, results: &[EvaluationResult], opts: RenderOptions) -> io::Result<Summary> {
    let summary = Summary::of(results);
    let shown = results.iter().filter(|r| !opts.only_exceeded || r.exceeded);
    match opts.format {
        OutputFormat::Json => {
            let report = JsonReport {
                namespace: ctx.namespace,
                threshold_hours: ctx.threshold.whole_hours(),
                evaluated_at: ctx.evaluated_at,
                machines: shown.map(|r| JsonMachine { name: &r.name, age_seconds: r.age.map(|a| a.num_seconds()), exceeded: r.exceeded }).collect(),
                summary,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for r in shown {
                let age = r.age.map(format_age).unwrap_or_else(|| "unknown".into());
                writeln!(out, "{}\t{}\t{}", r.name, age, if r.exceeded { "EXCEEDED" } else { "ok" })?;
            }
            writeln!(out, "{} of {} machine(s) in {} older than {}", summary.exceeded, summary.total, ctx.namespace, ctx.threshold)?;
        }
    }
    Ok(summary)
}
