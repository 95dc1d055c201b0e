//! Pure age classification. No clock reads and no output here; callers pass `now`.
use chrono::{DateTime, TimeDelta, Utc};
use crate::models::{AgeThreshold, MachineRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub name: String,
    /// `None` when the record has no creation timestamp.
    pub age: Option<TimeDelta>,
    pub exceeded: bool,
}

/// Classifies every record against `threshold`, preserving input order.
///
/// A record without a creation timestamp is treated as infinitely old: it is
/// reported with an unknown age and always counts as exceeded. Creation times
/// in the future (clock skew) clamp to an age of zero.
pub fn evaluate(records: &[MachineRecord], now: DateTime<Utc>, threshold: AgeThreshold) -> Vec<EvaluationResult> {
    records.iter().map(|r| classify(r, now, threshold)).collect()
}

fn classify(record: &MachineRecord, now: DateTime<Utc>, threshold: AgeThreshold) -> EvaluationResult {
    match record.created_at {
        Some(created) => {
            let age = (now - created).max(TimeDelta::zero());
            EvaluationResult { name: record.name.clone(), age: Some(age), exceeded: age > threshold.as_delta() }
        }
        None => EvaluationResult { name: record.name.clone(), age: None, exceeded: true },
    }
}
