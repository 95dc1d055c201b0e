use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Read-only snapshot of one Machine as returned by a single list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineRecord {
    pub name: String,
    /// `None` when the cluster object carries no creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl MachineRecord {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self { name: name.into(), created_at: Some(created_at) }
    }
}

pub type MachineList = Vec<MachineRecord>;

/// Maximum acceptable machine age. Always compared as an absolute duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeThreshold(TimeDelta);

impl AgeThreshold {
    pub const DEFAULT_DAYS: u32 = 21;

    pub fn days(days: u32) -> Self { Self(TimeDelta::days(i64::from(days))) }
    pub fn hours(hours: u32) -> Self { Self(TimeDelta::hours(i64::from(hours))) }
    pub fn as_delta(&self) -> TimeDelta { self.0 }
    pub fn whole_hours(&self) -> i64 { self.0.num_hours() }
}

impl Default for AgeThreshold {
    fn default() -> Self { Self::days(Self::DEFAULT_DAYS) }
}

impl fmt::Display for AgeThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0.num_hours();
        if hours % 24 == 0 { write!(f, "{}d", hours / 24) } else { write!(f, "{hours}h") }
    }
}

/// Renders a duration as `3d4h5m6s`, dropping leading zero units.
pub fn format_age(age: TimeDelta) -> String {
    let secs = age.num_seconds().max(0);
    let (d, h, m, s) = (secs / 86_400, secs % 86_400 / 3_600, secs % 3_600 / 60, secs % 60);
    match (d, h, m) {
        (0, 0, 0) => format!("{s}s"),
        (0, 0, _) => format!("{m}m{s}s"),
        (0, _, _) => format!("{h}h{m}m{s}s"),
        _ => format!("{d}d{h}h{m}m{s}s"),
    }
}
