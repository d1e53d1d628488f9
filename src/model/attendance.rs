use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::util::time::format_hours;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

/// One row per employee per day. Punch-in creates it, punch-out completes it
/// and fills the derived total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Option<u64>,
    pub employee_id: u64,
    pub date: NaiveDate,
    pub punch_in: Option<DateTime<Utc>>,
    pub punch_out: Option<DateTime<Utc>>,
    pub total_hours: Option<String>,
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Worked time as the "Xh Ym" display string, preferring the
    /// server-provided total over a local recomputation.
    pub fn worked(&self) -> String {
        if let Some(total) = &self.total_hours {
            return total.clone();
        }
        match (self.punch_in, self.punch_out) {
            (Some(start), Some(end)) => format_hours((end - start).num_minutes()),
            _ => "0h 0m".to_string(),
        }
    }
}

/// Payload for both punch endpoints; the flag tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchPayload {
    pub employee_id: u64,
    pub punch_in_or_out: bool,
}
