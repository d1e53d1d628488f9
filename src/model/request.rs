use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::InvalidTransition;

/// Discriminator between a multi-day leave and a same-day permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Leave,
    Permission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Only an approver action moves a request, and only out of Pending.
    pub fn allowed_transitions(&self) -> &'static [RequestStatus] {
        match self {
            RequestStatus::Pending => &[RequestStatus::Approved, RequestStatus::Rejected],
            RequestStatus::Approved | RequestStatus::Rejected => &[],
        }
    }

    pub fn ensure_transition(&self, next: RequestStatus) -> Result<(), InvalidTransition> {
        if self.allowed_transitions().contains(&next) {
            Ok(())
        } else {
            Err(InvalidTransition {
                entity: "request",
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

/// Fixed durations offered by the permission form. The computed end time is
/// the start time plus this span; half-day counts as four hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionDuration {
    #[serde(rename = "30m")]
    HalfHour,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "half-day")]
    HalfDay,
}

impl PermissionDuration {
    pub fn minutes(&self) -> i64 {
        match self {
            PermissionDuration::HalfHour => 30,
            PermissionDuration::OneHour => 60,
            PermissionDuration::TwoHours => 120,
            PermissionDuration::HalfDay => 240,
        }
    }

    pub fn end_time(&self, from: NaiveTime) -> NaiveTime {
        from + chrono::Duration::minutes(self.minutes())
    }
}

/// A leave or permission request as the backend stores it. Leave carries the
/// date range; permission the single date plus its time window.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub employeeId: u64,
    pub reason: Option<String>,
    pub description: Option<String>,
    pub leaveType: Option<String>,
    pub fromDate: Option<NaiveDate>,
    pub toDate: Option<NaiveDate>,
    pub date: Option<NaiveDate>,
    pub duration: Option<PermissionDuration>,
    pub fromTime: Option<NaiveTime>,
    pub toTime: Option<NaiveTime>,
    #[serde(default)]
    pub status: RequestStatus,
    pub createdAt: Option<String>,
}
