use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::request::{LeaveRequest, PermissionDuration, RequestKind, RequestStatus};

/// Multi-day leave request form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_leave_range", skip_on_field_errors = false))]
pub struct LeaveForm {
    #[validate(length(min = 1, message = "Leave type is required"))]
    pub leave_type: String,
    #[validate(required(message = "From date is required"))]
    pub from_date: Option<NaiveDate>,
    #[validate(required(message = "To date is required"))]
    pub to_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    pub description: Option<String>,
}

fn validate_leave_range(form: &LeaveForm) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (form.from_date, form.to_date) {
        if to < from {
            let mut err = ValidationError::new("leave_range_inverted");
            err.message = Some("To date cannot be before from date".into());
            return Err(err);
        }
    }
    Ok(())
}

impl LeaveForm {
    pub fn to_request(&self, employee_id: u64) -> LeaveRequest {
        LeaveRequest {
            id: None,
            kind: RequestKind::Leave,
            employeeId: employee_id,
            reason: Some(self.reason.clone()),
            description: self.description.clone(),
            leaveType: Some(self.leave_type.clone()),
            fromDate: self.from_date,
            toDate: self.to_date,
            date: None,
            duration: None,
            fromTime: None,
            toTime: None,
            status: RequestStatus::Pending,
            createdAt: None,
        }
    }

    pub fn clear(&mut self) {
        *self = LeaveForm::default();
    }
}

/// Same-day permission form. The end time is never typed in; it is computed
/// from the start time and the chosen duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PermissionForm {
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    #[validate(required(message = "Date is required"))]
    pub date: Option<NaiveDate>,
    #[validate(required(message = "Duration is required"))]
    pub duration: Option<PermissionDuration>,
    #[validate(required(message = "From time is required"))]
    pub from_time: Option<NaiveTime>,
    #[validate(required(message = "To time is required"))]
    pub to_time: Option<NaiveTime>,
    pub description: Option<String>,
}

impl PermissionForm {
    /// Selecting a duration recomputes the window. A missing start time
    /// defaults to the current wall clock, as the form does.
    pub fn apply_duration(&mut self, duration: PermissionDuration) {
        use chrono::Timelike;
        let from = self.from_time.unwrap_or_else(|| {
            let now = Local::now().time();
            now.with_nanosecond(0).unwrap_or(now)
        });
        self.from_time = Some(from);
        self.to_time = Some(duration.end_time(from));
        self.duration = Some(duration);
    }

    pub fn to_request(&self, employee_id: u64) -> LeaveRequest {
        LeaveRequest {
            id: None,
            kind: RequestKind::Permission,
            employeeId: employee_id,
            reason: Some(self.reason.clone()),
            description: self.description.clone(),
            leaveType: None,
            fromDate: None,
            toDate: None,
            date: self.date,
            duration: self.duration,
            fromTime: self.from_time,
            toTime: self.to_time,
            status: RequestStatus::Pending,
            createdAt: None,
        }
    }

    pub fn clear(&mut self) {
        *self = PermissionForm::default();
    }
}
