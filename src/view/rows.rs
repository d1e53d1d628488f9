//! `TableRow` implementations for the entities the console lists.

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::lead::Lead;
use crate::model::quotation::{ApprovalRow, InvoiceRow};
use crate::model::request::LeaveRequest;

use super::list_view::TableRow;

impl TableRow for Lead {
    fn row_id(&self) -> Option<u64> {
        self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.firstName,
            self.lastName,
            self.email,
            self.mobile,
            self.city,
            self.eventType,
            self.status
        )
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            "leadSource" => Some(self.leadSource.clone()),
            "eventType" => Some(self.eventType.clone()),
            "city" => Some(self.city.clone()),
            _ => None,
        }
    }
}

impl TableRow for Employee {
    fn row_id(&self) -> Option<u64> {
        self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.firstName,
            self.lastName,
            self.email,
            self.mobile,
            self.city,
            self.workLocation.as_deref().unwrap_or("")
        )
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "city" => Some(self.city.clone()),
            "state" => Some(self.state.clone()),
            "workLocation" => self.workLocation.clone(),
            "salesType" => self.salesType.clone(),
            _ => None,
        }
    }
}

impl TableRow for LeaveRequest {
    fn row_id(&self) -> Option<u64> {
        self.id
    }

    fn haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.reason.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
            self.status.as_str()
        )
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.as_str().to_string()),
            "type" => Some(match self.kind {
                crate::model::request::RequestKind::Leave => "leave".to_string(),
                crate::model::request::RequestKind::Permission => "permission".to_string(),
            }),
            _ => None,
        }
    }
}

impl TableRow for AttendanceRecord {
    fn row_id(&self) -> Option<u64> {
        self.id
    }

    fn haystack(&self) -> String {
        format!("{} {}", self.date, self.worked())
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "date" => Some(self.date.to_string()),
            _ => None,
        }
    }
}

impl TableRow for InvoiceRow {
    fn row_id(&self) -> Option<u64> {
        Some(self.lead_id)
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.full_name, self.email, self.event_name)
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "approval_status" => Some(self.approval_status.as_str().to_string()),
            _ => None,
        }
    }
}

impl TableRow for ApprovalRow {
    fn row_id(&self) -> Option<u64> {
        Some(self.lead_id)
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.full_name, self.email, self.event_name)
    }

    fn column(&self, name: &str) -> Option<String> {
        match name {
            "approval_status" => Some(self.approval_status.as_str().to_string()),
            _ => None,
        }
    }
}
