use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::lead::{Lead, LeadStatus};
use crate::util::time::start_of_today;

use super::EditorMode;

/// Intake/update form for a lead. One flat record, one validation pass;
/// cross-field rules live in the schema function below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_lead_rules", skip_on_field_errors = false))]
pub struct LeadForm {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    pub secondary_mobile: Option<String>,
    pub door_no: Option<String>,
    pub street: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub district: Option<String>,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "Event type is required"))]
    pub event_type: String,
    #[validate(length(min = 1, message = "Lead source is required"))]
    pub lead_source: String,
    pub budget: Option<f64>,
    pub event_date: Option<NaiveDate>,
    pub advance: Option<f64>,
    pub payment_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(skip)]
    pub initial: Option<Lead>,
}

fn validate_lead_rules(form: &LeadForm) -> Result<(), ValidationError> {
    if let (Some(budget), Some(advance)) = (form.budget, form.advance) {
        if advance > budget {
            let mut err = ValidationError::new("advance_exceeds_budget");
            err.message = Some(format!("Advance cannot exceed budget ({budget})").into());
            return Err(err);
        }
    }
    if let Some(date) = form.event_date {
        if date < start_of_today() {
            let mut err = ValidationError::new("event_date_in_past");
            err.message = Some("Event date cannot be in the past".into());
            return Err(err);
        }
    }
    Ok(())
}

impl LeadForm {
    pub fn mode(&self) -> EditorMode {
        if self.initial.is_some() {
            EditorMode::Update
        } else {
            EditorMode::Create
        }
    }

    /// Populates an edit-mode form from a fetched lead.
    pub fn from_lead(lead: Lead) -> Self {
        LeadForm {
            first_name: lead.firstName.clone(),
            last_name: lead.lastName.clone(),
            email: lead.email.clone(),
            mobile: lead.mobile.clone(),
            secondary_mobile: lead.secondaryMobile.clone(),
            door_no: lead.doorNo.clone(),
            street: lead.street.clone(),
            city: lead.city.clone(),
            district: lead.district.clone(),
            state: lead.state.clone(),
            country: lead.country.clone(),
            event_type: lead.eventType.clone(),
            lead_source: lead.leadSource.clone(),
            budget: lead.budget,
            event_date: lead.eventDate,
            advance: lead.advance,
            payment_date: lead.paymentDate,
            notes: lead.notes.clone(),
            initial: Some(lead),
        }
    }

    /// Builds the wire payload. New leads start as `New`; edits keep the
    /// id and status of the record they came from.
    pub fn to_lead(&self, created_by: Option<String>) -> Lead {
        let (id, status, existing_created_by) = match &self.initial {
            Some(initial) => (initial.id, initial.status, initial.createdBy.clone()),
            None => (None, LeadStatus::New, None),
        };
        Lead {
            id,
            firstName: self.first_name.clone(),
            lastName: self.last_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            secondaryMobile: self.secondary_mobile.clone(),
            doorNo: self.door_no.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            eventType: self.event_type.clone(),
            leadSource: self.lead_source.clone(),
            budget: self.budget,
            eventDate: self.event_date,
            advance: self.advance,
            paymentDate: self.payment_date,
            notes: self.notes.clone(),
            status,
            createdBy: existing_created_by.or(created_by),
            createdAt: None,
            updatedAt: None,
        }
    }

    /// Create-mode reset after a successful save.
    pub fn clear(&mut self) {
        *self = LeadForm::default();
    }
}
