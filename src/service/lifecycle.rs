use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::lead_dto::LeadForm;
use crate::gateway::lead_gateway::{AssignmentPayload, LeadGateway};
use crate::gateway::quotation_gateway::QuotationGateway;
use crate::model::lead::{BookedLead, Lead, LeadStatus};
use crate::model::quotation::{ApprovalRow, ApprovalStatus, InvoiceRow, SendApprovalRequest};
use crate::session::SessionContext;
use crate::util::spreadsheet::LeadImportRow;

use super::booking_wizard::BookingWizard;
use super::error::ServiceError;
use super::quotation_builder::QuotationBuilder;

/// Coordinates the cross-entity lead flow: intake, assignment, booking,
/// quotation, approval, invoice. Every stage reads the prior stage's output
/// and writes one related record; no stage runs without a user action.
pub struct LeadLifecycleService {
    leads: Arc<dyn LeadGateway>,
    quotations: Arc<dyn QuotationGateway>,
    session: Arc<SessionContext>,
}

impl LeadLifecycleService {
    pub fn new(
        leads: Arc<dyn LeadGateway>,
        quotations: Arc<dyn QuotationGateway>,
        session: Arc<SessionContext>,
    ) -> Self {
        LeadLifecycleService {
            leads,
            quotations,
            session,
        }
    }

    pub async fn list_leads(&self) -> Result<Vec<Lead>, ServiceError> {
        Ok(self.leads.list().await?)
    }

    pub async fn booked_leads(&self) -> Result<Vec<BookedLead>, ServiceError> {
        Ok(self.leads.booked().await?)
    }

    pub async fn assigned_leads(&self) -> Result<Vec<Lead>, ServiceError> {
        Ok(self.leads.assigned().await?)
    }

    /// Stage 1, intake. Validation runs before any network call; an invalid
    /// form never issues a create.
    #[instrument(skip(self, form))]
    pub async fn intake(&self, form: &LeadForm) -> Result<Lead, ServiceError> {
        form.validate()?;
        let created_by = self.session.current().map(|u| u.username);
        let lead = form.to_lead(created_by);
        let created = self.leads.create(lead).await?;
        info!("Lead added successfully");
        Ok(created)
    }

    /// Stage 2, assignment of selected employees to selected leads.
    #[instrument(skip(self))]
    pub async fn assign(&self, lead_ids: &[u64], employee_ids: &[u64]) -> Result<(), ServiceError> {
        if lead_ids.is_empty() {
            return Err(ServiceError::InvalidInput("No leads selected".to_string()));
        }
        if employee_ids.is_empty() {
            return Err(ServiceError::InvalidInput("No employees selected".to_string()));
        }
        self.leads
            .assign(AssignmentPayload {
                leadIds: lead_ids.to_vec(),
                employeeIds: employee_ids.to_vec(),
            })
            .await?;
        info!("Leads assigned");
        Ok(())
    }

    /// Stage 3, booking. The wizard has validated both steps; this submits
    /// the combined payload and enforces that the lead may still be booked.
    #[instrument(skip(self, wizard), fields(lead_id = wizard.lead_id()))]
    pub async fn submit_booking(
        &self,
        lead_status: LeadStatus,
        wizard: &BookingWizard,
    ) -> Result<(), ServiceError> {
        lead_status.ensure_transition(LeadStatus::Booked)?;
        let payload = wizard.payload()?;
        self.leads.book_event(payload).await?;
        info!("Event & payment saved successfully");
        Ok(())
    }

    /// Stage 4, quotation. The whole line collection goes out as one call.
    #[instrument(skip(self, builder), fields(lead_id = lead.leadId))]
    pub async fn submit_quotation(
        &self,
        lead: &BookedLead,
        builder: &QuotationBuilder,
    ) -> Result<(), ServiceError> {
        if builder.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Add at least one package before saving".to_string(),
            ));
        }
        let submission = builder.to_submission(lead.leadId, lead.eventId);
        self.leads.submit_quotation(submission).await?;
        info!("Quotation packages saved successfully");
        Ok(())
    }

    pub async fn invoice_rows(&self) -> Result<Vec<InvoiceRow>, ServiceError> {
        Ok(self.quotations.quotation_created().await?)
    }

    pub async fn approvals(&self) -> Result<Vec<ApprovalRow>, ServiceError> {
        Ok(self.quotations.approval_all().await?)
    }

    /// Stage 5/6 boundary: the invoice screen's one write.
    #[instrument(skip(self, row), fields(lead_id = row.lead_id))]
    pub async fn send_for_approval(&self, row: &InvoiceRow) -> Result<(), ServiceError> {
        row.approval_status
            .ensure_transition(ApprovalStatus::PendingApproval)?;
        self.quotations
            .send_for_approval(SendApprovalRequest {
                lead_id: row.lead_id,
                event_id: row.event_id,
            })
            .await?;
        info!("Quotation sent for approval for {}", row.full_name);
        Ok(())
    }

    /// Stage 5, approval sign-off.
    #[instrument(skip(self, row), fields(lead_id = row.lead_id))]
    pub async fn send_to_client(&self, row: &ApprovalRow) -> Result<(), ServiceError> {
        row.approval_status
            .ensure_transition(ApprovalStatus::SentToClient)?;
        self.quotations.send_to_client(row.lead_id).await?;
        info!("Quotation sent to {}", row.full_name);
        Ok(())
    }

    /// Bulk spreadsheet update; rows were parsed and previewed client-side.
    #[instrument(skip(self, rows), fields(rows = rows.len()))]
    pub async fn bulk_update(&self, rows: &[LeadImportRow]) -> Result<(), ServiceError> {
        if rows.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Please upload spreadsheet data first".to_string(),
            ));
        }
        self.leads.bulk_update(rows).await?;
        info!("Leads updated successfully");
        Ok(())
    }
}
