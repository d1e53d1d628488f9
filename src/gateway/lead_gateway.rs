use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::model::booking::BookingPayload;
use crate::model::lead::{BookedLead, Lead};
use crate::model::quotation::QuotationSubmission;
use crate::util::spreadsheet::LeadImportRow;

use super::error::GatewayResult;
use super::http::ApiClient;

/// Payload for assigning selected employees to selected leads.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentPayload {
    pub leadIds: Vec<u64>,
    pub employeeIds: Vec<u64>,
}

#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<Lead>>;
    async fn create(&self, lead: Lead) -> GatewayResult<Lead>;
    async fn bulk_update(&self, rows: &[LeadImportRow]) -> GatewayResult<()>;
    async fn assign(&self, payload: AssignmentPayload) -> GatewayResult<()>;
    async fn book_event(&self, payload: BookingPayload) -> GatewayResult<()>;
    async fn booked(&self) -> GatewayResult<Vec<BookedLead>>;
    async fn assigned(&self) -> GatewayResult<Vec<Lead>>;
    async fn submit_quotation(&self, submission: QuotationSubmission) -> GatewayResult<()>;
}

pub struct HttpLeadGateway {
    api: Arc<ApiClient>,
}

impl HttpLeadGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpLeadGateway { api }
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> GatewayResult<Vec<Lead>> {
        self.api.get_json("/leads/getAll").await
    }

    #[tracing::instrument(skip(self, lead), fields(email = %lead.email))]
    async fn create(&self, lead: Lead) -> GatewayResult<Lead> {
        info!("Creating new lead");
        match self.api.post_json("/leads/addNew", &lead).await {
            Ok(created) => {
                info!("Lead created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create lead: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self, rows), fields(rows = rows.len()))]
    async fn bulk_update(&self, rows: &[LeadImportRow]) -> GatewayResult<()> {
        info!("Submitting bulk lead update");
        self.api.put_json_ack("/leads/updateBulk", rows).await
    }

    #[tracing::instrument(skip(self, payload), fields(leads = payload.leadIds.len(), employees = payload.employeeIds.len()))]
    async fn assign(&self, payload: AssignmentPayload) -> GatewayResult<()> {
        self.api.post_json_ack("/leads/assign", &payload).await
    }

    #[tracing::instrument(skip(self, payload), fields(lead_id = payload.leadId))]
    async fn book_event(&self, payload: BookingPayload) -> GatewayResult<()> {
        info!("Submitting booking");
        match self.api.post_json_ack("/leads/bookEvent", &payload).await {
            Ok(()) => {
                info!("Event & payment saved");
                Ok(())
            }
            Err(e) => {
                error!("Failed to book event: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn booked(&self) -> GatewayResult<Vec<BookedLead>> {
        self.api.get_json("/leads/booked").await
    }

    #[tracing::instrument(skip(self))]
    async fn assigned(&self) -> GatewayResult<Vec<Lead>> {
        self.api.get_json("/leads/assigned").await
    }

    #[tracing::instrument(skip(self, submission), fields(lead_id = submission.leadId, lines = submission.packages.len()))]
    async fn submit_quotation(&self, submission: QuotationSubmission) -> GatewayResult<()> {
        info!("Submitting quotation packages");
        self.api
            .post_json_ack("/leads/quotationPackages", &submission)
            .await
    }
}
