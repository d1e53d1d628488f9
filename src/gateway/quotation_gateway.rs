use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::model::quotation::{ApprovalRow, InvoiceRow, SendApprovalRequest};

use super::error::GatewayResult;
use super::http::ApiClient;

#[async_trait]
pub trait QuotationGateway: Send + Sync {
    /// Quotation+payment+package aggregation rows for the invoice screen.
    async fn quotation_created(&self) -> GatewayResult<Vec<InvoiceRow>>;
    async fn approval_all(&self) -> GatewayResult<Vec<ApprovalRow>>;
    async fn send_for_approval(&self, request: SendApprovalRequest) -> GatewayResult<()>;
    async fn send_to_client(&self, lead_id: u64) -> GatewayResult<()>;
}

pub struct HttpQuotationGateway {
    api: Arc<ApiClient>,
}

impl HttpQuotationGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpQuotationGateway { api }
    }
}

#[async_trait]
impl QuotationGateway for HttpQuotationGateway {
    #[tracing::instrument(skip(self))]
    async fn quotation_created(&self) -> GatewayResult<Vec<InvoiceRow>> {
        self.api.get_json("/leads/quotation-created").await
    }

    #[tracing::instrument(skip(self))]
    async fn approval_all(&self) -> GatewayResult<Vec<ApprovalRow>> {
        self.api.get_json("/quotation/approvalAll").await
    }

    #[tracing::instrument(skip(self, request), fields(lead_id = request.lead_id, event_id = request.event_id))]
    async fn send_for_approval(&self, request: SendApprovalRequest) -> GatewayResult<()> {
        info!("Sending quotation for approval");
        match self.api.post_json_ack("/quotation/send-approval", &request).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!("Failed to send quotation for approval: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self), fields(lead_id = lead_id))]
    async fn send_to_client(&self, lead_id: u64) -> GatewayResult<()> {
        info!("Sending quotation to client");
        self.api
            .post_ack(&format!("/quotation/send-to-client/{lead_id}"))
            .await
    }
}
