use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::model::request::{LeaveRequest, RequestStatus};

use super::error::GatewayResult;
use super::http::ApiClient;

#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// All requests, or one employee's when an id is given.
    async fn list(&self, employee_id: Option<u64>) -> GatewayResult<Vec<LeaveRequest>>;
    async fn create(&self, request: LeaveRequest) -> GatewayResult<LeaveRequest>;
    async fn update_status(&self, id: u64, status: RequestStatus) -> GatewayResult<LeaveRequest>;
    async fn delete(&self, id: u64) -> GatewayResult<()>;
}

pub struct HttpRequestGateway {
    api: Arc<ApiClient>,
}

impl HttpRequestGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpRequestGateway { api }
    }
}

#[async_trait]
impl RequestGateway for HttpRequestGateway {
    #[tracing::instrument(skip(self))]
    async fn list(&self, employee_id: Option<u64>) -> GatewayResult<Vec<LeaveRequest>> {
        let path = match employee_id {
            Some(id) => format!("/request?employeeId={id}"),
            None => "/request".to_string(),
        };
        self.api.get_json(&path).await
    }

    #[tracing::instrument(skip(self, request), fields(employee_id = request.employeeId))]
    async fn create(&self, request: LeaveRequest) -> GatewayResult<LeaveRequest> {
        info!("Raising {:?} request", request.kind);
        self.api.post_json("/request", &request).await
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn update_status(&self, id: u64, status: RequestStatus) -> GatewayResult<LeaveRequest> {
        info!("Updating request status to {}", status.as_str());
        self.api
            .put_json(&format!("/request/{id}"), &json!({ "status": status }))
            .await
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete(&self, id: u64) -> GatewayResult<()> {
        self.api.delete_ack(&format!("/request/leaveReq/{id}")).await
    }
}
