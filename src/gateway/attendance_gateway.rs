use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::model::attendance::{AttendanceRecord, PunchPayload};

use super::error::GatewayResult;
use super::http::ApiClient;

#[async_trait]
pub trait AttendanceGateway: Send + Sync {
    async fn history(&self, employee_id: u64) -> GatewayResult<Vec<AttendanceRecord>>;
    async fn punch_in(&self, payload: PunchPayload) -> GatewayResult<AttendanceRecord>;
    async fn punch_out(&self, payload: PunchPayload) -> GatewayResult<AttendanceRecord>;
}

pub struct HttpAttendanceGateway {
    api: Arc<ApiClient>,
}

impl HttpAttendanceGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpAttendanceGateway { api }
    }
}

#[async_trait]
impl AttendanceGateway for HttpAttendanceGateway {
    #[tracing::instrument(skip(self), fields(employee_id = employee_id))]
    async fn history(&self, employee_id: u64) -> GatewayResult<Vec<AttendanceRecord>> {
        self.api
            .get_json(&format!("/attendance/get?employeeId={employee_id}"))
            .await
    }

    #[tracing::instrument(skip(self, payload), fields(employee_id = payload.employee_id))]
    async fn punch_in(&self, payload: PunchPayload) -> GatewayResult<AttendanceRecord> {
        info!("Punching in");
        match self.api.post_json("/attendance/punchIn", &payload).await {
            Ok(record) => Ok(record),
            Err(e) => {
                error!("Punch in failed: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self, payload), fields(employee_id = payload.employee_id))]
    async fn punch_out(&self, payload: PunchPayload) -> GatewayResult<AttendanceRecord> {
        info!("Punching out");
        match self.api.post_json("/attendance/punchOut", &payload).await {
            Ok(record) => Ok(record),
            Err(e) => {
                error!("Punch out failed: {}", e);
                Err(e)
            }
        }
    }
}
