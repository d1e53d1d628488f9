use std::sync::Arc;

use tracing::{info, instrument};

use crate::gateway::attendance_gateway::AttendanceGateway;
use crate::model::attendance::{AttendanceRecord, PunchPayload};
use crate::session::SessionContext;

use super::error::ServiceError;

/// Attendance flows for the logged-in employee. Every call stamps the
/// session identity; punching without a session never reaches the wire.
pub struct AttendanceService {
    gateway: Arc<dyn AttendanceGateway>,
    session: Arc<SessionContext>,
}

impl AttendanceService {
    pub fn new(gateway: Arc<dyn AttendanceGateway>, session: Arc<SessionContext>) -> Self {
        AttendanceService { gateway, session }
    }

    #[instrument(skip(self))]
    pub async fn punch_in(&self) -> Result<AttendanceRecord, ServiceError> {
        let user = self.session.require_user()?;
        let record = self
            .gateway
            .punch_in(PunchPayload {
                employee_id: user.userId,
                punch_in_or_out: true,
            })
            .await?;
        info!("You have punched in successfully");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn punch_out(&self) -> Result<AttendanceRecord, ServiceError> {
        let user = self.session.require_user()?;
        let record = self
            .gateway
            .punch_out(PunchPayload {
                employee_id: user.userId,
                punch_in_or_out: false,
            })
            .await?;
        info!("You have punched out successfully: {}", record.worked());
        Ok(record)
    }

    pub async fn history(&self) -> Result<Vec<AttendanceRecord>, ServiceError> {
        let user = self.session.require_user()?;
        Ok(self.gateway.history(user.userId).await?)
    }
}
