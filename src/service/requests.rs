use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::request_dto::{LeaveForm, PermissionForm};
use crate::gateway::request_gateway::RequestGateway;
use crate::model::request::{LeaveRequest, RequestStatus};
use crate::session::SessionContext;

use super::error::ServiceError;

/// Leave and permission flows: raise for the logged-in employee, list, and
/// the approver-side status change.
pub struct RequestService {
    gateway: Arc<dyn RequestGateway>,
    session: Arc<SessionContext>,
}

impl RequestService {
    pub fn new(gateway: Arc<dyn RequestGateway>, session: Arc<SessionContext>) -> Self {
        RequestService { gateway, session }
    }

    #[instrument(skip(self, form))]
    pub async fn submit_leave(&self, form: &LeaveForm) -> Result<LeaveRequest, ServiceError> {
        form.validate()?;
        let user = self.session.require_user()?;
        let created = self.gateway.create(form.to_request(user.userId)).await?;
        info!("Leave requested successfully");
        Ok(created)
    }

    #[instrument(skip(self, form))]
    pub async fn submit_permission(
        &self,
        form: &PermissionForm,
    ) -> Result<LeaveRequest, ServiceError> {
        form.validate()?;
        let user = self.session.require_user()?;
        let created = self.gateway.create(form.to_request(user.userId)).await?;
        info!("Permission requested successfully");
        Ok(created)
    }

    /// The logged-in employee's own requests.
    pub async fn list_mine(&self) -> Result<Vec<LeaveRequest>, ServiceError> {
        let user = self.session.require_user()?;
        Ok(self.gateway.list(Some(user.userId)).await?)
    }

    /// Approver view: everyone's requests.
    pub async fn list_all(&self) -> Result<Vec<LeaveRequest>, ServiceError> {
        Ok(self.gateway.list(None).await?)
    }

    /// Approver action. The transition table is consulted first; approving
    /// an already-decided request never reaches the wire.
    #[instrument(skip(self, request), fields(id = ?request.id))]
    pub async fn decide(
        &self,
        request: &LeaveRequest,
        decision: RequestStatus,
    ) -> Result<LeaveRequest, ServiceError> {
        request.status.ensure_transition(decision)?;
        let id = request
            .id
            .ok_or_else(|| ServiceError::InvalidInput("Request has no id".to_string()))?;
        let updated = self.gateway.update_status(id, decision).await?;
        info!("Request {} {}", id, decision.as_str());
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        Ok(self.gateway.delete(id).await?)
    }
}
