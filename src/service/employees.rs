use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::dto::employee_dto::EmployeeForm;
use crate::dto::EditorMode;
use crate::gateway::employee_gateway::{EmployeeGateway, UploadFile};
use crate::model::employee::{Attachment, Employee};
use crate::session::SessionContext;

use super::error::ServiceError;

/// Result of a per-row bulk operation. Earlier successes are not rolled
/// back when a later row fails; the failures travel back for display.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<(u64, String)>,
}

impl BulkOutcome {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct EmployeeService {
    gateway: Arc<dyn EmployeeGateway>,
    session: Arc<SessionContext>,
}

impl EmployeeService {
    pub fn new(gateway: Arc<dyn EmployeeGateway>, session: Arc<SessionContext>) -> Self {
        EmployeeService { gateway, session }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.gateway.list().await?)
    }

    pub async fn get(&self, id: u64) -> Result<Employee, ServiceError> {
        Ok(self.gateway.get(id).await?)
    }

    /// Editor submit: create or update depending on the form's mode.
    #[instrument(skip(self, form))]
    pub async fn save(&self, form: &EmployeeForm) -> Result<Employee, ServiceError> {
        form.validate()?;
        let created_by = self.session.current().map(|u| u.username);
        let employee = form.to_employee(created_by);
        let saved = match form.mode() {
            EditorMode::Create => self.gateway.create(employee).await?,
            EditorMode::Update => {
                let id = employee.id.ok_or_else(|| {
                    ServiceError::InvalidInput("Employee has no id".to_string())
                })?;
                self.gateway.update(id, employee).await?
            }
        };
        info!("Employee saved successfully");
        Ok(saved)
    }

    /// Deletes each selected row with its own call. One failure does not
    /// stop the rest and nothing is rolled back.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn delete_many(&self, ids: &[u64]) -> Result<BulkOutcome, ServiceError> {
        if ids.is_empty() {
            return Err(ServiceError::InvalidInput(
                "No employees selected".to_string(),
            ));
        }
        let mut outcome = BulkOutcome {
            attempted: ids.len(),
            ..BulkOutcome::default()
        };
        for &id in ids {
            match self.gateway.delete(id).await {
                Ok(()) => outcome.succeeded += 1,
                Err(e) => {
                    error!("Failed to delete employee {}: {}", id, e);
                    outcome.failures.push((id, e.to_string()));
                }
            }
        }
        if !outcome.all_ok() {
            warn!(
                "Deleted {} of {} employees",
                outcome.succeeded, outcome.attempted
            );
        }
        Ok(outcome)
    }

    pub async fn upload_profile_image(
        &self,
        employee_id: u64,
        file: UploadFile,
    ) -> Result<Attachment, ServiceError> {
        Ok(self.gateway.upload_profile_image(employee_id, file).await?)
    }

    pub async fn upload_id_document(
        &self,
        employee_id: u64,
        file: UploadFile,
    ) -> Result<Attachment, ServiceError> {
        Ok(self.gateway.upload_id_document(employee_id, file).await?)
    }
}
