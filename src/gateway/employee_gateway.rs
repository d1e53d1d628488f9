use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::model::employee::{Attachment, Employee};

use super::error::{GatewayError, GatewayResult};
use super::http::ApiClient;

/// A file picked in the editor, not yet uploaded.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    fn into_form(self, employee_id: u64) -> Result<Form, GatewayError> {
        let part = Part::bytes(self.content)
            .file_name(self.filename)
            .mime_str(&self.content_type)
            .map_err(|e| GatewayError::generic(e))?;
        Ok(Form::new()
            .part("file", part)
            .text("employeeId", employee_id.to_string()))
    }
}

#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<Employee>>;
    async fn get(&self, id: u64) -> GatewayResult<Employee>;
    async fn create(&self, employee: Employee) -> GatewayResult<Employee>;
    async fn update(&self, id: u64, employee: Employee) -> GatewayResult<Employee>;
    async fn delete(&self, id: u64) -> GatewayResult<()>;
    /// Uploads return the stored base64 payload for inline preview.
    async fn upload_profile_image(&self, employee_id: u64, file: UploadFile)
        -> GatewayResult<Attachment>;
    async fn upload_id_document(&self, employee_id: u64, file: UploadFile)
        -> GatewayResult<Attachment>;
}

pub struct HttpEmployeeGateway {
    api: Arc<ApiClient>,
}

impl HttpEmployeeGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpEmployeeGateway { api }
    }
}

#[async_trait]
impl EmployeeGateway for HttpEmployeeGateway {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> GatewayResult<Vec<Employee>> {
        self.api.get_json("/routes/employees").await
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn get(&self, id: u64) -> GatewayResult<Employee> {
        self.api.get_json(&format!("/routes/employees/{id}")).await
    }

    #[tracing::instrument(skip(self, employee), fields(email = %employee.email))]
    async fn create(&self, employee: Employee) -> GatewayResult<Employee> {
        info!("Creating new employee");
        match self.api.post_json("/routes/addEmployee", &employee).await {
            Ok(created) => {
                info!("Employee created successfully");
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create employee: {}", e);
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self, employee), fields(id = id))]
    async fn update(&self, id: u64, employee: Employee) -> GatewayResult<Employee> {
        info!("Updating employee");
        self.api
            .put_json(&format!("/routes/employees/{id}"), &employee)
            .await
    }

    #[tracing::instrument(skip(self), fields(id = id))]
    async fn delete(&self, id: u64) -> GatewayResult<()> {
        self.api.delete_ack(&format!("/routes/employees/{id}")).await
    }

    #[tracing::instrument(skip(self, file), fields(employee_id = employee_id, filename = %file.filename))]
    async fn upload_profile_image(
        &self,
        employee_id: u64,
        file: UploadFile,
    ) -> GatewayResult<Attachment> {
        let form = file.into_form(employee_id)?;
        self.api
            .post_multipart("/routes/uploadProfileImage", form)
            .await
    }

    #[tracing::instrument(skip(self, file), fields(employee_id = employee_id, filename = %file.filename))]
    async fn upload_id_document(
        &self,
        employee_id: u64,
        file: UploadFile,
    ) -> GatewayResult<Attachment> {
        let form = file.into_form(employee_id)?;
        self.api
            .post_multipart("/routes/uploadAadharCard", form)
            .await
    }
}
