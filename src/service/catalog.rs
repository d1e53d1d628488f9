use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::dto::catalog_dto::{AddonForm, PackageForm, RoleForm};
use crate::dto::EditorMode;
use crate::gateway::catalog_gateway::CatalogGateway;
use crate::model::catalog::{Addon, PackageTemplate, Role};
use crate::session::SessionContext;

use super::error::ServiceError;

/// Settings screens: add-ons, package templates and roles.
pub struct CatalogService {
    gateway: Arc<dyn CatalogGateway>,
    session: Arc<SessionContext>,
}

impl CatalogService {
    pub fn new(gateway: Arc<dyn CatalogGateway>, session: Arc<SessionContext>) -> Self {
        CatalogService { gateway, session }
    }

    pub async fn addons(&self) -> Result<Vec<Addon>, ServiceError> {
        Ok(self.gateway.addons().await?)
    }

    #[instrument(skip(self, form))]
    pub async fn save_addon(&self, form: &AddonForm) -> Result<Addon, ServiceError> {
        form.validate()?;
        let created_by = self.session.current().map(|u| u.username);
        let addon = form.to_addon(created_by);
        let saved = match form.mode() {
            EditorMode::Create => self.gateway.add_addon(addon).await?,
            EditorMode::Update => self.gateway.update_addon(addon).await?,
        };
        info!("Addon saved");
        Ok(saved)
    }

    pub async fn delete_addon(&self, id: u64) -> Result<(), ServiceError> {
        Ok(self.gateway.delete_addon(id).await?)
    }

    pub async fn packages(&self) -> Result<Vec<PackageTemplate>, ServiceError> {
        Ok(self.gateway.packages().await?)
    }

    pub async fn package(&self, id: u64) -> Result<PackageTemplate, ServiceError> {
        Ok(self.gateway.package(id).await?)
    }

    #[instrument(skip(self, form))]
    pub async fn create_package(&self, form: &PackageForm) -> Result<PackageTemplate, ServiceError> {
        form.validate()?;
        let created = self.gateway.create_package(form.to_package()).await?;
        info!("Package template created");
        Ok(created)
    }

    pub async fn delete_package(&self, id: u64) -> Result<(), ServiceError> {
        Ok(self.gateway.delete_package(id).await?)
    }

    pub async fn roles(&self) -> Result<Vec<Role>, ServiceError> {
        Ok(self.gateway.roles().await?)
    }

    #[instrument(skip(self, form))]
    pub async fn save_role(&self, form: &RoleForm) -> Result<Role, ServiceError> {
        form.validate()?;
        let saved = match &form.initial {
            None => self.gateway.add_role(form.role_name.trim()).await?,
            Some(initial) => {
                self.gateway
                    .update_role(Role {
                        id: initial.id,
                        roleName: form.role_name.trim().to_string(),
                    })
                    .await?
            }
        };
        info!("Role saved");
        Ok(saved)
    }
}
