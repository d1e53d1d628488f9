use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::model::catalog::{Addon, PackageTemplate, Role};

use super::error::GatewayResult;
use super::http::ApiClient;

/// Settings catalog: add-ons, package templates and roles share one gateway.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn addons(&self) -> GatewayResult<Vec<Addon>>;
    async fn add_addon(&self, addon: Addon) -> GatewayResult<Addon>;
    async fn update_addon(&self, addon: Addon) -> GatewayResult<Addon>;
    async fn delete_addon(&self, id: u64) -> GatewayResult<()>;

    async fn packages(&self) -> GatewayResult<Vec<PackageTemplate>>;
    async fn package(&self, id: u64) -> GatewayResult<PackageTemplate>;
    async fn create_package(&self, package: PackageTemplate) -> GatewayResult<PackageTemplate>;
    async fn delete_package(&self, id: u64) -> GatewayResult<()>;

    async fn roles(&self) -> GatewayResult<Vec<Role>>;
    async fn add_role(&self, name: &str) -> GatewayResult<Role>;
    async fn update_role(&self, role: Role) -> GatewayResult<Role>;
}

pub struct HttpCatalogGateway {
    api: Arc<ApiClient>,
}

impl HttpCatalogGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        HttpCatalogGateway { api }
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn addons(&self) -> GatewayResult<Vec<Addon>> {
        self.api.get_json("/addons/list").await
    }

    async fn add_addon(&self, addon: Addon) -> GatewayResult<Addon> {
        info!("Adding addon");
        self.api.post_json("/addons/add", &addon).await
    }

    async fn update_addon(&self, addon: Addon) -> GatewayResult<Addon> {
        self.api.put_json("/addons/update", &addon).await
    }

    async fn delete_addon(&self, id: u64) -> GatewayResult<()> {
        // The endpoint takes the id in the request body, not the path.
        self.api
            .delete_json_ack("/addons/delete", &json!({ "id": id }))
            .await
    }

    async fn packages(&self) -> GatewayResult<Vec<PackageTemplate>> {
        self.api.get_json("/packages/list").await
    }

    async fn package(&self, id: u64) -> GatewayResult<PackageTemplate> {
        self.api.get_json(&format!("/packages/{id}")).await
    }

    async fn create_package(&self, package: PackageTemplate) -> GatewayResult<PackageTemplate> {
        info!("Creating package template");
        self.api.post_json("/packages/create", &package).await
    }

    async fn delete_package(&self, id: u64) -> GatewayResult<()> {
        self.api.delete_ack(&format!("/packages/delete/{id}")).await
    }

    async fn roles(&self) -> GatewayResult<Vec<Role>> {
        self.api.get_json("/roles/list").await
    }

    async fn add_role(&self, name: &str) -> GatewayResult<Role> {
        self.api
            .post_json("/roles/add", &json!({ "roleName": name }))
            .await
    }

    async fn update_role(&self, role: Role) -> GatewayResult<Role> {
        self.api.put_json("/roles/update", &role).await
    }
}
