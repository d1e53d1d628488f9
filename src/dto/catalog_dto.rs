use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::catalog::{Addon, PackageTemplate, Role};

use super::EditorMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AddonForm {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[serde(skip)]
    pub initial: Option<Addon>,
}

impl AddonForm {
    pub fn mode(&self) -> EditorMode {
        if self.initial.is_some() {
            EditorMode::Update
        } else {
            EditorMode::Create
        }
    }

    pub fn from_addon(addon: Addon) -> Self {
        AddonForm {
            description: addon.description.clone(),
            unit: addon.unit.clone(),
            price: addon.price,
            initial: Some(addon),
        }
    }

    pub fn to_addon(&self, created_by: Option<String>) -> Addon {
        let initial = self.initial.as_ref();
        Addon {
            id: initial.and_then(|a| a.id),
            description: self.description.trim().to_string(),
            unit: self.unit.trim().to_string(),
            price: self.price,
            createdAt: initial.and_then(|a| a.createdAt.clone()),
            createdBy: initial.and_then(|a| a.createdBy.clone()).or(created_by),
        }
    }

    pub fn clear(&mut self) {
        *self = AddonForm::default();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PackageForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "At least one service is required"))]
    pub services: Vec<String>,
    pub deliverables: Vec<String>,
    pub addon_ids: Vec<u64>,
}

impl PackageForm {
    pub fn to_package(&self) -> PackageTemplate {
        PackageTemplate {
            id: None,
            title: self.title.trim().to_string(),
            price: self.price,
            services: self.services.clone(),
            deliverables: self.deliverables.clone(),
            addonIds: self.addon_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RoleForm {
    #[validate(length(min = 1, message = "Role name is required"))]
    pub role_name: String,
    #[serde(skip)]
    pub initial: Option<Role>,
}

impl RoleForm {
    pub fn mode(&self) -> EditorMode {
        if self.initial.is_some() {
            EditorMode::Update
        } else {
            EditorMode::Create
        }
    }
}
