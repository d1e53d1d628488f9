use serde::{Deserialize, Serialize};

/// Settings catalog: a priced add-on referenced by id from package templates.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addon {
    pub id: Option<u64>,
    pub description: String,
    pub unit: String,
    pub price: f64,
    pub createdAt: Option<String>,
    pub createdBy: Option<String>,
}

/// Settings catalog: a reusable package offer with its service and
/// deliverable lists and the add-ons bundled into it.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageTemplate {
    pub id: Option<u64>,
    pub title: String,
    pub price: f64,
    pub services: Vec<String>,
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub addonIds: Vec<u64>,
}

/// Lookup used to tag employees.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<u64>,
    pub roleName: String,
}
