use std::sync::Arc;

use tracing::info;

use crate::config::{ApiConfig, SessionConfig};
use crate::gateway::attendance_gateway::{AttendanceGateway, HttpAttendanceGateway};
use crate::gateway::catalog_gateway::{CatalogGateway, HttpCatalogGateway};
use crate::gateway::employee_gateway::{EmployeeGateway, HttpEmployeeGateway};
use crate::gateway::lead_gateway::{HttpLeadGateway, LeadGateway};
use crate::gateway::quotation_gateway::{HttpQuotationGateway, QuotationGateway};
use crate::gateway::request_gateway::{HttpRequestGateway, RequestGateway};
use crate::gateway::ApiClient;
use crate::service::{
    AttendanceService, CatalogService, EmployeeService, LeadLifecycleService, RequestService,
};
use crate::session::{SessionContext, SessionStore};

/// The wired-up console: one shared HTTP client, one gateway per entity,
/// the services on top and the session context they all consult.
pub struct App {
    pub session: Arc<SessionContext>,
    pub leads: Arc<dyn LeadGateway>,
    pub employees: Arc<dyn EmployeeGateway>,
    pub catalog_gateway: Arc<dyn CatalogGateway>,
    pub attendance_gateway: Arc<dyn AttendanceGateway>,
    pub requests_gateway: Arc<dyn RequestGateway>,
    pub quotations: Arc<dyn QuotationGateway>,
    pub lifecycle: LeadLifecycleService,
    pub employee_service: EmployeeService,
    pub attendance: AttendanceService,
    pub requests: RequestService,
    pub catalog: CatalogService,
}

impl App {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let api_config = ApiConfig::from_env()?;
        let session_config = SessionConfig::from_env()?;
        Self::with_config(&api_config, &session_config)
    }

    /// Builds the app against explicit configs; tests use this to point the
    /// gateways at a throwaway backend.
    pub fn with_config(
        api_config: &ApiConfig,
        session_config: &SessionConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let api = Arc::new(ApiClient::new(api_config)?);
        info!("Console targeting {}", api.base_url());

        let session = Arc::new(SessionContext::init(SessionStore::new(session_config))?);

        let leads: Arc<dyn LeadGateway> = Arc::new(HttpLeadGateway::new(api.clone()));
        let employees: Arc<dyn EmployeeGateway> = Arc::new(HttpEmployeeGateway::new(api.clone()));
        let catalog_gateway: Arc<dyn CatalogGateway> =
            Arc::new(HttpCatalogGateway::new(api.clone()));
        let attendance_gateway: Arc<dyn AttendanceGateway> =
            Arc::new(HttpAttendanceGateway::new(api.clone()));
        let requests_gateway: Arc<dyn RequestGateway> =
            Arc::new(HttpRequestGateway::new(api.clone()));
        let quotations: Arc<dyn QuotationGateway> = Arc::new(HttpQuotationGateway::new(api));

        let lifecycle =
            LeadLifecycleService::new(leads.clone(), quotations.clone(), session.clone());
        let employee_service = EmployeeService::new(employees.clone(), session.clone());
        let attendance = AttendanceService::new(attendance_gateway.clone(), session.clone());
        let requests = RequestService::new(requests_gateway.clone(), session.clone());
        let catalog = CatalogService::new(catalog_gateway.clone(), session.clone());

        Ok(App {
            session,
            leads,
            employees,
            catalog_gateway,
            attendance_gateway,
            requests_gateway,
            quotations,
            lifecycle,
            employee_service,
            attendance,
            requests,
            catalog,
        })
    }
}
