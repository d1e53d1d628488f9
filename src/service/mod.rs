pub mod attendance;
pub mod booking_wizard;
pub mod catalog;
pub mod employees;
pub mod error;
pub mod import;
pub mod lifecycle;
pub mod quotation_builder;
pub mod requests;

pub use attendance::AttendanceService;
pub use booking_wizard::{BookingWizard, WizardStep};
pub use catalog::CatalogService;
pub use employees::{BulkOutcome, EmployeeService};
pub use error::ServiceError;
pub use import::LeadImportSession;
pub use lifecycle::LeadLifecycleService;
pub use quotation_builder::{LineForm, QuotationBuilder, QuotationLine};
pub use requests::RequestService;
