use serde::{Deserialize, Serialize};

use super::InvalidTransition;

/// Sign-off stage of a quotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Draft,
    PendingApproval,
    SentToClient,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "draft",
            ApprovalStatus::PendingApproval => "pending_approval",
            ApprovalStatus::SentToClient => "sent_to_client",
        }
    }

    pub fn allowed_transitions(&self) -> &'static [ApprovalStatus] {
        match self {
            ApprovalStatus::Draft => &[ApprovalStatus::PendingApproval],
            ApprovalStatus::PendingApproval => &[ApprovalStatus::SentToClient],
            ApprovalStatus::SentToClient => &[],
        }
    }

    pub fn ensure_transition(&self, next: ApprovalStatus) -> Result<(), InvalidTransition> {
        if self.allowed_transitions().contains(&next) {
            Ok(())
        } else {
            Err(InvalidTransition {
                entity: "quotation",
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

/// One priced line submitted with a quotation.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageLine {
    pub serviceName: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
}

/// The whole line-item collection for a booked lead, sent as one create.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationSubmission {
    pub leadId: u64,
    pub eventId: u64,
    pub packages: Vec<PackageLine>,
}

/// A stored quotation line as the read endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationPackageRow {
    pub quotation_package_id: u64,
    pub service_name: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
    pub created_at: Option<String>,
}

/// Quotation pending sign-off, as listed on the approval screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalRow {
    pub lead_id: u64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub wedding_type: Option<String>,
    pub package_name: Option<String>,
    pub wedding_location: Option<String>,
    pub event_id: u64,
    pub event_name: String,
    pub event_date: String,
    pub payment_amount: Option<String>,
    pub payment_type: Option<String>,
    pub total_package_amount: Option<String>,
    pub approval_status: ApprovalStatus,
    pub packages: Vec<QuotationPackageRow>,
}

/// Read-only aggregation served to the invoice screen: lead, event, payment
/// and quotation lines joined into one row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub lead_id: u64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub wedding_type: Option<String>,
    pub wedding_location: Option<String>,
    pub event_id: u64,
    pub event_name: String,
    pub date_time: String,
    pub highlights: Option<String>,
    pub event_notes: Option<String>,
    pub payment_id: Option<u64>,
    pub payment_type: Option<String>,
    pub payment_amount: Option<String>,
    pub payment_date: Option<String>,
    pub payment_notes: Option<String>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    pub packages: Vec<QuotationPackageRow>,
    pub total_package_amount: Option<String>,
}

impl InvoiceRow {
    /// The quotation total is derived, never trusted from storage.
    pub fn computed_total(&self) -> f64 {
        self.packages
            .iter()
            .map(|p| f64::from(p.quantity) * p.price)
            .sum()
    }
}

/// Payload for `/quotation/send-approval`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendApprovalRequest {
    pub lead_id: u64,
    pub event_id: u64,
}
