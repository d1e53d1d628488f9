use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::InvalidTransition;

/// Lifecycle stage of a lead. Serialized to the backend's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Booked,
    Lost,
    #[serde(rename = "Awaiting Reply")]
    AwaitingReply,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Booked => "Booked",
            LeadStatus::Lost => "Lost",
            LeadStatus::AwaitingReply => "Awaiting Reply",
            LeadStatus::ProposalSent => "Proposal Sent",
        }
    }

    /// Allowed next states. Booked is terminal; a lost lead can only be
    /// re-opened into Contacted.
    pub fn allowed_transitions(&self) -> &'static [LeadStatus] {
        use LeadStatus::*;
        match self {
            New => &[Contacted, AwaitingReply, Lost],
            Contacted => &[AwaitingReply, ProposalSent, Booked, Lost],
            AwaitingReply => &[Contacted, ProposalSent, Booked, Lost],
            ProposalSent => &[Booked, AwaitingReply, Lost],
            Booked => &[],
            Lost => &[Contacted],
        }
    }

    pub fn can_transition_to(&self, next: LeadStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn ensure_transition(&self, next: LeadStatus) -> Result<(), InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(InvalidTransition {
                entity: "lead",
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prospective customer as the backend stores it. Field names follow the
/// wire format. Leads are never hard-deleted; downstream stages only mutate
/// `status`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Option<u64>,
    pub firstName: String,
    pub lastName: String,
    pub email: String,
    pub mobile: String,
    pub secondaryMobile: Option<String>,
    pub doorNo: Option<String>,
    pub street: Option<String>,
    pub city: String,
    pub district: Option<String>,
    pub state: String,
    pub country: String,
    pub eventType: String,
    pub leadSource: String,
    pub budget: Option<f64>,
    pub eventDate: Option<NaiveDate>,
    pub advance: Option<f64>,
    pub paymentDate: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    pub createdBy: Option<String>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstName, self.lastName)
    }
}

/// Row shape served by `/leads/booked`: the lead joined with its confirmed
/// event and payment, ready for the quotation screen.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedLead {
    pub leadId: u64,
    pub eventId: u64,
    pub firstName: String,
    pub lastName: String,
    pub email: String,
    pub mobile: String,
    pub eventType: String,
    pub weddingLocation: Option<String>,
    pub eventName: String,
    pub eventDateTime: String,
    pub paymentAmount: f64,
    pub paymentType: String,
}

impl BookedLead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstName, self.lastName)
    }
}
