use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Online,
    Offline,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::Online => f.write_str("online"),
            PaymentType::Offline => f.write_str("offline"),
        }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetails {
    pub eventName: String,
    pub dateTime: DateTime<Utc>,
    pub highlights: Option<String>,
    pub notes: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub paymentType: PaymentType,
    pub amount: f64,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Booking submission: both wizard steps travel as one payload. The backend
/// creates the event and the payment together and flips the lead to booked.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPayload {
    pub leadId: u64,
    pub eventDetails: EventDetails,
    pub paymentDetails: PaymentDetails,
}
