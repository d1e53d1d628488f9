use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::booking::{EventDetails, PaymentDetails, PaymentType};

/// First wizard step: the event being booked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EventStepForm {
    #[validate(length(min = 1, message = "Event Name is required"))]
    pub event_name: String,
    #[validate(required(message = "Event Date & Time is required"))]
    pub date_time: Option<DateTime<Utc>>,
    pub highlights: Option<String>,
    pub notes: Option<String>,
}

impl EventStepForm {
    pub fn to_details(&self) -> Option<EventDetails> {
        Some(EventDetails {
            eventName: self.event_name.clone(),
            dateTime: self.date_time?,
            highlights: self.highlights.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// Second wizard step: the advance payment confirming the booking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentStepForm {
    pub payment_type: PaymentType,
    #[validate(range(min = 0.01, message = "Amount must be greater than 0"))]
    pub amount: f64,
    #[validate(required(message = "Payment Date is required"))]
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Default for PaymentStepForm {
    fn default() -> Self {
        PaymentStepForm {
            payment_type: PaymentType::Online,
            amount: 0.0,
            date: None,
            notes: None,
        }
    }
}

impl PaymentStepForm {
    pub fn to_details(&self) -> Option<PaymentDetails> {
        Some(PaymentDetails {
            paymentType: self.payment_type,
            amount: self.amount,
            date: self.date?,
            notes: self.notes.clone(),
        })
    }
}
