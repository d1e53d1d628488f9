use validator::{Validate, ValidationErrors};

use crate::dto::booking_dto::{EventStepForm, PaymentStepForm};
use crate::model::booking::BookingPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Event,
    Payment,
}

/// Two-step booking wizard. Each step validates before the cursor advances;
/// nothing is sent until the final step completes, and the whole payload
/// goes out as one call. A failed submit keeps the entered step state; there
/// is no partial-submission recovery beyond that.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    lead_id: u64,
    step: WizardStep,
    pub event: EventStepForm,
    pub payment: PaymentStepForm,
}

impl BookingWizard {
    pub fn new(lead_id: u64) -> Self {
        BookingWizard {
            lead_id,
            step: WizardStep::Event,
            event: EventStepForm::default(),
            payment: PaymentStepForm::default(),
        }
    }

    pub fn lead_id(&self) -> u64 {
        self.lead_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Validates the current step and advances the cursor. On the last step
    /// this is a no-op beyond validation; use [`payload`](Self::payload) to
    /// collect the submission.
    pub fn next(&mut self) -> Result<WizardStep, ValidationErrors> {
        match self.step {
            WizardStep::Event => {
                self.event.validate()?;
                self.step = WizardStep::Payment;
            }
            WizardStep::Payment => {
                self.payment.validate()?;
            }
        }
        Ok(self.step)
    }

    /// Steps back without validation; entered values stay put.
    pub fn back(&mut self) {
        self.step = WizardStep::Event;
    }

    /// Validates both steps and assembles the single submission payload.
    pub fn payload(&self) -> Result<BookingPayload, ValidationErrors> {
        self.event.validate()?;
        self.payment.validate()?;
        let event_details = self
            .event
            .to_details()
            .expect("event step validated with a date");
        let payment_details = self
            .payment
            .to_details()
            .expect("payment step validated with a date");
        Ok(BookingPayload {
            leadId: self.lead_id,
            eventDetails: event_details,
            paymentDetails: payment_details,
        })
    }

    /// Post-success reset, back to a blank first step.
    pub fn reset(&mut self) {
        self.event = EventStepForm::default();
        self.payment = PaymentStepForm::default();
        self.step = WizardStep::Event;
    }
}
