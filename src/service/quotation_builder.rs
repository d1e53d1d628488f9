use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::model::quotation::{PackageLine, QuotationSubmission};

/// Input form for one package line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LineForm {
    #[validate(length(min = 1, message = "Service Name is required"))]
    pub service_name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// A line held in the builder, keyed by a stable client-side id.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationLine {
    pub id: u64,
    pub service_name: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
}

/// In-memory line-item collection for one booked lead. Edits happen in
/// place by id, keeping the visible order stable; ids are never reused
/// within a builder's lifetime.
#[derive(Debug, Default)]
pub struct QuotationBuilder {
    next_id: u64,
    lines: Vec<QuotationLine>,
}

impl QuotationBuilder {
    pub fn new() -> Self {
        QuotationBuilder {
            next_id: 1,
            lines: Vec::new(),
        }
    }

    /// Validates and appends a line, returning its id.
    pub fn add(&mut self, form: &LineForm) -> Result<u64, ValidationErrors> {
        form.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(QuotationLine {
            id,
            service_name: form.service_name.clone(),
            description: form.description.clone(),
            quantity: form.quantity,
            price: form.price,
        });
        Ok(id)
    }

    /// In-place update by id. Returns false when the id is unknown.
    pub fn update(&mut self, id: u64, form: &LineForm) -> Result<bool, ValidationErrors> {
        form.validate()?;
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.service_name = form.service_name.clone();
                line.description = form.description.clone();
                line.quantity = form.quantity;
                line.price = form.price;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    pub fn line(&self, id: u64) -> Option<&QuotationLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn lines(&self) -> &[QuotationLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derived total: Σ quantity × price. Never stored.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| f64::from(line.quantity) * line.price)
            .sum()
    }

    pub fn to_submission(&self, lead_id: u64, event_id: u64) -> QuotationSubmission {
        QuotationSubmission {
            leadId: lead_id,
            eventId: event_id,
            packages: self
                .lines
                .iter()
                .map(|line| PackageLine {
                    serviceName: line.service_name.clone(),
                    description: line.description.clone(),
                    quantity: line.quantity,
                    price: line.price,
                })
                .collect(),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
