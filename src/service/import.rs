use std::io::Read;

use tracing::{info, instrument};

use crate::util::spreadsheet::{read_rows, LeadImportRow};

use super::error::ServiceError;
use super::lifecycle::LeadLifecycleService;

/// One bulk-upload session: parse a spreadsheet into a preview set, then
/// submit the whole batch. A successful save clears the set so the panel
/// can close empty.
#[derive(Debug, Default)]
pub struct LeadImportSession {
    rows: Vec<LeadImportRow>,
}

impl LeadImportSession {
    pub fn new() -> Self {
        LeadImportSession::default()
    }

    /// Parses the uploaded sheet, replacing any previous preview.
    #[instrument(skip(self, reader))]
    pub fn load<R: Read>(&mut self, reader: R) -> Result<usize, ServiceError> {
        let rows = read_rows(reader)
            .map_err(|e| ServiceError::InvalidInput(format!("Could not read spreadsheet: {e}")))?;
        info!("Parsed {} lead rows", rows.len());
        self.rows = rows;
        Ok(self.rows.len())
    }

    pub fn rows(&self) -> &[LeadImportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Submits the batch; the preview clears only after the backend says
    /// yes, so a failed save leaves the table for correction.
    pub async fn save(&mut self, lifecycle: &LeadLifecycleService) -> Result<usize, ServiceError> {
        let count = self.rows.len();
        lifecycle.bulk_update(&self.rows).await?;
        self.rows.clear();
        Ok(count)
    }
}
