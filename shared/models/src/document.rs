use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hazard::HazardTable;

/// An uploaded safety-data-sheet document and its processing lifecycle.
/// Lives only in the in-memory store; nothing is persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdsDocument {
    pub id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub file_size: usize,
    pub upload_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
    pub status: ProcessingStatus,
    pub result: Option<HazardTable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingStatus {
    Uploaded,
    Processing,
    Extracted,
    Failed,
}

impl SdsDocument {
    pub fn new(file_name: impl Into<String>, file_type: impl Into<String>, file_size: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            file_type: file_type.into(),
            file_size,
            upload_date: Utc::now(),
            processed_date: None,
            status: ProcessingStatus::Uploaded,
            result: None,
        }
    }

    /// Record a finished extraction run.
    pub fn complete(&mut self, result: HazardTable) {
        self.processed_date = Some(Utc::now());
        self.status = ProcessingStatus::Extracted;
        self.result = Some(result);
    }

    pub fn fail(&mut self) {
        self.processed_date = Some(Utc::now());
        self.status = ProcessingStatus::Failed;
    }
}
