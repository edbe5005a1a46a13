use serde::{Deserialize, Serialize};

/// Outcome of one bulk upload batch.
///
/// `successful_uploads + failed_uploads == total_questions` once a batch runs
/// to completion; the batch-level abort paths (missing author, unresolvable
/// headers) report zero for all three counts and carry the fatal message in
/// `errors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    pub total_questions: usize,
    pub successful_uploads: usize,
    pub failed_uploads: usize,
    pub errors: Vec<String>,
    pub success_messages: Vec<String>,
}

impl BulkReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the zero-row report for a batch-level abort.
    pub fn aborted(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// True when at least one row was rejected or a fatal error was recorded.
    pub fn has_errors(&self) -> bool {
        self.failed_uploads > 0 || !self.errors.is_empty()
    }

    /// True when every attempted row was persisted and nothing failed.
    pub fn all_succeeded(&self) -> bool {
        !self.has_errors() && self.successful_uploads == self.total_questions
    }
}
