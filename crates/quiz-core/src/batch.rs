//! Batch coordination for bulk uploads.
//!
//! One call to [`BulkUploader::upload`] processes one payload from one
//! author, strictly in input order. The author lookup and header resolution
//! are batch-level preconditions; everything after that is row-level, and a
//! bad row (or a store failure while saving it) is recorded and skipped
//! rather than aborting the batch.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use quiz_ingest::{ResolvedHeaders, read_csv_table, resolve_headers};
use quiz_model::{AuthorId, BulkReport, Field};
use quiz_validate::validate_row;

use crate::store::{AccountStore, QuestionStore};

/// Longest question-text preview carried in a success message.
const PREVIEW_LIMIT: usize = 50;

pub struct BulkUploader<'a> {
    accounts: &'a dyn AccountStore,
    questions: &'a dyn QuestionStore,
}

impl<'a> BulkUploader<'a> {
    pub fn new(accounts: &'a dyn AccountStore, questions: &'a dyn QuestionStore) -> Self {
        Self { accounts, questions }
    }

    /// Process one CSV payload on behalf of `author_id`.
    ///
    /// Always returns a report: batch-level failures (unknown author,
    /// unreadable payload, unresolvable headers) come back with zero totals
    /// and the fatal message in `errors`, before any row is read.
    pub fn upload(&self, input: &str, author_id: AuthorId) -> BulkReport {
        let author = match self.accounts.find_author(author_id) {
            Ok(Some(author)) => author,
            Ok(None) => {
                warn!(%author_id, "bulk upload rejected: unknown author");
                return BulkReport::aborted(vec![format!("Admin not found with ID: {author_id}")]);
            }
            Err(error) => {
                warn!(%author_id, %error, "bulk upload rejected: author lookup failed");
                return BulkReport::aborted(vec![format!(
                    "Error looking up admin {author_id}: {error}"
                )]);
            }
        };

        let table = match read_csv_table(input) {
            Ok(table) => table,
            Err(error) => {
                warn!(%error, "bulk upload rejected: unreadable payload");
                return BulkReport::aborted(vec![format!("Error reading file: {error}")]);
            }
        };

        let resolved = resolve_headers(&table.headers);
        if !resolved.is_complete() {
            let missing: Vec<&str> = resolved
                .missing_fields()
                .iter()
                .map(Field::as_str)
                .collect();
            warn!(missing = ?missing, "bulk upload rejected: incomplete headers");
            return BulkReport::aborted(vec![
                format!("Missing required columns: {}", missing.join(", ")),
                format!("Available columns: {}", table.headers.join(", ")),
            ]);
        }

        let mut report = BulkReport::new();
        let mut successful = 0usize;
        let mut failed = 0usize;
        for (idx, row) in table.rows.iter().enumerate() {
            // The header row occupies line 1, so the first data row is line 2.
            let line_number = idx + 2;
            match self.process_row(row, &resolved, author.id) {
                Ok(question_text) => {
                    successful += 1;
                    debug!(line = line_number, "row persisted");
                    report.success_messages.push(format!(
                        "Line {line_number}: \"{}\" uploaded successfully",
                        preview(&question_text)
                    ));
                }
                Err(error) => {
                    failed += 1;
                    warn!(line = line_number, %error, "row rejected");
                    // Alternate formatting keeps the cause chain, so a store
                    // failure reads "failed to save question: disk full".
                    report.errors.push(format!("Line {line_number}: {error:#}"));
                }
            }
        }

        report.total_questions = successful + failed;
        report.successful_uploads = successful;
        report.failed_uploads = failed;
        info!(
            total = report.total_questions,
            successful, failed, "bulk upload finished"
        );
        report
    }

    /// Validate and persist a single row. Any error returned here is scoped
    /// to this row; the caller turns it into a line-numbered message.
    fn process_row(
        &self,
        row: &[String],
        headers: &ResolvedHeaders,
        author_id: AuthorId,
    ) -> Result<String> {
        let question = validate_row(row, headers, author_id)?;
        let question_text = question.question.clone();
        let id = self
            .questions
            .save(question)
            .context("failed to save question")?;
        self.accounts
            .increment_question_count(author_id)
            .context("failed to update author question count")?;
        debug!(%id, "question saved");
        Ok(question_text)
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_LIMIT {
        let head: String = text.chars().take(PREVIEW_LIMIT - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
