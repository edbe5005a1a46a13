//! Batch coordinator integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};

use quiz_core::{AccountStore, BulkUploader, MemoryStore, QuestionStore};
use quiz_model::{AuthorId, AuthorRef, NewQuestion, QuestionId};

fn seeded_store() -> MemoryStore {
    MemoryStore::with_author(AuthorRef {
        id: AuthorId(1),
        display_name: "Ada".to_string(),
        total_questions_created: 0,
    })
}

#[test]
fn mixed_batch_reports_per_line_outcomes() {
    // Row 1 valid, row 2 has an unmatched answer, row 3 has no question text.
    let payload = "\
question,subject,questionType,choices,correctAnswers
What is the capital of France?,Geography,single,A. Paris;B. London,A. Paris
What is 2 + 2?,Mathematics,single,A. 3;B. 4,C. 5
,Science,single,A;B,A
";
    let store = seeded_store();
    let report = BulkUploader::new(&store, &store).upload(payload, AuthorId(1));

    assert_eq!(report.total_questions, 3);
    assert_eq!(report.successful_uploads, 1);
    assert_eq!(report.failed_uploads, 2);
    assert_eq!(
        report.successful_uploads + report.failed_uploads,
        report.total_questions
    );
    assert!(report.errors[0].starts_with("Line 3:"));
    assert!(report.errors[0].contains("C. 5"));
    assert!(report.errors[1].starts_with("Line 4:"));
    assert!(report.errors[1].contains("Question text is empty"));
    assert_eq!(store.question_count(), 1);
}

#[test]
fn success_messages_carry_truncated_previews() {
    let long_question = "Q".repeat(80);
    let payload = format!(
        "question,subject,questionType,choices,correctAnswers\n{long_question},S,single,A;B,A\n"
    );
    let store = seeded_store();
    let report = BulkUploader::new(&store, &store).upload(&payload, AuthorId(1));
    assert_eq!(report.successful_uploads, 1);
    let message = &report.success_messages[0];
    assert!(message.starts_with("Line 2:"));
    assert!(message.contains("..."));
}

#[test]
fn unknown_author_aborts_before_any_row() {
    struct UntouchedStore(AtomicUsize);
    impl QuestionStore for UntouchedStore {
        fn save(&self, _question: NewQuestion) -> Result<QuestionId> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(QuestionId(1))
        }
    }

    let payload = "question,subject,questionType,choices,correctAnswers\nQ,S,single,A;B,A\n";
    let accounts = MemoryStore::new();
    let questions = UntouchedStore(AtomicUsize::new(0));
    let report = BulkUploader::new(&accounts, &questions).upload(payload, AuthorId(9));

    assert_eq!(report.total_questions, 0);
    assert_eq!(report.successful_uploads, 0);
    assert_eq!(report.failed_uploads, 0);
    assert_eq!(report.errors, vec!["Admin not found with ID: 9".to_string()]);
    assert_eq!(questions.0.load(Ordering::SeqCst), 0);
}

#[test]
fn incomplete_headers_abort_with_both_messages() {
    let payload = "question,subject\nQ,S\n";
    let store = seeded_store();
    let report = BulkUploader::new(&store, &store).upload(payload, AuthorId(1));

    assert_eq!(report.total_questions, 0);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(
        report.errors[0],
        "Missing required columns: question_type, choices, correct_answers"
    );
    assert_eq!(report.errors[1], "Available columns: question, subject");
    assert_eq!(store.question_count(), 0);
}

#[test]
fn save_failure_is_a_row_error_and_the_batch_continues() {
    struct FlakyStore {
        calls: AtomicUsize,
    }
    impl QuestionStore for FlakyStore {
        fn save(&self, _question: NewQuestion) -> Result<QuestionId> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                Err(anyhow!("disk full"))
            } else {
                Ok(QuestionId(call as i64))
            }
        }
    }

    let payload = "\
question,subject,questionType,choices,correctAnswers
First,S,single,A;B,A
Second,S,single,A;B,B
";
    let accounts = seeded_store();
    let questions = FlakyStore {
        calls: AtomicUsize::new(0),
    };
    let report = BulkUploader::new(&accounts, &questions).upload(payload, AuthorId(1));

    assert_eq!(report.total_questions, 2);
    assert_eq!(report.successful_uploads, 1);
    assert_eq!(report.failed_uploads, 1);
    assert!(report.errors[0].starts_with("Line 2:"));
    assert!(report.errors[0].contains("failed to save question"));
    // The store's own failure reason must reach the report.
    assert!(report.errors[0].contains("disk full"));
}

#[test]
fn author_counter_advances_per_saved_question() {
    let payload = "\
question,subject,questionType,choices,correctAnswers
First,S,single,A;B,A
Second,S,multiple,A;B,A;B
";
    let store = seeded_store();
    let report = BulkUploader::new(&store, &store).upload(payload, AuthorId(1));
    assert_eq!(report.successful_uploads, 2);
    assert_eq!(
        store.author(AuthorId(1)).unwrap().total_questions_created,
        2
    );
}

#[test]
fn account_store_failure_is_fatal() {
    struct BrokenAccounts;
    impl AccountStore for BrokenAccounts {
        fn find_author(&self, _id: AuthorId) -> Result<Option<AuthorRef>> {
            Err(anyhow!("connection refused"))
        }
        fn increment_question_count(&self, _id: AuthorId) -> Result<()> {
            Ok(())
        }
    }

    let payload = "question,subject,questionType,choices,correctAnswers\nQ,S,single,A;B,A\n";
    let questions = MemoryStore::new();
    let report = BulkUploader::new(&BrokenAccounts, &questions).upload(payload, AuthorId(1));
    assert_eq!(report.total_questions, 0);
    assert!(report.errors[0].contains("connection refused"));
}

#[test]
fn empty_payload_yields_missing_header_abort() {
    let store = seeded_store();
    let report = BulkUploader::new(&store, &store).upload("", AuthorId(1));
    assert_eq!(report.total_questions, 0);
    assert!(report.errors[0].starts_with("Missing required columns:"));
}
