pub mod author;
pub mod field;
pub mod question;
pub mod report;

pub use author::{AuthorId, AuthorRef};
pub use field::Field;
pub use question::{NewQuestion, QuestionId, QuestionRecord, QuestionType};
pub use report::BulkReport;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_record_round_trips() {
        let record = QuestionRecord {
            id: QuestionId(7),
            question: NewQuestion {
                question: "What is 2 + 2?".to_string(),
                subject: "Mathematics".to_string(),
                question_type: QuestionType::Single,
                choices: vec!["A. 3".to_string(), "B. 4".to_string()],
                correct_answers: vec!["B. 4".to_string()],
                created_by: AuthorId(1),
                is_active: true,
            },
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: QuestionRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.id, QuestionId(7));
        assert_eq!(round.question, record.question);
    }
}
