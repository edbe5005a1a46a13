//! Question records as produced by the ingestion pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::author::AuthorId;

/// How a question is answered: exactly one choice, or any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multiple,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    /// Parse a type string into a `QuestionType`.
    /// Accepts the spellings seen in real uploads (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "single" | "single-choice" | "single_choice" | "singlechoice" | "mcq" | "radio" => {
                Ok(QuestionType::Single)
            }
            "multiple" | "multiple-choice" | "multiple_choice" | "multiplechoice" | "checkbox"
            | "multi" => Ok(QuestionType::Multiple),
            _ => Err(format!("unrecognized question type: {s}")),
        }
    }
}

/// A validated question ready for persistence.
///
/// Choices keep their input order; every correct answer is guaranteed to be
/// byte-equal to one of the choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub subject: String,
    pub question_type: QuestionType,
    pub choices: Vec<String>,
    pub correct_answers: Vec<String>,
    pub created_by: AuthorId,
    pub is_active: bool,
}

/// Unique identifier assigned by the question store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted question, as returned by store lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    #[serde(flatten)]
    pub question: NewQuestion,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_accepts_upload_spellings() {
        assert_eq!("MCQ".parse::<QuestionType>(), Ok(QuestionType::Single));
        assert_eq!(
            "Single-Choice".parse::<QuestionType>(),
            Ok(QuestionType::Single)
        );
        assert_eq!("radio".parse::<QuestionType>(), Ok(QuestionType::Single));
        assert_eq!(
            "checkbox".parse::<QuestionType>(),
            Ok(QuestionType::Multiple)
        );
        assert_eq!(
            "multiple_choice".parse::<QuestionType>(),
            Ok(QuestionType::Multiple)
        );
        assert!("dropdown".parse::<QuestionType>().is_err());
        assert!("".parse::<QuestionType>().is_err());
    }

    #[test]
    fn question_type_serializes_lowercase() {
        let json = serde_json::to_string(&QuestionType::Multiple).expect("serialize type");
        assert_eq!(json, "\"multiple\"");
    }
}
