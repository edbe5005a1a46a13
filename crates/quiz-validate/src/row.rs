//! Per-row validation.
//!
//! Each raw row either becomes a [`NewQuestion`] or is rejected with a
//! [`RowError`] naming the first failing check. Checks run in a fixed order
//! and short-circuit; persistence is the batch coordinator's concern.

use thiserror::Error;

use quiz_ingest::{ResolvedHeaders, split_values};
use quiz_model::{AuthorId, Field, NewQuestion, QuestionType};

/// Why a row was rejected. `Display` renders the message shown to uploaders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Question text is empty")]
    EmptyQuestionText,
    #[error("Invalid question type. Must be 'single' or 'multiple'")]
    InvalidQuestionType,
    #[error("At least 2 choices are required (found {found})")]
    TooFewChoices { found: usize },
    #[error("At least one correct answer is required")]
    NoCorrectAnswers,
    #[error("Correct answer '{answer}' not found in choices. Available: {}", choices.join(", "))]
    AnswerNotInChoices {
        answer: String,
        choices: Vec<String>,
    },
}

fn field_value<'a>(row: &'a [String], headers: &ResolvedHeaders, field: Field) -> &'a str {
    headers
        .get(field)
        .and_then(|column| row.get(column.index))
        .map(String::as_str)
        .unwrap_or("")
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_uppercase() == right.to_uppercase()
}

/// Validate one raw row against fully resolved headers.
///
/// Checks, in order: non-empty question text, recognizable question type,
/// at least 2 choices, at least 1 correct answer, every correct answer
/// present among choices (case-insensitive). On success, correct answers are
/// rewritten with the exact casing of their first matching choice.
pub fn validate_row(
    row: &[String],
    headers: &ResolvedHeaders,
    author: AuthorId,
) -> Result<NewQuestion, RowError> {
    let question_text = field_value(row, headers, Field::QuestionText).trim();
    if question_text.is_empty() {
        return Err(RowError::EmptyQuestionText);
    }

    let question_type: QuestionType = field_value(row, headers, Field::QuestionType)
        .parse()
        .map_err(|_| RowError::InvalidQuestionType)?;

    let choices = split_values(field_value(row, headers, Field::Choices));
    if choices.len() < 2 {
        return Err(RowError::TooFewChoices {
            found: choices.len(),
        });
    }

    let correct_answers = split_values(field_value(row, headers, Field::CorrectAnswers));
    if correct_answers.is_empty() {
        return Err(RowError::NoCorrectAnswers);
    }

    for answer in &correct_answers {
        if !choices.iter().any(|choice| eq_ignore_case(choice, answer)) {
            return Err(RowError::AnswerNotInChoices {
                answer: answer.clone(),
                choices: choices.clone(),
            });
        }
    }

    // First case-insensitive match wins when choices differ only in case.
    let correct_answers = correct_answers
        .iter()
        .map(|answer| {
            choices
                .iter()
                .find(|choice| eq_ignore_case(choice, answer))
                .cloned()
                .unwrap_or_else(|| answer.clone())
        })
        .collect();

    Ok(NewQuestion {
        question: question_text.to_string(),
        subject: field_value(row, headers, Field::Subject).trim().to_string(),
        question_type,
        choices,
        correct_answers,
        created_by: author,
        is_active: true,
    })
}
