//! Canonical upload columns.
//!
//! Bulk uploads may label their columns however they like; every recognized
//! label resolves to one of these five logical fields before any row is read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five logical columns a question upload must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    QuestionText,
    Subject,
    QuestionType,
    Choices,
    CorrectAnswers,
}

impl Field {
    /// All fields in declaration order. Header resolution iterates this
    /// slice, so declaration order is the tie-break order for headers that
    /// would match more than one field.
    pub const ALL: [Field; 5] = [
        Field::QuestionText,
        Field::Subject,
        Field::QuestionType,
        Field::Choices,
        Field::CorrectAnswers,
    ];

    /// Canonical snake_case name, as used in reports and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::QuestionText => "question_text",
            Field::Subject => "subject",
            Field::QuestionType => "question_type",
            Field::Choices => "choices",
            Field::CorrectAnswers => "correct_answers",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_field_once() {
        let mut names: Vec<&str> = Field::ALL.iter().map(Field::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn declaration_order_matches_btree_order() {
        // ResolvedHeaders stores fields in a BTreeMap; the derived Ord must
        // agree with ALL so iteration order stays the documented tie-break.
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }
}
