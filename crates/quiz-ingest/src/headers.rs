//! Header resolution for bulk uploads.
//!
//! Uploads arrive with free-text column labels. Each label is cleaned
//! (lowercased, separator characters removed) and compared against a static
//! synonym table to find the canonical [`Field`] it names.

use std::collections::BTreeMap;

use quiz_model::Field;

/// Accepted spellings per canonical field, compared after [`clean_header`].
/// Synonym sets are disjoint by construction; should a future edit make them
/// collide, the first field in [`Field::ALL`] order claims the header.
const SYNONYMS: [(Field, &[&str]); 5] = [
    (
        Field::QuestionText,
        &["question", "questiontext", "question_text", "quiz_question", "q"],
    ),
    (
        Field::Subject,
        &["subject", "category", "topic", "subject_name", "course"],
    ),
    (
        Field::QuestionType,
        &["questiontype", "question_type", "type", "quiz_type", "qtype"],
    ),
    (
        Field::Choices,
        &["choices", "options", "answers", "answer_choices", "choices_list"],
    ),
    (
        Field::CorrectAnswers,
        &["correctanswers", "correct_answers", "correct", "answer", "solution"],
    ),
];

/// A raw header that resolved to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// The label exactly as it appeared in the input.
    pub label: String,
    /// Position of the column in the header row.
    pub index: usize,
}

/// Canonical field -> matched input column, built once per batch.
#[derive(Debug, Clone, Default)]
pub struct ResolvedHeaders {
    entries: BTreeMap<Field, ResolvedColumn>,
}

impl ResolvedHeaders {
    pub fn get(&self, field: Field) -> Option<&ResolvedColumn> {
        self.entries.get(&field)
    }

    /// Raw label matched for `field`, or `""` when unresolved.
    pub fn label(&self, field: Field) -> &str {
        self.entries
            .get(&field)
            .map(|column| column.label.as_str())
            .unwrap_or("")
    }

    /// Canonical fields with no matching input column, in declaration order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !self.entries.contains_key(field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == Field::ALL.len()
    }
}

/// Cleans a header label for synonym comparison: lowercase with all
/// whitespace, underscores, and hyphens removed. Also strips a UTF-8 BOM.
pub fn clean_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve raw header labels to canonical fields.
///
/// Fields are tried in [`Field::ALL`] order and for each the first (leftmost)
/// cleanly-matching label wins, so resolution is deterministic and
/// independent of column order. Fields without a match are simply absent
/// from the result; callers decide whether that is fatal.
pub fn resolve_headers(raw_headers: &[String]) -> ResolvedHeaders {
    let cleaned: Vec<String> = raw_headers.iter().map(|raw| clean_header(raw)).collect();
    let mut entries = BTreeMap::new();
    for (field, synonyms) in SYNONYMS {
        let matched = raw_headers.iter().enumerate().find(|(idx, _)| {
            synonyms
                .iter()
                .any(|synonym| cleaned[*idx] == clean_header(synonym))
        });
        if let Some((index, label)) = matched {
            entries.insert(
                field,
                ResolvedColumn {
                    label: label.clone(),
                    index,
                },
            );
        }
    }
    ResolvedHeaders { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_string()).collect()
    }

    #[test]
    fn clean_header_strips_case_and_separators() {
        assert_eq!(clean_header("Question Type"), "questiontype");
        assert_eq!(clean_header("question_type"), "questiontype");
        assert_eq!(clean_header("question-type"), "questiontype");
        assert_eq!(clean_header("questiontype"), "questiontype");
    }

    #[test]
    fn resolves_every_synonym_spelling_to_the_same_field() {
        for label in ["Question Type", "question_type", "QTYPE", "type"] {
            let resolved = resolve_headers(&headers(&[label]));
            assert_eq!(
                resolved.label(Field::QuestionType),
                label,
                "label {label:?} should resolve to question_type"
            );
        }
    }

    #[test]
    fn resolution_is_column_order_independent() {
        let forward = resolve_headers(&headers(&[
            "question", "subject", "type", "options", "answer",
        ]));
        let reversed = resolve_headers(&headers(&[
            "answer", "options", "type", "subject", "question",
        ]));
        for field in Field::ALL {
            assert_eq!(
                forward.label(field),
                reversed.label(field),
                "field {field} resolved differently after permutation"
            );
        }
    }

    #[test]
    fn missing_fields_reports_unresolved_in_declaration_order() {
        let resolved = resolve_headers(&headers(&["question", "choices"]));
        assert_eq!(
            resolved.missing_fields(),
            vec![Field::Subject, Field::QuestionType, Field::CorrectAnswers]
        );
        assert!(!resolved.is_complete());
    }

    #[test]
    fn unrecognized_headers_are_ignored() {
        let resolved = resolve_headers(&headers(&["difficulty", "notes"]));
        assert_eq!(resolved.missing_fields().len(), 5);
    }

    #[test]
    fn complete_header_set_resolves_fully() {
        let resolved = resolve_headers(&headers(&[
            "Quiz Question",
            "Category",
            "QType",
            "Answer Choices",
            "Solution",
        ]));
        assert!(resolved.is_complete());
        assert_eq!(resolved.get(Field::QuestionText).unwrap().index, 0);
        assert_eq!(resolved.label(Field::CorrectAnswers), "Solution");
    }
}
