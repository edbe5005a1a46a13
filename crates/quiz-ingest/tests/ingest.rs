//! End-to-end ingestion tests: payload text through header resolution.

use quiz_ingest::{read_csv_table, resolve_headers, split_values};
use quiz_model::Field;

#[test]
fn payload_headers_resolve_across_spellings() {
    let payload = "\
Question,Topic,Question-Type,Options,Correct Answers
What is the capital of France?,Geography,single,A. Paris;B. London,A. Paris
";
    let table = read_csv_table(payload).expect("parse payload");
    let resolved = resolve_headers(&table.headers);
    assert!(resolved.is_complete());
    assert_eq!(resolved.label(Field::Subject), "Topic");
    assert_eq!(resolved.label(Field::Choices), "Options");

    let row = &table.rows[0];
    let choices = split_values(table.value(row, resolved.label(Field::Choices)));
    assert_eq!(choices, vec!["A. Paris", "B. London"]);
}

#[test]
fn quoted_choice_cells_survive_csv_then_tokenize() {
    let payload = "\
question,subject,questionType,choices,correctAnswers
\"What is 2 + 2?\",Mathematics,single,\"A. 3;B. 4;C. 5;D. 6\",\"B. 4\"
";
    let table = read_csv_table(payload).expect("parse payload");
    let resolved = resolve_headers(&table.headers);
    let row = &table.rows[0];
    let choices = split_values(table.value(row, resolved.label(Field::Choices)));
    assert_eq!(choices.len(), 4);
    let answers = split_values(table.value(row, resolved.label(Field::CorrectAnswers)));
    assert_eq!(answers, vec!["B. 4"]);
}

#[test]
fn bom_prefixed_header_still_resolves() {
    let payload = "\u{feff}question,subject,type,choices,answer\nQ,S,single,A;B,A\n";
    let table = read_csv_table(payload).expect("parse payload");
    let resolved = resolve_headers(&table.headers);
    assert!(resolved.is_complete());
}
