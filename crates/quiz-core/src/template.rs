//! Downloadable example payload.
//!
//! Fixed content: the canonical header, five worked examples, and inline
//! instructions that uploaders are told to delete before submitting.

/// Suggested filename when serving the template as a download.
pub const TEMPLATE_FILENAME: &str = "quiz_bulk_upload_template.csv";

/// The example CSV payload, ready to write out verbatim.
pub fn upload_template() -> String {
    let mut csv = String::new();
    csv.push_str("question,subject,questionType,choices,correctAnswers\n");
    csv.push_str(
        "\"What is the capital of France?\",Geography,single,\
         \"A. Paris;B. London;C. Berlin;D. Madrid\",\"A. Paris\"\n",
    );
    csv.push_str(
        "\"Which of the following are programming languages? (Select all that apply)\",\
         Computer Science,multiple,\
         \"A. Java;B. HTML;C. Python;D. CSS;E. JavaScript\",\
         \"A. Java;C. Python;E. JavaScript\"\n",
    );
    csv.push_str("\"What is 2 + 2?\",Mathematics,single,\"A. 3;B. 4;C. 5;D. 6\",\"B. 4\"\n");
    csv.push_str(
        "\"What is the chemical symbol for water?\",Science,single,\
         \"A. H2O;B. CO2;C. O2;D. N2\",\"A. H2O\"\n",
    );
    csv.push_str(
        "\"Which of these are primary colors?\",Art,multiple,\
         \"A. Red;B. Green;C. Blue;D. Yellow;E. Purple\",\"A. Red;C. Blue;D. Yellow\"\n",
    );
    csv.push('\n');
    csv.push_str("\"INSTRUCTIONS:\",\"\",\"\",\"\",\"\"\n");
    csv.push_str("\"1. Keep the header row (first line) unchanged\",\"\",\"\",\"\",\"\"\n");
    csv.push_str("\"2. Each row represents one question\",\"\",\"\",\"\",\"\"\n");
    csv.push_str("\"3. Separate choices with semicolons (;)\",\"\",\"\",\"\",\"\"\n");
    csv.push_str(
        "\"4. For multiple correct answers, separate with semicolons\",\"\",\"\",\"\",\"\"\n",
    );
    csv.push_str("\"5. Question type: 'single' or 'multiple'\",\"\",\"\",\"\",\"\"\n");
    csv.push_str("\"6. Delete these instruction rows before uploading\",\"\",\"\",\"\",\"\"\n");
    csv
}
