use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// One parsed upload payload: the header row plus every data row, with each
/// row padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Value of the column `header` in `row`, or `""` when the header is
    /// unknown. Header comparison is exact; callers resolve synonyms first.
    pub fn value<'a>(&self, row: &'a [String], header: &str) -> &'a str {
        self.headers
            .iter()
            .position(|h| h == header)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse a full CSV payload (header line + records) into a table.
///
/// Rows that are entirely blank are skipped. A payload with no rows at all
/// yields an empty table rather than an error.
pub fn read_csv_table(input: &str) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let headers = raw_rows.remove(0);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in &raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = read_csv_table("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.value(&table.rows[1], "b"), "4");
    }

    #[test]
    fn pads_short_rows_to_header_width() {
        let table = read_csv_table("a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn skips_blank_rows_and_strips_bom() {
        let table = read_csv_table("\u{feff}a,b\n\n,\n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = read_csv_table("").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let table = read_csv_table("q,c\n\"What, exactly?\",\"A;B\"\n").unwrap();
        assert_eq!(table.value(&table.rows[0], "q"), "What, exactly?");
    }
}
