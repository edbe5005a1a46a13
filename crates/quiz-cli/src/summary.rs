use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use quiz_model::BulkReport;

pub fn print_report(report: &BulkReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Successful"),
        header_cell("Failed"),
    ]);
    table.add_row(vec![
        count_cell(report.total_questions, Color::Cyan),
        count_cell(report.successful_uploads, Color::Green),
        count_cell(report.failed_uploads, Color::Red),
    ]);
    println!("{table}");

    for message in &report.success_messages {
        println!("  ok   {message}");
    }
    for error in &report.errors {
        eprintln!("  fail {error}");
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

fn count_cell(count: usize, color: Color) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 { cell.fg(color) } else { cell }
}
