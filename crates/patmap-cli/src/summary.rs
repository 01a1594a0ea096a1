use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::RunResult;

/// Print the run summary to stderr; stdout carries the JSON document.
pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(result.input.display()),
    ]);
    table.add_row(vec![
        Cell::new("Config"),
        Cell::new(result.config.display()),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(result.output.display()),
    ]);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(result.records).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Rules"),
        Cell::new(format!(
            "{} top-level, {} total",
            result.top_level_rules, result.total_rules
        )),
    ]);
    if !result.unknown_transforms.is_empty() {
        table.add_row(vec![
            Cell::new("Unknown transforms"),
            Cell::new(result.unknown_transforms.join(", ")),
        ]);
    }
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
