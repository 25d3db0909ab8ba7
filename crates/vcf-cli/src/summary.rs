use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vcf_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Encoding: {} ({})", result.encoding, result.detection);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Replaced bytes"),
        count_cell(result.substitutions, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Removed control characters"),
        count_cell(result.removed_controls, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Records parsed"), Cell::new(result.parsed)]);
    table.add_row(vec![
        Cell::new("Unparsable blocks"),
        count_cell(result.malformed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Valid")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(result.valid, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        count_cell(result.invalid, Color::Red),
    ]);
    println!("{table}");

    match &result.outputs {
        Some(paths) => {
            print_path("Valid contacts", &paths.valid);
            print_path("Invalid contacts", &paths.invalid);
            print_path("Explanations", &paths.explanations);
        }
        None => println!("Dry run: no files written"),
    }
    if let Some(path) = &result.report {
        print_path("Run report", path);
    }
}

fn print_path(label: &str, path: &Path) {
    println!("{label}: {}", path.display());
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
