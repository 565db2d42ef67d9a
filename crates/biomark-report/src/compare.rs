//! Comparison view: one column per draw, latest first, delta at the end.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use biomark_core::{ComparisonTable, Direction};

use crate::format::{format_date, format_delta, format_value};
use crate::single::{align_column, category_row, dim_cell, header_cell};

pub fn render_comparison(comparison: &ComparisonTable) -> Table {
    let mut table = Table::new();

    let mut header = vec![header_cell("Biomarker")];
    for (index, column) in comparison.columns.iter().enumerate() {
        let label = if index == 0 {
            format!("{} (latest)", format_date(column.test_date))
        } else {
            format_date(column.test_date)
        };
        header.push(header_cell(&label));
    }
    header.push(header_cell("Delta"));
    let columns = header.len();
    table.set_header(header);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 1..columns {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for category in &comparison.categories {
        table.add_row(category_row(&category.category, columns));
        for row in &category.rows {
            let mut cells = Vec::with_capacity(columns);
            let label = if row.unit.is_empty() {
                row.label.clone()
            } else {
                format!("{} ({})", row.label, row.unit)
            };
            cells.push(Cell::new(label));
            for (index, value) in row.values.iter().enumerate() {
                let cell = match value {
                    Some(value) => {
                        let cell = Cell::new(format_value(*value));
                        if index == 0 {
                            cell.add_attribute(Attribute::Bold)
                        } else {
                            cell
                        }
                    }
                    None => dim_cell("-"),
                };
                cells.push(cell);
            }
            cells.push(delta_cell(row));
            table.add_row(cells);
        }
    }

    table
}

fn delta_cell(row: &biomark_core::ComparisonRow) -> Cell {
    match &row.delta {
        Some(delta) => {
            let cell = Cell::new(format_delta(Some(delta))).add_attribute(Attribute::Bold);
            match delta.direction {
                Direction::Up => cell.fg(comfy_table::Color::Green),
                Direction::Down => cell.fg(comfy_table::Color::Red),
                Direction::Flat => cell.fg(comfy_table::Color::DarkGrey),
            }
        }
        None => dim_cell("-"),
    }
}
