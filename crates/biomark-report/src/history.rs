//! History view: one row per draw, most recent first.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use biomark_model::LabHistoryResponse;

use crate::format::format_date;
use crate::single::{align_column, dim_cell, header_cell};

pub fn render_history(response: &LabHistoryResponse) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Lab ID"),
        header_cell("Panel"),
        header_cell("Provider"),
        header_cell("Markers"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, snapshot) in response.labs.iter().enumerate() {
        let date_cell = if index == 0 {
            Cell::new(format!("{} (latest)", format_date(snapshot.test_date)))
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(format_date(snapshot.test_date))
        };
        table.add_row(vec![
            date_cell,
            Cell::new(&snapshot.id),
            text_or_dash(snapshot.panel_type.as_deref()),
            text_or_dash(snapshot.lab_provider.as_deref()),
            Cell::new(snapshot.biomarkers.len()),
        ]);
    }

    table
}

fn text_or_dash(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}
