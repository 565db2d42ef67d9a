//! Single-draw view: summary line plus a category-grouped results table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use biomark_core::{FlagFilter, FlagSummary, delta_between, group_by_category};
use biomark_model::{Flag, LabResultsResponse, LabSnapshot};
use biomark_registry::BiomarkerRegistry;

use crate::format::{format_date, format_delta, format_range, format_value};

/// Headline line above the table, e.g.
/// `24 markers · 18 in range · 4 flagged · 2 borderline`.
pub fn summary_line(summary: &FlagSummary) -> String {
    format!(
        "{} markers · {} in range · {} flagged · {} borderline",
        summary.total, summary.in_range, summary.flagged, summary.borderline
    )
}

/// Render one draw's results, grouped by category in fixed order.
///
/// `prior` is the immediately preceding snapshot when the caller has one;
/// it adds a change column using the comparison delta rule.
pub fn render_single_lab(
    response: &LabResultsResponse,
    registry: &BiomarkerRegistry,
    filter: FlagFilter,
    prior: Option<&LabSnapshot>,
) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Biomarker"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Range"),
        header_cell("Flag"),
    ];
    if prior.is_some() {
        header.push(header_cell("Change"));
    }
    let columns = header.len();
    table.set_header(header);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 1, CellAlignment::Right);
    if prior.is_some() {
        align_column(&mut table, 5, CellAlignment::Right);
    }

    let filtered: Vec<_> = response
        .results
        .iter()
        .filter(|r| filter.matches(r.flag))
        .cloned()
        .collect();

    for (category, results) in group_by_category(&filtered, registry) {
        table.add_row(category_row(&category, columns));
        for result in results {
            let mut row = vec![
                Cell::new(&result.display_name),
                Cell::new(format_value(result.value)).add_attribute(Attribute::Bold),
                Cell::new(&result.unit),
                Cell::new(format_range(result.ref_low, result.ref_high)),
                flag_cell(result.flag),
            ];
            if let Some(prior) = prior {
                row.push(Cell::new(change_against_prior(result.value, prior, &result.biomarker_key)));
            }
            table.add_row(row);
        }
    }

    table
}

/// Draw metadata block rendered above the results table.
pub fn lab_heading(response: &LabResultsResponse) -> String {
    let lab = &response.lab;
    let mut line = format!("Lab {} · {}", lab.id, format_date(lab.test_date));
    if let Some(panel) = &lab.panel_type {
        line.push_str(&format!(" · {panel}"));
    }
    if let Some(provider) = &lab.lab_provider {
        line.push_str(&format!(" · {provider}"));
    }
    line
}

fn change_against_prior(value: f64, prior: &LabSnapshot, key: &str) -> String {
    let values = [Some(value), prior.value_of(key)];
    format_delta(delta_between(&values).as_ref())
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn category_row(category: &str, columns: usize) -> Vec<Cell> {
    let mut row = vec![
        Cell::new(category.to_uppercase())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ];
    row.resize_with(columns, || Cell::new(""));
    row
}

pub(crate) fn flag_cell(flag: Option<Flag>) -> Cell {
    match flag {
        Some(flag @ (Flag::High | Flag::Low)) => Cell::new(flag.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(flag @ (Flag::BorderlineHigh | Flag::BorderlineLow)) => {
            Cell::new(flag.as_str()).fg(Color::Yellow)
        }
        Some(flag @ Flag::Optimal) => Cell::new(flag.as_str())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(flag @ Flag::Normal) => Cell::new(flag.as_str()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
