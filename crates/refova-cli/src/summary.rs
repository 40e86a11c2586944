use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use refova_model::FormState;

use refova_cli::runner::RunReport;

pub fn print_summary(report: &RunReport) {
    println!("{}", state_table(&report.state));
    println!("{}", status_line(report));
}

fn status_line(report: &RunReport) -> String {
    format!(
        "Steps: {}  Notifications: {}  Resets: {}  Status: {}",
        report.steps,
        report.notifications,
        report.resets,
        if report.valid { "valid" } else { "invalid" }
    )
}

/// Render one row per field: every value in order, then errors of fields
/// that have no value.
pub fn state_table(state: &FormState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Changed"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    let orphan_errors = state
        .errors
        .keys()
        .filter(|key| !state.values.contains_key(key.as_str()));
    let keys = state.values.keys().chain(orphan_errors);
    for key in keys {
        let value = match state.values.get(key) {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        let changed = if state.is_changed(key) {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("no")
        };
        let error = match state.error(key) {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(key), value, changed, error]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
