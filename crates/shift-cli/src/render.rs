//! Terminal rendering for parsed and processed tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as Grid};

use shift_model::Table;

/// Render a table as a grid, capped at `limit` data rows, followed by a
/// row-count line. A table without data rows renders as a notice
/// instead of an empty grid.
pub fn render_table(table: &Table, limit: usize) -> String {
    if table.rows.is_empty() {
        return "No data rows to display.\n".to_string();
    }

    let mut grid = Grid::new();
    apply_table_style(&mut grid);
    grid.set_header(
        table
            .headers
            .iter()
            .map(|header| Cell::new(header).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    for row in table.rows.iter().take(limit) {
        grid.add_row(
            table
                .headers
                .iter()
                .map(|header| row.get(header).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>(),
        );
    }

    let shown = table.rows.len().min(limit);
    let mut rendered = format!("{grid}\n");
    if shown < table.rows.len() {
        rendered.push_str(&format!("Showing {shown} of {} rows\n", table.rows.len()));
    } else if table.rows.len() == 1 {
        rendered.push_str("1 row\n");
    } else {
        rendered.push_str(&format!("{} rows\n", table.rows.len()));
    }
    rendered
}

pub fn apply_table_style(grid: &mut Grid) {
    grid.load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
