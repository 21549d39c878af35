//! Table header rendering for the users table.

use egui::Ui;
use egui_extras::TableRow;
use roster_business::{SortOrder, SortSpec, user_columns};
use ustr::Ustr;

/// Renders the header row and reports a clicked sortable column.
///
/// Sortable headers are buttons carrying the active sort direction marker;
/// the rest are plain bold labels.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sorter: Option<SortSpec>,
) -> Option<Ustr> {
    let mut clicked = None;

    // Selection column has no header.
    header.col(|_ui| {});

    for column in user_columns() {
        header.col(|ui| {
            if column.sortable {
                let field = Ustr::from(column.data_index);
                if render_sortable_header_cell(ui, column.title, field, sorter) {
                    clicked = Some(field);
                }
            } else {
                render_header_cell(ui, column.title);
            }
        });
    }

    clicked
}

/// Renders a single plain header cell with centered, bold text.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}

/// Renders a sortable header cell. Returns `true` when clicked.
#[inline]
fn render_sortable_header_cell(
    ui: &mut Ui,
    label: &str,
    field: Ustr,
    sorter: Option<SortSpec>,
) -> bool {
    let marker = match sorter {
        Some(sort) if sort.field == field => match sort.order {
            SortOrder::Ascend => " ▲",
            SortOrder::Descend => " ▼",
        },
        _ => "",
    };

    ui.centered_and_justified(|ui| ui.button(format!("{label}{marker}")).clicked())
        .inner
}
