//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::{CellKind, UserRecord, user_columns};

use super::cells::{
    render_avatar_cell, render_edit_link, render_enum_cell, render_select_cell, render_text_cell,
};

/// Result of rendering a user row.
#[derive(Debug, Default)]
pub struct UserRowEvent {
    /// The selection checkbox flipped for this row id.
    pub toggled: Option<i64>,
    /// The edit trigger was clicked; carries the row so the update form can
    /// be pre-filled.
    pub edit: Option<UserRecord>,
}

/// Renders a single user row: the selection checkbox followed by one cell per
/// schema column, dispatched on the column's cell kind.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &UserRecord,
    selected: bool,
) -> UserRowEvent {
    let mut event = UserRowEvent::default();

    row.col(|ui| {
        if render_select_cell(ui, selected) {
            event.toggled = Some(user.id);
        }
    });

    for column in user_columns() {
        row.col(|ui| match column.cell {
            CellKind::Text => {
                render_text_cell(ui, user.text_for(column.data_index).unwrap_or_default());
            }
            CellKind::StatusEnum => render_enum_cell(ui, column, user.logincount),
            CellKind::Avatar => render_avatar_cell(ui, user.photo.as_deref()),
            CellKind::Actions => {
                if render_edit_link(ui) {
                    event.edit = Some(user.clone());
                }
            }
        });
    }

    event
}
