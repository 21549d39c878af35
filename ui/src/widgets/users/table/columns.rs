//! Column definitions for the users table.

use egui_extras::Column;
use roster_business::{CellKind, user_columns};

/// Fixed column widths for consistent table layout
pub const SELECT_WIDTH: f32 = 28.0;
pub const STATUS_WIDTH: f32 = 64.0;
pub const AVATAR_WIDTH: f32 = 64.0;
pub const ACTIONS_WIDTH: f32 = 72.0;
pub const ROW_HEIGHT: f32 = 44.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration for the users table.
///
/// Leads with the fixed selection-checkbox column, then follows the schema
/// order: text columns flex, status/avatar/actions stay fixed.
#[inline]
pub fn table_columns() -> Vec<Column> {
    let mut columns = vec![Column::exact(SELECT_WIDTH)];
    for column in user_columns() {
        columns.push(match column.cell {
            CellKind::Text => Column::remainder().at_least(80.0),
            CellKind::StatusEnum => Column::exact(STATUS_WIDTH),
            CellKind::Avatar => Column::exact(AVATAR_WIDTH),
            CellKind::Actions => Column::exact(ACTIONS_WIDTH),
        });
    }
    columns
}
