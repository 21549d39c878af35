//! Table components for the users page.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering with sort capture
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use std::collections::BTreeSet;

use egui::Ui;
use egui_extras::TableBuilder;
use roster_business::{SortSpec, UserRecord};
use ustr::Ustr;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};

/// Everything the user did to the table this frame, applied by the panel
/// after layout so rendering never mutates page state mid-pass.
#[derive(Debug, Default)]
pub struct TableEvents {
    /// A sortable header was clicked.
    pub sort_clicked: Option<Ustr>,
    /// Row checkboxes that changed.
    pub toggled: Vec<i64>,
    /// The edit trigger of this row was clicked.
    pub edit: Option<UserRecord>,
}

/// Renders the users table and reports interactions.
pub fn users_table(
    ui: &mut Ui,
    users: &[UserRecord],
    selected: &BTreeSet<i64>,
    sorter: Option<SortSpec>,
) -> TableEvents {
    let mut events = TableEvents::default();

    let mut builder = TableBuilder::new(ui).striped(true);
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            events.sort_clicked = header::render_table_header(&mut header, sorter);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, users.len(), |mut table_row| {
                let user = &users[table_row.index()];
                let row_event =
                    row::render_user_row(&mut table_row, user, selected.contains(&user.id));

                if let Some(id) = row_event.toggled {
                    events.toggled.push(id);
                }
                if row_event.edit.is_some() {
                    events.edit = row_event.edit;
                }
            });
        });

    events
}
