//! Cell rendering functions for the users table.

use egui::Ui;
use roster_business::ColumnSpec;

/// Edge length of the avatar thumbnail.
const AVATAR_SIZE: f32 = 39.0;

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders an enumerated cell through the column's value mapping.
///
/// Values with no matching case render nothing.
#[inline]
pub fn render_enum_cell(ui: &mut Ui, column: &ColumnSpec, value: i64) {
    if let Some(label) = column.enum_label(value) {
        ui.centered_and_justified(|ui| {
            ui.label(label);
        });
    }
}

/// Renders the avatar cell: the photo when a URL is present, blank otherwise.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, photo: Option<&str>) {
    if let Some(url) = photo {
        ui.centered_and_justified(|ui| {
            ui.add(egui::Image::new(url).fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE)));
        });
    }
}

/// Renders the row selection checkbox. Returns `true` when toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.centered_and_justified(|ui| ui.checkbox(&mut checked, "").changed())
        .inner
}

/// Renders the action cell's edit trigger. Returns `true` when clicked.
#[inline]
pub fn render_edit_link(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| ui.link("编辑").clicked())
        .inner
}
