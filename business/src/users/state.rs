//! Page state for the users admin view.
//!
//! All of the page's UI-visible state lives here, owned by one controller
//! object in `StateCtx`: the sort specification, pagination, the selection
//! set, the two modal flags and their form buffers. Widgets receive it as
//! plain data; nothing here is globally shared.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};

use roster_states::State;
use ustr::Ustr;

use super::schema::{self, ColumnSpec};
use super::types::UserRecord;

/// Default page size for the users table.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascend => "ascend",
            Self::Descend => "descend",
        }
    }
}

/// The single retained sort key. Last writer wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Ustr,
    pub order: SortOrder,
}

impl SortSpec {
    /// Serialized request parameter: `"<field> <order>"`.
    pub fn param(&self) -> String {
        format!("{} {}", self.field, self.order.as_str())
    }
}

/// Field buffers plus validation errors for one modal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, &'static str>,
}

impl UserForm {
    /// Mutable input buffer for a field, created empty on first access.
    pub fn buffer_mut(&mut self, key: &'static str) -> &mut String {
        self.values.entry(key).or_default()
    }

    /// Trimmed, non-empty value for a field.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|buffer| buffer.trim())
            .filter(|trimmed| !trimmed.is_empty())
    }

    /// Validation error for a field, if the last `validate` flagged it.
    pub fn error(&self, key: &str) -> Option<&'static str> {
        self.errors.get(key).copied()
    }

    /// Run required-field validation against the form-mode schema columns.
    ///
    /// Returns `true` when the form may be submitted.
    pub fn validate<'a>(&mut self, columns: impl Iterator<Item = &'a ColumnSpec>) -> bool {
        self.errors.clear();
        for column in columns {
            if let Some(message) = column.required_message
                && self.value(column.data_index).is_none()
            {
                self.errors.insert(column.data_index, message);
            }
        }
        self.errors.is_empty()
    }

    /// Load the form-visible fields of a record into the buffers.
    pub fn fill_from(&mut self, record: &UserRecord) {
        self.reset();
        for column in schema::form_columns() {
            if let Some(text) = record.text_for(column.data_index) {
                self.values.insert(column.data_index, text.to_owned());
            }
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

/// State for the users page, stored in `StateCtx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPageState {
    /// Current page, 1-based.
    pub page: u64,
    pub page_size: u64,
    /// The sort specification sent with the next list query.
    pub sorter: Option<SortSpec>,
    /// Ids of the currently checked rows. Cleared when a new page of results
    /// is applied.
    pub selected: BTreeSet<i64>,
    pub create_modal_open: bool,
    pub update_modal_open: bool,
    pub create_form: UserForm,
    pub update_form: UserForm,
    /// Id of the row loaded into the update form.
    pub editing: Option<i64>,
}

impl Default for UsersPageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sorter: None,
            selected: BTreeSet::new(),
            create_modal_open: false,
            update_modal_open: false,
            create_form: UserForm::default(),
            update_form: UserForm::default(),
            editing: None,
        }
    }
}

impl State for UsersPageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl UsersPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the sort specification. Only the latest write is retained.
    pub fn set_sort(&mut self, field: Ustr, order: SortOrder) {
        self.sorter = Some(SortSpec { field, order });
    }

    /// Header-click behavior: first click sorts ascending, clicking the
    /// active column flips the direction.
    pub fn toggle_sort(&mut self, field: Ustr) {
        let order = match &self.sorter {
            Some(sort) if sort.field == field && sort.order == SortOrder::Ascend => {
                SortOrder::Descend
            }
            _ => SortOrder::Ascend,
        };
        self.set_sort(field, order);
    }

    pub fn sorter_param(&self) -> Option<String> {
        self.sorter.as_ref().map(SortSpec::param)
    }

    pub fn toggle_selected(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn open_create_modal(&mut self) {
        self.create_form.reset();
        self.create_modal_open = true;
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal_open = false;
        self.create_form.reset();
    }

    /// Open the update modal pre-filled with the clicked row.
    pub fn open_update_modal(&mut self, record: &UserRecord) {
        self.update_form.fill_from(record);
        self.editing = Some(record.id);
        self.update_modal_open = true;
    }

    pub fn close_update_modal(&mut self) {
        self.update_modal_open = false;
        self.update_form.reset();
        self.editing = None;
    }
}
