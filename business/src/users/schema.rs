//! Declarative column/field schema for the users page.
//!
//! One ordered descriptor list drives both rendering paths: the table picks
//! cell renderers via [`CellKind`], the modal forms project the subset with
//! `hide_in_form == false`. Capability flags are explicit per field instead
//! of being scattered across widget call sites.

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text from the record field named by `data_index`.
    Text,
    /// Enumerated value mapped through `value_enum`.
    StatusEnum,
    /// Avatar image when the record carries a photo URL, blank otherwise.
    Avatar,
    /// Non-data-bound action cell (edit trigger).
    Actions,
}

/// One field descriptor consumed by both the table and the form renderer.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Display title.
    pub title: &'static str,
    /// Data key into the record (or `"option"` for the action column).
    pub data_index: &'static str,
    /// Required-validation message, when the form field is mandatory.
    pub required_message: Option<&'static str>,
    /// Whether the list can be sorted by this column.
    pub sortable: bool,
    /// Suppressed in form mode.
    pub hide_in_form: bool,
    /// Suppressed in search mode.
    pub hide_in_search: bool,
    /// Value-to-label mapping for enumerated columns.
    pub value_enum: &'static [(i64, &'static str)],
    pub cell: CellKind,
}

const STATUS_LABELS: &[(i64, &'static str)] = &[(0, "正常"), (1, "锁定")];

const USER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        title: "用户名",
        data_index: "username",
        required_message: Some("用户名为必填项"),
        sortable: false,
        hide_in_form: false,
        hide_in_search: false,
        value_enum: &[],
        cell: CellKind::Text,
    },
    ColumnSpec {
        title: "昵称",
        data_index: "realname",
        required_message: Some("昵称为必填项"),
        sortable: false,
        hide_in_form: false,
        hide_in_search: false,
        value_enum: &[],
        cell: CellKind::Text,
    },
    ColumnSpec {
        title: "角色",
        data_index: "rolename",
        required_message: None,
        sortable: true,
        hide_in_form: true,
        hide_in_search: false,
        value_enum: &[],
        cell: CellKind::Text,
    },
    ColumnSpec {
        title: "部门",
        data_index: "deptname",
        required_message: None,
        sortable: true,
        hide_in_form: true,
        hide_in_search: false,
        value_enum: &[],
        cell: CellKind::Text,
    },
    ColumnSpec {
        title: "岗位",
        data_index: "position",
        required_message: None,
        sortable: true,
        hide_in_form: true,
        hide_in_search: false,
        value_enum: &[],
        cell: CellKind::Text,
    },
    ColumnSpec {
        title: "状态",
        data_index: "logincount",
        required_message: None,
        sortable: false,
        hide_in_form: true,
        hide_in_search: false,
        value_enum: STATUS_LABELS,
        cell: CellKind::StatusEnum,
    },
    ColumnSpec {
        title: "头像",
        data_index: "avatar",
        required_message: None,
        sortable: true,
        hide_in_form: true,
        hide_in_search: true,
        value_enum: &[],
        cell: CellKind::Avatar,
    },
    ColumnSpec {
        title: "操作",
        data_index: "option",
        required_message: None,
        sortable: false,
        hide_in_form: true,
        hide_in_search: true,
        value_enum: &[],
        cell: CellKind::Actions,
    },
];

/// The full ordered column list for the users table.
pub fn user_columns() -> &'static [ColumnSpec] {
    USER_COLUMNS
}

/// The form-mode projection: data fields not suppressed by `hide_in_form`.
pub fn form_columns() -> impl Iterator<Item = &'static ColumnSpec> {
    USER_COLUMNS
        .iter()
        .filter(|column| !column.hide_in_form && column.cell != CellKind::Actions)
}

/// Label for a status value, `None` when no case matches.
pub fn status_label(value: i64) -> Option<&'static str> {
    STATUS_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map(|(_, label)| *label)
}

impl ColumnSpec {
    /// Label for an enumerated cell value through this column's mapping.
    pub fn enum_label(&self, value: i64) -> Option<&'static str> {
        self.value_enum
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, label)| *label)
    }
}
