//! Record and wire types for the rule API.

use serde::{Deserialize, Serialize};

use super::state::UserForm;

/// One user record as served by the list endpoint.
///
/// `id` is externally assigned and immutable; `logincount` doubles as the
/// status flag (0 = normal, 1 = locked); `photo` is the avatar URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub realname: String,
    pub rolename: String,
    pub deptname: String,
    pub position: String,
    pub logincount: i64,
    #[serde(default)]
    pub photo: Option<String>,
}

impl UserRecord {
    /// Plain-text cell value for a schema data index, when the field is text.
    ///
    /// Status and avatar cells carry their own rendering and return `None`.
    pub fn text_for(&self, data_index: &str) -> Option<&str> {
        match data_index {
            "username" => Some(&self.username),
            "realname" => Some(&self.realname),
            "rolename" => Some(&self.rolename),
            "deptname" => Some(&self.deptname),
            "position" => Some(&self.position),
            _ => None,
        }
    }
}

/// One page of the list endpoint response: `{ data: [...], total: n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
    pub total: u64,
}

/// Body of `POST /rule`: a partial record, no id.
///
/// Only fields the form actually filled are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deptname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl CreateUserRequest {
    pub fn from_form(form: &UserForm) -> Self {
        Self {
            username: form.value("username").map(str::to_owned),
            realname: form.value("realname").map(str::to_owned),
            rolename: form.value("rolename").map(str::to_owned),
            deptname: form.value("deptname").map(str::to_owned),
            position: form.value("position").map(str::to_owned),
        }
    }
}

/// Body of `PUT /rule`.
///
/// The update endpoint takes `{name, desc, key}` — a shape inherited from the
/// service contract that does not line up with the record fields. The handler
/// narrows to exactly these three keys no matter what the form carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl UpdateRuleRequest {
    pub fn from_form(form: &UserForm) -> Self {
        Self {
            name: form.value("name").map(str::to_owned),
            desc: form.value("desc").map(str::to_owned),
            key: form.value("key").map(str::to_owned),
        }
    }
}

/// Body of `DELETE /rule`: batch delete by id list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveUsersRequest {
    pub ids: Vec<i64>,
}
