//! Action handlers for the three mutating operations.
//!
//! Each handler is a single attempt wrapping one service call plus its
//! notification side effects: show the in-flight indicator, call the service,
//! dismiss the indicator, emit exactly one success-or-error notice, return
//! the outcome as a boolean. Failures never propagate past a handler — the
//! caller only ever observes the boolean and decides whether to refresh.

use roster_states::Updater;

use crate::Notices;

use super::api;
use super::state::UserForm;
use super::types::{CreateUserRequest, UpdateRuleRequest, UserRecord};

/// Create a user from the submitted form fields.
pub async fn handle_add(api_base_url: &str, fields: &UserForm, updater: &Updater) -> bool {
    updater.update::<Notices>(|notices| notices.set_loading("正在添加"));

    let request = CreateUserRequest::from_form(fields);
    match api::add_user(api_base_url, &request).await {
        Ok(()) => {
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_success("添加成功");
            });
            true
        }
        Err(err) => {
            log::warn!("add user failed: {err}");
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_error("添加失败请重试！");
            });
            false
        }
    }
}

/// Update via the rule endpoint.
///
/// The outgoing payload is narrowed to exactly `{name, desc, key}` no matter
/// what the form carries; every other field is dropped.
pub async fn handle_update(api_base_url: &str, fields: &UserForm, updater: &Updater) -> bool {
    updater.update::<Notices>(|notices| notices.set_loading("正在配置"));

    let request = UpdateRuleRequest::from_form(fields);
    match api::update_rule(api_base_url, &request).await {
        Ok(()) => {
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_success("配置成功");
            });
            true
        }
        Err(err) => {
            log::warn!("update rule failed: {err}");
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_error("配置失败请重试！");
            });
            false
        }
    }
}

/// Batch-delete the selected rows.
///
/// An empty selection is a no-op success: no network call, no notices. The
/// delete request carries `rows.map(id)` in row order.
pub async fn handle_remove(
    api_base_url: &str,
    selected_rows: &[UserRecord],
    updater: &Updater,
) -> bool {
    if selected_rows.is_empty() {
        return true;
    }

    updater.update::<Notices>(|notices| notices.set_loading("正在删除"));

    let ids: Vec<i64> = selected_rows.iter().map(|row| row.id).collect();
    match api::remove_users(api_base_url, &ids).await {
        Ok(()) => {
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_success("删除成功，即将刷新");
            });
            true
        }
        Err(err) => {
            log::warn!("remove users failed: {err}");
            updater.update::<Notices>(|notices| {
                notices.clear_loading();
                notices.push_error("删除失败，请重试");
            });
            false
        }
    }
}
