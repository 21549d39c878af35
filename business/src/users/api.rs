//! Service client for the rule API.
//!
//! Four operations against the remote service, each a single attempt with no
//! retry: query a page, create, update, batch delete. Every failure surfaces
//! exactly once to the handler layer as an [`ApiError`].

use super::types::{CreateUserRequest, RemoveUsersRequest, UpdateRuleRequest, UserPage};

/// Failure taxonomy for service calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, dropped socket).
    #[error("network error: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("server returned status {0}")]
    Server(u16),
    /// The body did not parse as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// GET `/rule?page=&pageSize=[&sorter=]`
pub async fn query_users(
    api_base_url: &str,
    page: u64,
    page_size: u64,
    sorter: Option<&str>,
) -> ApiResult<UserPage> {
    let mut url = format!("{api_base_url}/rule?page={page}&pageSize={page_size}");
    if let Some(sorter) = sorter {
        url.push_str("&sorter=");
        url.push_str(sorter);
    }

    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Server(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `/rule` with a partial record body. The service acks; the created
/// record is picked up by the next list query.
pub async fn add_user(api_base_url: &str, request: &CreateUserRequest) -> ApiResult<()> {
    let url = format!("{api_base_url}/rule");
    send_ack(reqwest::Client::new().post(&url).json(request)).await
}

/// PUT `/rule` with the `{name, desc, key}` body.
pub async fn update_rule(api_base_url: &str, request: &UpdateRuleRequest) -> ApiResult<()> {
    let url = format!("{api_base_url}/rule");
    send_ack(reqwest::Client::new().put(&url).json(request)).await
}

/// DELETE `/rule` with `{ "ids": [...] }`. Batch is all-or-nothing from the
/// caller's perspective.
pub async fn remove_users(api_base_url: &str, ids: &[i64]) -> ApiResult<()> {
    let url = format!("{api_base_url}/rule");
    let body = RemoveUsersRequest { ids: ids.to_vec() };
    send_ack(reqwest::Client::new().delete(&url).json(&body)).await
}

/// Send a mutating request and check the status. The ack body carries nothing
/// the page needs, so it is not read.
async fn send_ack(request: reqwest::RequestBuilder) -> ApiResult<()> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Server(status.as_u16()));
    }

    Ok(())
}
