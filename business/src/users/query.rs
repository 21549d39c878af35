//! List cache + refresh command for the users table.
//!
//! The table never fetches inline: it reads [`UserQueryCompute`] via
//! `ctx.cached` and dispatches [`RefreshUsersCommand`] whenever pagination or
//! the sort specification changes. The command snapshots the page state, so
//! later UI edits cannot race into an in-flight query's parameters.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use roster_states::{Command, CommandSnapshot, Compute, State, Updater};

use crate::BusinessConfig;

use super::api;
use super::state::UsersPageState;
use super::types::{UserPage, UserRecord};

/// Status/result of the list call.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserQueryResult {
    /// No query has been made yet (or the cache was reset).
    #[default]
    Idle,

    /// A refresh is currently in-flight.
    Loading,

    /// The last refresh succeeded with this page.
    Loaded(UserPage),

    /// The last refresh failed with this error message.
    Error(String),
}

/// Compute-shaped cache for the users list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQueryCompute {
    pub result: UserQueryResult,
}

impl UserQueryCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.result, UserQueryResult::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            UserQueryResult::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        match &self.result {
            UserQueryResult::Loaded(page) => Some(page.data.as_slice()),
            _ => None,
        }
    }

    pub fn total(&self) -> Option<u64> {
        match &self.result {
            UserQueryResult::Loaded(page) => Some(page.total),
            _ => None,
        }
    }
}

impl State for UserQueryCompute {
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

impl Compute for UserQueryCompute {}

/// Manual-only command that re-queries the users list.
///
/// Dispatch explicitly via `ctx.dispatch::<RefreshUsersCommand>()`.
#[derive(Debug, Default)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let page_state = snap.state::<UsersPageState>();
        let config = snap.state::<BusinessConfig>();

        Box::pin(async move {
            let api_base_url = config.api_url();
            let sorter = page_state.sorter_param();

            updater.set(UserQueryCompute {
                result: UserQueryResult::Loading,
            });

            match api::query_users(
                api_base_url.as_str(),
                page_state.page,
                page_state.page_size,
                sorter.as_deref(),
            )
            .await
            {
                Ok(page) => {
                    log::info!(
                        "users query: page {} loaded, {} of {} rows",
                        page_state.page,
                        page.data.len(),
                        page.total
                    );
                    // The selection set is transient; a fresh page clears it.
                    updater.update::<UsersPageState>(UsersPageState::clear_selection);
                    updater.set(UserQueryCompute {
                        result: UserQueryResult::Loaded(page),
                    });
                }
                Err(err) => {
                    log::error!("users query failed: {err}");
                    updater.set(UserQueryCompute {
                        result: UserQueryResult::Error(err.to_string()),
                    });
                }
            }
        })
    }
}
