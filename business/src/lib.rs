//! Business layer for the Roster admin console.
//!
//! This crate is the single home for:
//! - Domain types and the column/field schema for the users page
//! - The HTTP service client for the remote rule API
//! - Action handlers wrapping each mutating call plus its notices
//! - States, compute caches and commands consumed by the UI
//!
//! UI code under `ui/src/widgets/**` should not define domain `State` or
//! `Command` types. It reads via `ctx.cached::<T>()` / `ctx.state::<T>()`
//! and triggers changes via `ctx.dispatch::<Cmd>()`.

mod config;
mod notices;
pub mod users;

pub use config::BusinessConfig;
pub use notices::{Notice, NoticeKind, Notices};
pub use roster_utils::version_info;

pub use users::actions::{
    RemoveSelectedCommand, SubmitCreateCommand, SubmitUpdateCommand, UserActionCompute,
    UserActionKind, UserActionState,
};
pub use users::api::{ApiError, ApiResult};
pub use users::handlers::{handle_add, handle_remove, handle_update};
pub use users::query::{RefreshUsersCommand, UserQueryCompute, UserQueryResult};
pub use users::schema::{CellKind, ColumnSpec, form_columns, status_label, user_columns};
pub use users::state::{SortOrder, SortSpec, UserForm, UsersPageState};
pub use users::types::{
    CreateUserRequest, RemoveUsersRequest, UpdateRuleRequest, UserPage, UserRecord,
};
