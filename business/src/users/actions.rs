//! Mutation flow cache + submit/remove commands.
//!
//! UI dispatches a command; the command runs the matching action handler
//! (which owns the notices) and records the terminal outcome in
//! [`UserActionCompute`]. The panel reacts to `Done` exactly once — closing
//! the modal and requesting a reload — then resets the cache to `Idle`.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use roster_states::{Command, CommandSnapshot, Compute, State, Updater};

use crate::BusinessConfig;

use super::handlers;
use super::query::UserQueryCompute;
use super::state::UsersPageState;
use super::types::UserRecord;

/// Which mutating flow an action state refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserActionKind {
    Create,
    Update,
    Remove,
}

/// Per-invocation action state machine: terminal in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserActionState {
    /// No active action.
    #[default]
    Idle,

    /// An action is currently running.
    InFlight { kind: UserActionKind },

    /// An action settled with this outcome.
    Done { kind: UserActionKind, ok: bool },
}

/// Compute-shaped cache for the users page's mutating actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserActionCompute {
    pub state: UserActionState,
}

impl UserActionCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, UserActionState::InFlight { .. })
    }

    pub fn in_flight_kind(&self) -> Option<UserActionKind> {
        match self.state {
            UserActionState::InFlight { kind } => Some(kind),
            _ => None,
        }
    }

    pub fn state(&self) -> UserActionState {
        self.state
    }
}

impl State for UserActionCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}

impl Compute for UserActionCompute {}

fn set_in_flight(updater: &Updater, kind: UserActionKind) {
    updater.set(UserActionCompute {
        state: UserActionState::InFlight { kind },
    });
}

fn set_done(updater: &Updater, kind: UserActionKind, ok: bool) {
    updater.set(UserActionCompute {
        state: UserActionState::Done { kind, ok },
    });
}

/// Submit the create form. Runs `handle_add` against the create-form buffers.
#[derive(Debug, Default)]
pub struct SubmitCreateCommand;

impl Command for SubmitCreateCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let page_state = snap.state::<UsersPageState>();
        let config = snap.state::<BusinessConfig>();

        Box::pin(async move {
            set_in_flight(&updater, UserActionKind::Create);
            let ok = handlers::handle_add(
                config.api_url().as_str(),
                &page_state.create_form,
                &updater,
            )
            .await;
            set_done(&updater, UserActionKind::Create, ok);
        })
    }
}

/// Submit the update form. Runs `handle_update` against the update-form
/// buffers (the handler narrows the payload itself).
#[derive(Debug, Default)]
pub struct SubmitUpdateCommand;

impl Command for SubmitUpdateCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let page_state = snap.state::<UsersPageState>();
        let config = snap.state::<BusinessConfig>();

        Box::pin(async move {
            set_in_flight(&updater, UserActionKind::Update);
            let ok = handlers::handle_update(
                config.api_url().as_str(),
                &page_state.update_form,
                &updater,
            )
            .await;
            set_done(&updater, UserActionKind::Update, ok);
        })
    }
}

/// Batch-delete the checked rows of the last loaded page.
///
/// Settles even when the selection is empty (the handler's no-op success),
/// so the panel's reload-on-settle applies to both paths.
#[derive(Debug, Default)]
pub struct RemoveSelectedCommand;

impl Command for RemoveSelectedCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: tokio_util::sync::CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let page_state = snap.state::<UsersPageState>();
        let query = snap.compute::<UserQueryCompute>();
        let config = snap.state::<BusinessConfig>();

        Box::pin(async move {
            let selected_rows: Vec<UserRecord> = query
                .users()
                .unwrap_or_default()
                .iter()
                .filter(|row| page_state.selected.contains(&row.id))
                .cloned()
                .collect();

            set_in_flight(&updater, UserActionKind::Remove);
            let ok =
                handlers::handle_remove(config.api_url().as_str(), &selected_rows, &updater).await;
            set_done(&updater, UserActionKind::Remove, ok);
        })
    }
}
