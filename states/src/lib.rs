//! Typed application state container with explicit command dispatch.
//!
//! The UI layer stores every piece of page state in a [`StateCtx`], keyed by
//! type. Side effects (network IO) live in [`Command`]s that are dispatched
//! explicitly, run on a background task thread, and publish their results
//! back through an [`Updater`]. The UI thread drains pending updates once per
//! frame via [`StateCtx::apply_pending`].

mod command;
mod compute;
mod ctx;
mod state;
mod task_pool;
mod time;

pub use command::{Command, CommandSnapshot, Updater};
pub use compute::Compute;
pub use ctx::StateCtx;
pub use state::State;
pub use time::Time;
