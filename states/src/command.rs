use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{State, StateCtx};

/// A deferred mutation of the live `StateCtx`, applied on the UI thread.
pub(crate) type StateUpdate = Box<dyn FnOnce(&mut StateCtx) + Send>;

/// A manual-only side-effect unit.
///
/// Commands are the only place network IO is allowed. They are dispatched
/// explicitly with `StateCtx::dispatch::<C>()` — never run implicitly — and
/// receive a [`CommandSnapshot`] of the states they need plus an [`Updater`]
/// for publishing results.
pub trait Command: Default + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

/// Clones of all snapshot-able states, taken at dispatch time.
///
/// Command futures read from the snapshot instead of borrowing the live
/// context, so the UI thread never blocks on an in-flight command.
pub struct CommandSnapshot {
    states: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn new(states: HashMap<TypeId, Box<dyn Any + Send>>) -> Self {
        Self { states }
    }

    /// Clone of the snapshotted state `T`.
    ///
    /// Panics if `T` was never registered or does not implement
    /// `State::snapshot` — both are wiring bugs, not runtime conditions.
    pub fn state<T: State + Clone>(&self) -> T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .unwrap_or_else(|| {
                panic!(
                    "state `{}` has no snapshot; register it and implement State::snapshot",
                    type_name::<T>()
                )
            })
    }

    /// Clone of a snapshotted compute cache. Same semantics as [`Self::state`].
    pub fn compute<T: crate::Compute + Clone>(&self) -> T {
        self.state::<T>()
    }
}

/// Cloneable, `Send`-safe handle for publishing state mutations from
/// command futures back to the UI thread.
#[derive(Clone)]
pub struct Updater {
    send: flume::Sender<StateUpdate>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Updater {
    pub(crate) fn new(
        send: flume::Sender<StateUpdate>,
        wake: Option<Arc<dyn Fn() + Send + Sync>>,
    ) -> Self {
        Self { send, wake }
    }

    /// Replace the stored state `T` wholesale.
    pub fn set<T: State + Send>(&self, value: T) {
        self.push(Box::new(move |ctx| {
            *ctx.state_mut::<T>() = value;
        }));
    }

    /// Mutate the stored state `T` in place.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        self.push(Box::new(move |ctx| f(ctx.state_mut::<T>())));
    }

    fn push(&self, update: StateUpdate) {
        if self.send.send(update).is_err() {
            log::warn!("state update dropped: context is gone");
            return;
        }
        if let Some(wake) = &self.wake {
            wake();
        }
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("wake", &self.wake.is_some())
            .finish()
    }
}
