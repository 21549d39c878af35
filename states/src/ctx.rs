use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::command::{Command, CommandSnapshot, StateUpdate, Updater};
use crate::compute::Compute;
use crate::state::State;
use crate::task_pool::TaskPool;

/// Container for all page state, keyed by type.
///
/// Owned by the UI thread. Widgets read and mutate states inline; command
/// futures publish their results through the [`Updater`] queue, which the UI
/// drains once per frame with [`StateCtx::apply_pending`].
pub struct StateCtx {
    states: HashMap<TypeId, Box<dyn State>>,
    pending_send: flume::Sender<StateUpdate>,
    pending_recv: flume::Receiver<StateUpdate>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
    tasks: TaskPool,
}

impl StateCtx {
    pub fn new() -> Self {
        let (pending_send, pending_recv) = flume::unbounded();
        Self {
            states: HashMap::new(),
            pending_send,
            pending_recv,
            wake: None,
            tasks: TaskPool::new(),
        }
    }

    /// Register a state. Replaces any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Register a compute-shaped cache. Same storage as `add_state`; the
    /// separate name keeps call sites honest about what they are wiring.
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.add_state(compute);
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref())
    }

    /// Shared reference to the state `T`. Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state()
            .unwrap_or_else(|| panic!("state `{}` was not registered", type_name::<T>()))
    }

    /// Mutable reference to the state `T`. Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut())
            .unwrap_or_else(|| panic!("state `{}` was not registered", type_name::<T>()))
    }

    /// Mutate the state `T` in place, immediately, on the calling thread.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Read a compute-shaped cache.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_state()
    }

    /// Install the repaint callback invoked whenever a command publishes an
    /// update. The UI passes `egui::Context::request_repaint` here.
    pub fn set_wake(&mut self, wake: impl Fn() + Send + Sync + 'static) {
        self.wake = Some(Arc::new(wake));
    }

    /// Handle for publishing deferred mutations from command futures.
    pub fn updater(&self) -> Updater {
        Updater::new(self.pending_send.clone(), self.wake.clone())
    }

    /// Drain and apply all pending updates. Returns how many were applied.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.pending_recv.try_recv() {
            update(self);
            applied += 1;
        }
        applied
    }

    /// Dispatch the command `C` onto the background task thread.
    ///
    /// The command receives a snapshot of all snapshot-able states taken
    /// right now, so later UI mutations cannot race into its inputs.
    pub fn dispatch<C: Command>(&self) {
        let snap = self.snapshot();
        let fut = C::default().run(snap, self.updater(), CancellationToken::new());
        self.tasks.spawn(fut);
    }

    fn snapshot(&self) -> CommandSnapshot {
        let states = self
            .states
            .iter()
            .filter_map(|(type_id, state)| state.snapshot().map(|boxed| (*type_id, boxed)))
            .collect();
        CommandSnapshot::new(states)
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("pending", &self.pending_recv.len())
            .finish()
    }
}
