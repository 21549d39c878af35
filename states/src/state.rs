use std::any::Any;

/// A single piece of application state stored in a `StateCtx`.
///
/// Each state type is stored at most once, keyed by its `TypeId`. States that
/// commands need to read asynchronously must also provide a [`State::snapshot`]
/// so a clone can travel into the command future.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned, `Send`-safe copy of this state for command snapshots.
    ///
    /// Defaults to `None`: states that commands never read do not need to be
    /// clonable.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
