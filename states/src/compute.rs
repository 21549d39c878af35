use crate::State;

/// Marker for compute-shaped caches.
///
/// A `Compute` is a plain [`State`] holding the latest status/result of an
/// async flow (typically an `Idle / Loading / Loaded / Error` enum). It is
/// read by the UI via `StateCtx::cached` and written only by commands through
/// an `Updater` — never mutated inline by widgets, so render code stays a
/// pure function of state.
pub trait Compute: State {}
