//! Notice state backing the toast overlay.
//!
//! Mirrors the notification contract of the action handlers: at most one
//! loading indicator at a time, plus a short-lived list of terminal toasts.
//! Handlers push from command futures through an `Updater`; the UI stamps and
//! prunes toasts against the frame clock, so this state never reads the wall
//! clock itself.

use std::any::Any;

use chrono::{DateTime, Duration, Utc};
use roster_states::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One terminal toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Stamped by the UI on the first frame the toast is visible.
    at: Option<DateTime<Utc>>,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    loading: Option<String>,
    toasts: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the in-flight indicator. A later call overwrites the text.
    pub fn set_loading(&mut self, text: impl Into<String>) {
        self.loading = Some(text.into());
    }

    /// Dismiss the in-flight indicator.
    pub fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub fn push_success(&mut self, text: impl Into<String>) {
        self.toasts.push(Notice::new(NoticeKind::Success, text));
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.toasts.push(Notice::new(NoticeKind::Error, text));
    }

    pub fn loading(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    pub fn toasts(&self) -> &[Notice] {
        &self.toasts
    }

    /// Stamp unstamped toasts with `now` and drop the ones older than `ttl`.
    ///
    /// Called once per frame by the overlay widget.
    pub fn tick(&mut self, now: DateTime<Utc>, ttl: Duration) {
        for toast in &mut self.toasts {
            if toast.at.is_none() {
                toast.at = Some(now);
            }
        }
        self.toasts
            .retain(|toast| toast.at.is_none_or(|at| now.signed_duration_since(at) < ttl));
    }

    pub fn success_count(&self) -> usize {
        self.toasts
            .iter()
            .filter(|t| t.kind == NoticeKind::Success)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.toasts
            .iter()
            .filter(|t| t.kind == NoticeKind::Error)
            .count()
    }
}

impl State for Notices {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
