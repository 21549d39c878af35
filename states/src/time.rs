use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Frame-stamped wall clock.
///
/// The app overwrites this once per frame; widgets and business code read it
/// instead of calling `Utc::now()` directly so tests can pin "now".
#[derive(Debug, Clone, Copy)]
pub struct Time(DateTime<Utc>);

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.0 = now;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl State for Time {
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
