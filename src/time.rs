//! Wall-clock access
//!
//! Expense timestamps and the current-month filter both read "now" through
//! a [`Clock`] so the store stays deterministic under test.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime};

/// Clock abstracts access to the current local timestamp.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A manually driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: NaiveDateTime) {
        match self.instant.lock() {
            Ok(mut guard) => *guard = instant,
            Err(poisoned) => *poisoned.into_inner() = instant,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.instant.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
