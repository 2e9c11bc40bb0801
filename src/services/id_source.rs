//! Identifier generation for new search engines.
//!
//! Ids are derived from the wall clock in milliseconds. The `IdSource` trait
//! lets tests substitute a deterministic sequence.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of fresh, never reused engine ids.
pub trait IdSource: Send + Sync + std::fmt::Debug {
    /// Produce the next id.
    fn next_id(&self) -> String;
}

/// Type alias for shared id source.
pub type SharedIdSource = Arc<dyn IdSource>;

/// Production implementation using the current timestamp.
///
/// Two calls within the same millisecond would collide, so the value is
/// bumped past the last one handed out. Ids are strictly increasing.
#[derive(Debug, Default)]
pub struct TimestampIdSource {
    last: AtomicI64,
}

impl TimestampIdSource {
    /// Create a new TimestampIdSource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared TimestampIdSource.
    pub fn shared() -> SharedIdSource {
        Arc::new(Self::new())
    }

    fn next_millis(&self, now: i64) -> i64 {
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

impl IdSource for TimestampIdSource {
    fn next_id(&self) -> String {
        self.next_millis(Utc::now().timestamp_millis()).to_string()
    }
}

/// Test implementation handing out `start`, `start + 1`, ...
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicI64,
}

impl SequentialIdSource {
    pub fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }

    /// Create a shared SequentialIdSource.
    pub fn shared(start: i64) -> Arc<Self> {
        Arc::new(Self::starting_at(start))
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::SeqCst).to_string()
    }
}
