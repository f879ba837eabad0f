//! Session identifier generation.
//!
//! Ids are millisecond Unix timestamps rendered as decimal strings. Two
//! sessions created in the same millisecond would collide, so the generator
//! bumps to `last + 1` whenever the clock has not advanced.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

#[derive(Debug, Default)]
pub struct SessionIdGenerator {
    last: AtomicU64,
}

impl SessionIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, strictly greater than every id handed out before.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_after(now).to_string()
    }

    fn next_after(&self, now: u64) -> u64 {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}
