//! [`ClockPort`] implementations.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::ClockPort;

/// Reads the system time on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that starts at a fixed instant and moves `step` forward on
/// every read. A zero step keeps it frozen.
#[cfg(test)]
pub struct FixedClock {
    start: DateTime<Utc>,
    step: chrono::Duration,
    reads: std::sync::atomic::AtomicI32,
}

#[cfg(test)]
impl FixedClock {
    pub fn at(start: DateTime<Utc>) -> Self {
        Self::stepping(start, chrono::Duration::zero())
    }

    pub fn stepping(start: DateTime<Utc>, step: chrono::Duration) -> Self {
        Self {
            start,
            step,
            reads: std::sync::atomic::AtomicI32::new(0),
        }
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self
            .reads
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.start + self.step * n
    }
}
