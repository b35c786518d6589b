//! Time source for acquisition timestamps.

use chrono::{DateTime, Utc};

/// Stamps feat links as they are created.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
