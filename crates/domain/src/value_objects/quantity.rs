//! Quantity value object for carried items

use serde::{Deserialize, Serialize};

use super::Bulk;

/// A change in how many units of an item a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub before: u32,
    pub after: u32,
}

impl QuantityChange {
    pub fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }

    /// Adding `amount` units on top of `current`, or `None` past `u32::MAX`.
    pub fn add(current: u32, amount: u32) -> Option<Self> {
        current
            .checked_add(amount)
            .map(|after| Self::new(current, after))
    }

    /// Dropping everything.
    pub fn remove_all(current: u32) -> Self {
        Self::new(current, 0)
    }

    /// Signed unit difference
    pub fn delta(&self) -> i64 {
        i64::from(self.after) - i64::from(self.before)
    }

    /// Check if this change leaves nothing to track
    pub fn should_remove(&self) -> bool {
        self.after == 0
    }

    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }

    /// Bulk contribution of this change for an item of the given unit bulk.
    pub fn bulk_delta(&self, unit_bulk: Bulk) -> Option<Bulk> {
        unit_bulk.times(self.delta())
    }
}
