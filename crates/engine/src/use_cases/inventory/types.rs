//! Inventory result types.

use kingdom_domain::{BulkOutcome, ItemId};

/// Result of changing how many units of an item a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCarryResult {
    pub item_id: ItemId,
    /// Units carried after the change; zero means the link was dropped
    pub quantity: u32,
    pub bulk: BulkOutcome,
}
