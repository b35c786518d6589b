//! Inventory use cases.
//!
//! Handles carried-bulk accounting and the item links that drive it.

mod apply_bulk_delta;
mod error;
mod item_carry;
mod types;

use std::sync::Arc;

pub use apply_bulk_delta::ApplyBulkDelta;
pub use error::{BulkError, ItemCarryError};
pub use item_carry::ItemCarry;
pub use types::ItemCarryResult;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub bulk: Arc<ApplyBulkDelta>,
    pub carry: Arc<ItemCarry>,
}

impl InventoryUseCases {
    pub fn new(bulk: Arc<ApplyBulkDelta>, carry: Arc<ItemCarry>) -> Self {
        Self { bulk, carry }
    }
}
