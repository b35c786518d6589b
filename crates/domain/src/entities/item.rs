//! Item templates.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::Bulk;

/// Bulk assumed for items whose weight is not recorded.
pub const DEFAULT_ITEM_BULK: Bulk = Bulk::from_milli(1);

/// Category of an item, used only for display and filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Consumable,
    #[default]
    Gear,
    /// Unknown kind for forward compatibility
    #[serde(other)]
    Unknown,
}

/// An item that can be carried. Reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: ItemKind,
    /// Bulk of a single unit
    #[serde(default = "default_bulk")]
    pub bulk: Bulk,
}

fn default_bulk() -> Bulk {
    DEFAULT_ITEM_BULK
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, bulk: Bulk) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            kind: ItemKind::Gear,
            bulk,
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Carrying an item can never lower the carried total.
    pub fn check_bulk(&self) -> Result<(), DomainError> {
        if self.bulk.is_negative() {
            return Err(DomainError::validation(format!(
                "Item {} ({}) has negative bulk {}",
                self.id, self.name, self.bulk
            )));
        }
        Ok(())
    }
}
