//! Character-to-template links: feats, skills and carried items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{CharacterId, FeatId, ItemId, SkillId};
use crate::value_objects::{MasteryRank, QuantityChange};

/// A feat held by a character. Unique per (character, feat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFeat {
    pub character_id: CharacterId,
    pub feat_id: FeatId,
    pub acquired_at: DateTime<Utc>,
}

impl CharacterFeat {
    pub fn new(character_id: CharacterId, feat_id: FeatId, acquired_at: DateTime<Utc>) -> Self {
        Self {
            character_id,
            feat_id,
            acquired_at,
        }
    }
}

/// A character's rank in a skill. Unique per (character, skill).
///
/// The rank is the only field ever updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub character_id: CharacterId,
    pub skill_id: SkillId,
    pub mastery: MasteryRank,
}

impl CharacterSkill {
    pub fn new(character_id: CharacterId, skill_id: SkillId, mastery: MasteryRank) -> Self {
        Self {
            character_id,
            skill_id,
            mastery,
        }
    }
}

/// Units of an item carried by a character. Unique per (character, item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterItem {
    pub character_id: CharacterId,
    pub item_id: ItemId,
    quantity: u32,
}

impl CharacterItem {
    pub fn new(character_id: CharacterId, item_id: ItemId, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation("Carried quantity must be positive"));
        }
        Ok(Self {
            character_id,
            item_id,
            quantity,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Re-quantify, returning the change. Callers drop the link when the
    /// change reports `should_remove`.
    pub fn set_quantity(&mut self, quantity: u32) -> QuantityChange {
        let change = QuantityChange::new(self.quantity, quantity);
        self.quantity = quantity;
        change
    }
}
