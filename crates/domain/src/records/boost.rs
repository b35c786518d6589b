//! Ability boost counters.

use serde::{Deserialize, Serialize};

use crate::entities::Race;
use crate::ids::CharacterId;
use crate::value_objects::Ability;

/// How many boosts a character has spent per ability, plus unspent pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBoost {
    pub character_id: CharacterId,
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    /// Free boosts not yet assigned
    pub free: u8,
    /// Boosts granted by the ancestry
    pub ancestry_boosts: u8,
}

impl CharacterBoost {
    pub fn initialize(character_id: CharacterId, race: &Race) -> Self {
        Self {
            character_id,
            strength: 0,
            dexterity: 0,
            constitution: 0,
            intelligence: 0,
            wisdom: 0,
            charisma: 0,
            free: 0,
            ancestry_boosts: race.ability_boosts,
        }
    }

    pub fn spent(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}
