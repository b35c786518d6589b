//! Defence statistics derived from race and class.

use serde::{Deserialize, Serialize};

use crate::entities::{CharacterClass, Race};
use crate::ids::CharacterId;
use crate::value_objects::MasteryRank;

/// Armor class before armor and dexterity are applied.
pub const BASE_ARMOR_CLASS: u8 = 10;

/// A character's defence record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDefence {
    pub character_id: CharacterId,
    pub armor_class: u8,

    pub perception: MasteryRank,
    pub fortitude: MasteryRank,
    pub reflex: MasteryRank,
    pub will: MasteryRank,
    pub unarmed: MasteryRank,
    pub light_armor: MasteryRank,
    pub medium_armor: MasteryRank,
    pub heavy_armor: MasteryRank,

    pub max_hit_points: u16,
    pub hit_points: u16,
    pub temporary_hit_points: u16,
    pub dying: u8,
    pub wounded: bool,
    /// Land speed in feet
    pub speed: u8,
}

impl CharacterDefence {
    /// Level 1 defence: hit points are the ancestry and class contributions
    /// summed, and the character starts unhurt.
    pub fn initialize(character_id: CharacterId, race: &Race, class: &CharacterClass) -> Self {
        let max_hit_points = race.hit_points.saturating_add(class.hit_points);
        let p = &class.proficiencies;
        Self {
            character_id,
            armor_class: BASE_ARMOR_CLASS,
            perception: p.perception,
            fortitude: p.fortitude,
            reflex: p.reflex,
            will: p.will,
            unarmed: p.unarmored,
            light_armor: p.light_armor,
            medium_armor: p.medium_armor,
            heavy_armor: p.heavy_armor,
            max_hit_points,
            hit_points: max_hit_points,
            temporary_hit_points: 0,
            dying: 0,
            wounded: false,
            speed: race.speed,
        }
    }
}
