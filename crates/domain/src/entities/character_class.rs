//! Character class templates and the proficiencies they grant at level 1.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{ClassId, TraditionId};
use crate::value_objects::MasteryRank;

/// Hit points a class may grant per level.
pub const VALID_CLASS_HIT_POINTS: [u16; 4] = [6, 8, 10, 12];

/// Starting proficiencies granted by a class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassProficiencies {
    // Saves and checks
    pub perception: MasteryRank,
    pub fortitude: MasteryRank,
    pub reflex: MasteryRank,
    pub will: MasteryRank,
    pub class_dc: MasteryRank,
    pub spell_attack: MasteryRank,

    // Armor categories
    pub unarmored: MasteryRank,
    pub light_armor: MasteryRank,
    pub medium_armor: MasteryRank,
    pub heavy_armor: MasteryRank,

    // Weapon categories
    pub unarmed_weapons: MasteryRank,
    pub common_weapons: MasteryRank,
    pub martial_weapons: MasteryRank,
}

/// Class reference data. Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: ClassId,
    pub name: String,
    /// Hit points granted per level; one of [`VALID_CLASS_HIT_POINTS`]
    pub hit_points: u16,
    pub proficiencies: ClassProficiencies,
    /// Casting tradition for spellcasting classes
    pub tradition_id: Option<TraditionId>,
}

impl CharacterClass {
    pub fn new(id: ClassId, name: impl Into<String>, hit_points: u16) -> Result<Self, DomainError> {
        if !VALID_CLASS_HIT_POINTS.contains(&hit_points) {
            return Err(DomainError::validation(format!(
                "Class hit points must be one of {:?}, got {}",
                VALID_CLASS_HIT_POINTS, hit_points
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            hit_points,
            proficiencies: ClassProficiencies::default(),
            tradition_id: None,
        })
    }

    pub fn with_proficiencies(mut self, proficiencies: ClassProficiencies) -> Self {
        self.proficiencies = proficiencies;
        self
    }

    pub fn with_tradition(mut self, tradition_id: TraditionId) -> Self {
        self.tradition_id = Some(tradition_id);
        self
    }

    pub fn is_spellcaster(&self) -> bool {
        self.tradition_id.is_some()
    }
}
