//! Per-character records derived from template choices.
//!
//! Everything here is pure: the builders take resolved templates and return
//! records, and persistence decides how the set is stored.

mod attributes;
mod boost;
mod defence;
mod info;
mod links;

pub use attributes::Attributes;
pub use boost::CharacterBoost;
pub use defence::{CharacterDefence, BASE_ARMOR_CLASS};
pub use info::{
    BulkCapacityPolicy, BulkOutcome, CharacterInfo, BASE_CARRY_CAPACITY, DEFAULT_CLASS_DC,
    DEFAULT_HERO_POINTS,
};
pub use links::{CharacterFeat, CharacterItem, CharacterSkill};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Background, CharacterClass, Race};
use crate::ids::CharacterId;
use crate::value_objects::{AbilityScores, MasteryRank};

/// Templates chosen at character creation, already resolved.
#[derive(Debug, Clone, Copy)]
pub struct CreationChoices<'a> {
    pub race: &'a Race,
    pub class: &'a CharacterClass,
    pub background: &'a Background,
}

/// The full set of records written when a character is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecords {
    pub attributes: Attributes,
    pub boost: CharacterBoost,
    pub defence: CharacterDefence,
    pub info: CharacterInfo,
    pub starting_feat: CharacterFeat,
    pub skills: Vec<CharacterSkill>,
}

impl CharacterRecords {
    pub fn character_id(&self) -> CharacterId {
        self.attributes.character_id
    }
}

pub fn initialize_attributes(character_id: CharacterId, scores: AbilityScores) -> Attributes {
    Attributes::initialize(character_id, scores)
}

pub fn initialize_boost(character_id: CharacterId, race: &Race) -> CharacterBoost {
    CharacterBoost::initialize(character_id, race)
}

pub fn initialize_defence(
    character_id: CharacterId,
    race: &Race,
    class: &CharacterClass,
) -> CharacterDefence {
    CharacterDefence::initialize(character_id, race, class)
}

pub fn initialize_carry_capacity(character_id: CharacterId, strength: u8) -> CharacterInfo {
    CharacterInfo::initialize(character_id, strength)
}

/// Link the background's feat. Prerequisites are not checked for granted feats.
pub fn initialize_starting_feat(
    character_id: CharacterId,
    background: &Background,
    now: DateTime<Utc>,
) -> CharacterFeat {
    CharacterFeat::new(character_id, background.feat_id, now)
}

/// Trained links for the background's skills.
pub fn initialize_background_skills(
    character_id: CharacterId,
    background: &Background,
) -> Vec<CharacterSkill> {
    background
        .distinct_skills()
        .into_iter()
        .map(|skill_id| CharacterSkill::new(character_id, skill_id, MasteryRank::Train))
        .collect()
}

/// Build every creation record for a character.
pub fn initialize_character(
    character_id: CharacterId,
    scores: AbilityScores,
    choices: CreationChoices<'_>,
    now: DateTime<Utc>,
) -> CharacterRecords {
    CharacterRecords {
        attributes: initialize_attributes(character_id, scores),
        boost: initialize_boost(character_id, choices.race),
        defence: initialize_defence(character_id, choices.race, choices.class),
        info: initialize_carry_capacity(character_id, scores.strength),
        starting_feat: initialize_starting_feat(character_id, choices.background, now),
        skills: initialize_background_skills(character_id, choices.background),
    }
}
