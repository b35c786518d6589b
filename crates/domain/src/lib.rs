//! Character assembly domain: ranks, templates, per-character records and
//! the pure rules that derive one from the other.

pub mod entities;
pub mod error;
pub mod ids;
pub mod records;
pub mod value_objects;

pub use entities::{
    Background, CharacterClass, ClassProficiencies, Feat, Item, ItemKind, PrerequisiteFailure,
    Race, Rarity, Skill, SkillPrerequisite, SquareSize, VALID_CLASS_HIT_POINTS,
};
pub use error::DomainError;
pub use ids::{BackgroundId, CharacterId, ClassId, FeatId, ItemId, RaceId, SkillId, TraditionId};
pub use records::{
    Attributes, BulkCapacityPolicy, BulkOutcome, CharacterBoost, CharacterDefence, CharacterFeat,
    CharacterInfo, CharacterItem, CharacterRecords, CharacterSkill, CreationChoices,
};
pub use value_objects::{Ability, AbilityScores, Bulk, MasteryRank, QuantityChange};
