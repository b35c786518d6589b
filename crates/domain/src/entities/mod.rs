//! Template entities - read-only reference data characters are built from

mod background;
mod character_class;
mod feat;
mod item;
mod race;
mod skill;

pub use background::Background;
pub use character_class::{CharacterClass, ClassProficiencies, VALID_CLASS_HIT_POINTS};
pub use feat::{
    Feat, PrerequisiteFailure, Rarity, SkillPrerequisite, DEFAULT_PREREQUISITE_RANK,
};
pub use item::{Item, ItemKind, DEFAULT_ITEM_BULK};
pub use race::{Race, SquareSize};
pub use skill::Skill;
