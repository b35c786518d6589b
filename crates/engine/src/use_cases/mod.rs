//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific part of character assembly.

pub mod creation;
pub mod feats;
pub mod inventory;
pub mod skills;

pub use creation::CreationUseCases;
pub use feats::FeatUseCases;
pub use inventory::InventoryUseCases;
pub use skills::SkillUseCases;
