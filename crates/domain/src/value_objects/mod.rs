//! Value objects - Immutable objects defined by their attributes

mod ability;
mod bulk;
mod mastery;
mod quantity;

pub use ability::{Ability, AbilityScores, DEFAULT_ABILITY_SCORE};
pub use bulk::Bulk;
pub use mastery::MasteryRank;
pub use quantity::QuantityChange;
