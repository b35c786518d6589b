//! Per-character ability scores.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::AbilityScores;

/// Ability scores owned by one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub character_id: CharacterId,
    pub scores: AbilityScores,
}

impl Attributes {
    /// Bind a score set to a character. Scores left at their default stay at 10.
    pub fn initialize(character_id: CharacterId, scores: AbilityScores) -> Self {
        Self {
            character_id,
            scores,
        }
    }
}
