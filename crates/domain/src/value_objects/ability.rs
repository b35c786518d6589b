//! The six ability scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Score every ability starts at when not supplied.
pub const DEFAULT_ABILITY_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Ability::Strength),
            "dexterity" | "dex" => Ok(Ability::Dexterity),
            "constitution" | "con" => Ok(Ability::Constitution),
            "intelligence" | "int" => Ok(Ability::Intelligence),
            "wisdom" | "wis" => Ok(Ability::Wisdom),
            "charisma" | "cha" => Ok(Ability::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}

/// A full set of ability scores.
///
/// Missing fields in serialized input fall back to [`DEFAULT_ABILITY_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: DEFAULT_ABILITY_SCORE,
            dexterity: DEFAULT_ABILITY_SCORE,
            constitution: DEFAULT_ABILITY_SCORE,
            intelligence: DEFAULT_ABILITY_SCORE,
            wisdom: DEFAULT_ABILITY_SCORE,
            charisma: DEFAULT_ABILITY_SCORE,
        }
    }
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn with(mut self, ability: Ability, score: u8) -> Self {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ten_everywhere() {
        let scores = AbilityScores::default();
        for ability in Ability::ALL {
            assert_eq!(scores.get(ability), 10);
        }
    }

    #[test]
    fn omitted_fields_default_when_deserializing() {
        let scores: AbilityScores = serde_json::from_str(r#"{"strength": 14}"#).unwrap();
        assert_eq!(scores.strength, 14);
        assert_eq!(scores.charisma, 10);
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("STR".parse::<Ability>().unwrap(), Ability::Strength);
        assert_eq!("Wisdom".parse::<Ability>().unwrap(), Ability::Wisdom);
        assert!("Luck".parse::<Ability>().is_err());
    }

    #[test]
    fn with_replaces_a_single_score() {
        let scores = AbilityScores::default().with(Ability::Dexterity, 16);
        assert_eq!(scores.dexterity, 16);
        assert_eq!(scores.strength, 10);
    }
}
