//! Proficiency ("mastery") ranks and their total order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Proficiency rank for skills, saves, armor and weapons.
///
/// The declaration order is the rank order, so the derived `Ord` is the one
/// and only comparison used anywhere in the engine. Decoding always goes
/// through [`FromStr`], so serialized data accepts the same spellings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum MasteryRank {
    /// Untrained
    #[default]
    None,
    /// Basic training
    Train,
    /// Advanced training
    Expert,
    /// Mastery
    Master,
    /// Ultimate mastery
    Legend,
}

impl MasteryRank {
    /// Every rank, lowest first.
    pub const ALL: [MasteryRank; 5] = [
        MasteryRank::None,
        MasteryRank::Train,
        MasteryRank::Expert,
        MasteryRank::Master,
        MasteryRank::Legend,
    ];

    /// Numeric position in the order: None is 0, Legend is 4.
    pub const fn rank(self) -> u8 {
        match self {
            MasteryRank::None => 0,
            MasteryRank::Train => 1,
            MasteryRank::Expert => 2,
            MasteryRank::Master => 3,
            MasteryRank::Legend => 4,
        }
    }

    /// Whether `self` meets or beats `required`.
    pub const fn at_least(self, required: MasteryRank) -> bool {
        self.rank() >= required.rank()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MasteryRank::None => "None",
            MasteryRank::Train => "Train",
            MasteryRank::Expert => "Expert",
            MasteryRank::Master => "Master",
            MasteryRank::Legend => "Legend",
        }
    }
}

impl fmt::Display for MasteryRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MasteryRank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(MasteryRank::None),
            "train" | "trained" => Ok(MasteryRank::Train),
            "expert" => Ok(MasteryRank::Expert),
            "master" => Ok(MasteryRank::Master),
            "legend" | "legendary" => Ok(MasteryRank::Legend),
            _ => Err(DomainError::invalid_rank(s)),
        }
    }
}

impl TryFrom<String> for MasteryRank {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
