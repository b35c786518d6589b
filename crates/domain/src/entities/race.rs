//! Race (ancestry) templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RaceId;

/// Space a creature occupies on the battle grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl fmt::Display for SquareSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SquareSize::Tiny => "Tiny",
            SquareSize::Small => "Small",
            SquareSize::Medium => "Medium",
            SquareSize::Large => "Large",
            SquareSize::Huge => "Huge",
            SquareSize::Gargantuan => "Gargantuan",
        };
        f.write_str(name)
    }
}

impl FromStr for SquareSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiny" => Ok(SquareSize::Tiny),
            "small" => Ok(SquareSize::Small),
            "medium" => Ok(SquareSize::Medium),
            "large" => Ok(SquareSize::Large),
            "huge" => Ok(SquareSize::Huge),
            "gargantuan" => Ok(SquareSize::Gargantuan),
            _ => Err(DomainError::parse(format!("Unknown square size: {}", s))),
        }
    }
}

/// Ancestry reference data. Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub description: String,
    /// Ancestry hit points added to the class contribution at level 1
    pub hit_points: u16,
    pub size: SquareSize,
    /// Land speed in feet
    pub speed: u8,
    /// Number of free ancestry ability boosts
    pub ability_boosts: u8,
    pub language: Option<String>,
}

impl Race {
    pub fn new(id: RaceId, name: impl Into<String>, hit_points: u16) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            hit_points,
            size: SquareSize::Medium,
            speed: 25,
            ability_boosts: 2,
            language: None,
        }
    }

    pub fn with_speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: SquareSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_ability_boosts(mut self, boosts: u8) -> Self {
        self.ability_boosts = boosts;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
