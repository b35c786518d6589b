//! Character info: carried bulk, class DC and hero points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::Bulk;

/// Bulk every character can carry before strength is counted.
pub const BASE_CARRY_CAPACITY: i64 = 10;
pub const DEFAULT_CLASS_DC: u8 = 13;
pub const DEFAULT_HERO_POINTS: u8 = 1;

/// What to do when an increase pushes carried bulk past the ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkCapacityPolicy {
    /// Store the new total silently
    Allow,
    /// Store the new total and flag it as over capacity
    #[default]
    Warn,
    /// Refuse the change
    Reject,
}

impl fmt::Display for BulkCapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BulkCapacityPolicy::Allow => "allow",
            BulkCapacityPolicy::Warn => "warn",
            BulkCapacityPolicy::Reject => "reject",
        };
        f.write_str(name)
    }
}

impl FromStr for BulkCapacityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(BulkCapacityPolicy::Allow),
            "warn" => Ok(BulkCapacityPolicy::Warn),
            "reject" => Ok(BulkCapacityPolicy::Reject),
            _ => Err(DomainError::parse(format!(
                "Unknown bulk capacity policy: {}",
                s
            ))),
        }
    }
}

/// Result of applying a bulk delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub previous: Bulk,
    pub bulk: Bulk,
    pub max_bulk: Bulk,
    /// The new total is above `max_bulk`
    pub over_capacity: bool,
}

/// Character info record.
///
/// # Invariants
///
/// - `bulk` is never negative
/// - `max_bulk` is fixed at creation from the strength score
///
/// Deserialization goes through [`CharacterInfo::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredInfo")]
pub struct CharacterInfo {
    character_id: CharacterId,
    max_bulk: Bulk,
    bulk: Bulk,
    pub class_dc: u8,
    pub hero_points: u8,
}

impl CharacterInfo {
    /// Carry capacity for a fresh character: `10 + floor(strength / 2)`, nothing carried.
    pub fn initialize(character_id: CharacterId, strength: u8) -> Self {
        Self {
            character_id,
            max_bulk: Self::capacity_for(strength),
            bulk: Bulk::ZERO,
            class_dc: DEFAULT_CLASS_DC,
            hero_points: DEFAULT_HERO_POINTS,
        }
    }

    /// Rebuild a stored record, refusing negative totals.
    pub fn restore(
        character_id: CharacterId,
        max_bulk: Bulk,
        bulk: Bulk,
        class_dc: u8,
        hero_points: u8,
    ) -> Result<Self, DomainError> {
        if max_bulk.is_negative() || bulk.is_negative() {
            return Err(DomainError::validation(format!(
                "Character {} info has negative bulk {}/{}",
                character_id, bulk, max_bulk
            )));
        }
        Ok(Self {
            character_id,
            max_bulk,
            bulk,
            class_dc,
            hero_points,
        })
    }

    pub fn capacity_for(strength: u8) -> Bulk {
        Bulk::from_whole(BASE_CARRY_CAPACITY + i64::from(strength / 2))
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    pub fn max_bulk(&self) -> Bulk {
        self.max_bulk
    }

    pub fn bulk(&self) -> Bulk {
        self.bulk
    }

    pub fn is_over_capacity(&self) -> bool {
        self.bulk > self.max_bulk
    }

    /// Add `delta` to the carried total.
    ///
    /// Leaves `self` untouched on error. Decreases are never refused for
    /// capacity, only for dropping below zero.
    pub fn apply_bulk_delta(
        &mut self,
        delta: Bulk,
        policy: BulkCapacityPolicy,
    ) -> Result<BulkOutcome, DomainError> {
        let previous = self.bulk;
        let next = previous
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation(format!("Bulk overflow adding {}", delta)))?;

        if next.is_negative() {
            return Err(DomainError::BulkUnderflow {
                current: previous,
                delta,
            });
        }

        let over_capacity = next > self.max_bulk;
        if over_capacity && delta > Bulk::ZERO && policy == BulkCapacityPolicy::Reject {
            return Err(DomainError::CapacityExceeded {
                attempted: next,
                max: self.max_bulk,
            });
        }

        self.bulk = next;
        Ok(BulkOutcome {
            previous,
            bulk: next,
            max_bulk: self.max_bulk,
            over_capacity,
        })
    }
}

/// Wire shape of [`CharacterInfo`] before its invariants are checked.
#[derive(Deserialize)]
struct StoredInfo {
    character_id: CharacterId,
    max_bulk: Bulk,
    bulk: Bulk,
    class_dc: u8,
    hero_points: u8,
}

impl TryFrom<StoredInfo> for CharacterInfo {
    type Error = DomainError;

    fn try_from(raw: StoredInfo) -> Result<Self, Self::Error> {
        Self::restore(
            raw.character_id,
            raw.max_bulk,
            raw.bulk,
            raw.class_dc,
            raw.hero_points,
        )
    }
}
