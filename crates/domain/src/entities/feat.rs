//! Feat entity for character abilities.
//!
//! A feat may be gated behind a trained skill. The gate is a single optional
//! skill id with an optional minimum rank; when the skill is set but the rank
//! is not, trained is assumed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{FeatId, SkillId};
use crate::value_objects::MasteryRank;

/// Rank assumed when a feat names a prerequisite skill but no rank.
pub const DEFAULT_PREREQUISITE_RANK: MasteryRank = MasteryRank::Train;

/// How commonly a feat is available at the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Unique,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Unique => "unique",
        };
        f.write_str(name)
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "unique" => Ok(Rarity::Unique),
            _ => Err(DomainError::parse(format!("Unknown rarity: {}", s))),
        }
    }
}

/// Skill gate on a feat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPrerequisite {
    pub skill_id: SkillId,
    pub required: MasteryRank,
}

/// Why a character failed a feat's skill gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrerequisiteFailure {
    /// The character has no link to the required skill at all
    SkillMissing { skill_id: SkillId },
    /// The character's rank in the skill is too low
    RankTooLow {
        skill_id: SkillId,
        required: MasteryRank,
        actual: MasteryRank,
    },
}

/// A feat that a character can acquire.
///
/// Simple data struct: any combination of fields is valid, so fields are public.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feat {
    pub id: FeatId,
    pub name: String,
    pub description: String,
    /// Minimum character level
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub rarity: Rarity,
    /// Skill the character must hold a link for
    #[serde(default)]
    pub prerequisite_skill: Option<SkillId>,
    /// Rank required in `prerequisite_skill`
    #[serde(default)]
    pub prerequisite_mastery: Option<MasteryRank>,
}

fn default_level() -> u8 {
    1
}

impl Feat {
    pub fn new(id: FeatId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            level: 1,
            rarity: Rarity::Common,
            prerequisite_skill: None,
            prerequisite_mastery: None,
        }
    }

    pub fn with_prerequisite(mut self, skill_id: SkillId, required: MasteryRank) -> Self {
        self.prerequisite_skill = Some(skill_id);
        self.prerequisite_mastery = Some(required);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// The effective skill gate, if any.
    pub fn prerequisite(&self) -> Option<SkillPrerequisite> {
        self.prerequisite_skill.map(|skill_id| SkillPrerequisite {
            skill_id,
            required: self
                .prerequisite_mastery
                .unwrap_or(DEFAULT_PREREQUISITE_RANK),
        })
    }

    /// Check the skill gate against the character's rank in the gating skill.
    ///
    /// `held` is `None` when the character has no link for that skill.
    /// Feats without a gate always pass.
    pub fn check_prerequisite(&self, held: Option<MasteryRank>) -> Result<(), PrerequisiteFailure> {
        let Some(gate) = self.prerequisite() else {
            return Ok(());
        };
        let Some(actual) = held else {
            return Err(PrerequisiteFailure::SkillMissing {
                skill_id: gate.skill_id,
            });
        };
        if actual.at_least(gate.required) {
            Ok(())
        } else {
            Err(PrerequisiteFailure::RankTooLow {
                skill_id: gate.skill_id,
                required: gate.required,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated_feat(required: MasteryRank) -> Feat {
        Feat::new(FeatId::new(7), "Battle Medicine").with_prerequisite(SkillId::new(3), required)
    }

    #[test]
    fn ungated_feat_always_passes() {
        let feat = Feat::new(FeatId::new(1), "Toughness");
        assert!(feat.prerequisite().is_none());
        assert_eq!(feat.check_prerequisite(None), Ok(()));
    }

    #[test]
    fn expert_gate_accepts_expert_and_above() {
        let feat = gated_feat(MasteryRank::Expert);
        for rank in [MasteryRank::Expert, MasteryRank::Master, MasteryRank::Legend] {
            assert_eq!(feat.check_prerequisite(Some(rank)), Ok(()));
        }
    }

    #[test]
    fn expert_gate_rejects_lower_ranks() {
        let feat = gated_feat(MasteryRank::Expert);
        for rank in [MasteryRank::None, MasteryRank::Train] {
            assert_eq!(
                feat.check_prerequisite(Some(rank)),
                Err(PrerequisiteFailure::RankTooLow {
                    skill_id: SkillId::new(3),
                    required: MasteryRank::Expert,
                    actual: rank,
                })
            );
        }
    }

    #[test]
    fn missing_link_is_reported_separately() {
        let feat = gated_feat(MasteryRank::Train);
        assert_eq!(
            feat.check_prerequisite(None),
            Err(PrerequisiteFailure::SkillMissing {
                skill_id: SkillId::new(3)
            })
        );
    }

    #[test]
    fn gate_without_rank_requires_trained() {
        let mut feat = Feat::new(FeatId::new(2), "Cat Fall");
        feat.prerequisite_skill = Some(SkillId::new(4));

        assert_eq!(
            feat.prerequisite().map(|p| p.required),
            Some(MasteryRank::Train)
        );
        assert!(feat.check_prerequisite(Some(MasteryRank::None)).is_err());
        assert!(feat.check_prerequisite(Some(MasteryRank::Train)).is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let feat: Feat = serde_json::from_str(
            r#"{"id":9,"name":"Assurance","description":"","prerequisiteSkill":2,"prerequisiteMastery":"Trained"}"#,
        )
        .unwrap();
        assert_eq!(feat.level, 1);
        assert_eq!(feat.rarity, Rarity::Common);
        assert_eq!(feat.prerequisite_mastery, Some(MasteryRank::Train));
    }
}
