//! Skill templates.

use serde::{Deserialize, Serialize};

use crate::ids::SkillId;
use crate::value_objects::Ability;

/// A skill that characters can be trained in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The ability this skill keys off (e.g. Strength for Athletics)
    pub key_ability: Ability,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>, key_ability: Ability) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            key_ability,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
