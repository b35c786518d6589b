//! Background templates.

use serde::{Deserialize, Serialize};

use crate::ids::{BackgroundId, FeatId, SkillId};

/// Background reference data: one granted feat and two trained skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub id: BackgroundId,
    pub name: String,
    pub description: String,
    pub feat_id: FeatId,
    pub skill_ids: [SkillId; 2],
}

impl Background {
    pub fn new(
        id: BackgroundId,
        name: impl Into<String>,
        feat_id: FeatId,
        skill_ids: [SkillId; 2],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            feat_id,
            skill_ids,
        }
    }

    /// Granted skills without repeats.
    pub fn distinct_skills(&self) -> Vec<SkillId> {
        let [first, second] = self.skill_ids;
        if first == second {
            vec![first]
        } else {
            vec![first, second]
        }
    }
}
