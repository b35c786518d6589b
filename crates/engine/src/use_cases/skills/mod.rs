//! Skill training use cases.
//!
//! The only in-place update a character link ever receives is a skill's rank.

use std::sync::Arc;

use kingdom_domain::{CharacterId, CharacterSkill, MasteryRank, SkillId};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{
    CharacterRecordRepo, CharacterSkillRepo, RepoError, TemplateRepo,
};

/// Errors that can occur while training skills.
#[derive(Debug, thiserror::Error)]
pub enum SkillTrainingError {
    #[error("Skill not found: {0}")]
    SkillNotFound(SkillId),
    #[error("Character {0} has not been initialized")]
    CharacterNotInitialized(CharacterId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl SkillTrainingError {
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::SkillNotFound(_) | Self::CharacterNotInitialized(_) => true,
            Self::Repo(e) => e.is_client_error(),
        }
    }
}

/// Container for skill use cases.
pub struct SkillUseCases {
    pub training: Arc<SkillTraining>,
}

impl SkillUseCases {
    pub fn new(training: Arc<SkillTraining>) -> Self {
        Self { training }
    }
}

/// Skill rank changes and listing.
pub struct SkillTraining {
    templates: Arc<dyn TemplateRepo>,
    records: Arc<dyn CharacterRecordRepo>,
    skills: Arc<dyn CharacterSkillRepo>,
    locks: Arc<CharacterLocks>,
}

impl SkillTraining {
    pub fn new(
        templates: Arc<dyn TemplateRepo>,
        records: Arc<dyn CharacterRecordRepo>,
        skills: Arc<dyn CharacterSkillRepo>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            templates,
            records,
            skills,
            locks,
        }
    }

    /// Create the link at `rank`, or move an existing link to `rank`.
    pub async fn set_skill_mastery(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
        rank: MasteryRank,
    ) -> Result<CharacterSkill, SkillTrainingError> {
        let skill = self
            .templates
            .get_skill(skill_id)
            .await?
            .ok_or(SkillTrainingError::SkillNotFound(skill_id))?;

        let _guard = self.locks.lock(character_id).await;
        if self.records.get_info(character_id).await?.is_none() {
            return Err(SkillTrainingError::CharacterNotInitialized(character_id));
        }
        let link = match self.skills.get(character_id, skill_id).await? {
            Some(mut existing) => {
                existing.mastery = rank;
                existing
            }
            None => CharacterSkill::new(character_id, skill_id, rank),
        };
        self.skills.upsert(&link).await?;

        tracing::info!(
            character_id = %character_id,
            skill = %skill.name,
            rank = %rank,
            "Skill mastery set"
        );

        Ok(link)
    }

    pub async fn list_skills(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterSkill>, SkillTrainingError> {
        Ok(self.skills.list_for_character(character_id).await?)
    }
}
