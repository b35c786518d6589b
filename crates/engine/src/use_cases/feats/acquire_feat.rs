//! Acquire feat use case.
//!
//! Grants a feat to an initialized character after checking its skill
//! prerequisite.

use std::sync::Arc;

use kingdom_domain::{CharacterFeat, CharacterId, FeatId, PrerequisiteFailure};

use crate::infrastructure::ports::{
    CharacterFeatRepo, CharacterRecordRepo, CharacterSkillRepo, ClockPort, RepoError,
    TemplateRepo,
};

use super::error::FeatAcquisitionError;

/// Acquire feat use case.
///
/// Orchestrates: feat lookup, character check, prerequisite check, unique
/// link insert.
pub struct AcquireFeat {
    templates: Arc<dyn TemplateRepo>,
    records: Arc<dyn CharacterRecordRepo>,
    feats: Arc<dyn CharacterFeatRepo>,
    skills: Arc<dyn CharacterSkillRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AcquireFeat {
    pub fn new(
        templates: Arc<dyn TemplateRepo>,
        records: Arc<dyn CharacterRecordRepo>,
        feats: Arc<dyn CharacterFeatRepo>,
        skills: Arc<dyn CharacterSkillRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            templates,
            records,
            feats,
            skills,
            clock,
        }
    }

    /// Execute the acquire feat use case.
    ///
    /// Uniqueness is left to the repository's insert, so two racing requests
    /// for the same feat produce one link and one `DuplicateFeat`.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        feat_id: FeatId,
    ) -> Result<CharacterFeat, FeatAcquisitionError> {
        let feat = self
            .templates
            .get_feat(feat_id)
            .await?
            .ok_or(FeatAcquisitionError::FeatNotFound(feat_id))?;

        if self.records.get_info(character_id).await?.is_none() {
            return Err(FeatAcquisitionError::CharacterNotInitialized(character_id));
        }

        if let Some(gate) = feat.prerequisite() {
            let held = self
                .skills
                .get(character_id, gate.skill_id)
                .await?
                .map(|link| link.mastery);

            if let Err(failure) = feat.check_prerequisite(held) {
                tracing::warn!(
                    character_id = %character_id,
                    feat_id = %feat_id,
                    skill_id = %gate.skill_id,
                    required = %gate.required,
                    "Feat prerequisite not met"
                );
                return Err(match failure {
                    PrerequisiteFailure::SkillMissing { skill_id } => {
                        FeatAcquisitionError::PrerequisiteSkillMissing { skill_id }
                    }
                    PrerequisiteFailure::RankTooLow {
                        skill_id,
                        required,
                        actual,
                    } => FeatAcquisitionError::PrerequisiteNotMet {
                        skill_id,
                        required,
                        actual,
                    },
                });
            }
        }

        let link = CharacterFeat::new(character_id, feat_id, self.clock.now());
        self.feats.insert(&link).await.map_err(|e| match e {
            RepoError::AlreadyExists { .. } => FeatAcquisitionError::DuplicateFeat {
                character_id,
                feat_id,
            },
            other => FeatAcquisitionError::Repo(other),
        })?;

        tracing::info!(
            character_id = %character_id,
            feat_id = %feat_id,
            feat = %feat.name,
            "Feat acquired"
        );

        Ok(link)
    }
}
