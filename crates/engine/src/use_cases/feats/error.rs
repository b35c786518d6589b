//! Feat acquisition errors.

use kingdom_domain::{CharacterId, FeatId, MasteryRank, SkillId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur when granting a feat.
#[derive(Debug, thiserror::Error)]
pub enum FeatAcquisitionError {
    #[error("Feat not found: {0}")]
    FeatNotFound(FeatId),
    #[error("Character {0} has not been initialized")]
    CharacterNotInitialized(CharacterId),
    #[error("Character has no rank in prerequisite skill {skill_id}")]
    PrerequisiteSkillMissing { skill_id: SkillId },
    #[error("Prerequisite skill {skill_id} requires {required}, character has {actual}")]
    PrerequisiteNotMet {
        skill_id: SkillId,
        required: MasteryRank,
        actual: MasteryRank,
    },
    #[error("Character {character_id} already has feat {feat_id}")]
    DuplicateFeat {
        character_id: CharacterId,
        feat_id: FeatId,
    },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl FeatAcquisitionError {
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Repo(e) => e.is_client_error(),
            _ => true,
        }
    }
}
