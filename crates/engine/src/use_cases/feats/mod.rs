//! Feat use cases.

mod acquire_feat;
mod error;

use std::sync::Arc;

use kingdom_domain::{CharacterFeat, CharacterId};

use crate::infrastructure::ports::{CharacterFeatRepo, RepoError};

pub use acquire_feat::AcquireFeat;
pub use error::FeatAcquisitionError;

/// Container for feat use cases.
pub struct FeatUseCases {
    pub acquire: Arc<AcquireFeat>,
    pub ops: Arc<FeatOps>,
}

impl FeatUseCases {
    pub fn new(acquire: Arc<AcquireFeat>, ops: Arc<FeatOps>) -> Self {
        Self { acquire, ops }
    }
}

/// Read-side feat operations.
pub struct FeatOps {
    feats: Arc<dyn CharacterFeatRepo>,
}

impl FeatOps {
    pub fn new(feats: Arc<dyn CharacterFeatRepo>) -> Self {
        Self { feats }
    }

    pub async fn list_feats(&self, character_id: CharacterId) -> Result<Vec<CharacterFeat>, RepoError> {
        self.feats.list_for_character(character_id).await
    }
}
