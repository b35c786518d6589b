//! Repository port traits for template and character storage.

use async_trait::async_trait;
use kingdom_domain::*;

use super::error::RepoError;

// =============================================================================
// Template Storage (read-only reference data)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepo: Send + Sync {
    async fn get_race(&self, id: RaceId) -> Result<Option<Race>, RepoError>;
    async fn get_class(&self, id: ClassId) -> Result<Option<CharacterClass>, RepoError>;
    async fn get_background(&self, id: BackgroundId) -> Result<Option<Background>, RepoError>;
    async fn get_feat(&self, id: FeatId) -> Result<Option<Feat>, RepoError>;
    async fn get_skill(&self, id: SkillId) -> Result<Option<Skill>, RepoError>;
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepoError>;
}

// =============================================================================
// Character Records (one of each per character)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRecordRepo: Send + Sync {
    /// Store every creation record as one unit.
    ///
    /// Fails with `RepoError::AlreadyExists` and writes nothing when any
    /// record for the character is already stored.
    async fn create_character_records(&self, records: &CharacterRecords) -> Result<(), RepoError>;

    async fn get_attributes(&self, id: CharacterId) -> Result<Option<Attributes>, RepoError>;
    async fn save_attributes(&self, attributes: &Attributes) -> Result<(), RepoError>;

    async fn get_boost(&self, id: CharacterId) -> Result<Option<CharacterBoost>, RepoError>;
    async fn save_boost(&self, boost: &CharacterBoost) -> Result<(), RepoError>;

    async fn get_defence(&self, id: CharacterId) -> Result<Option<CharacterDefence>, RepoError>;
    async fn save_defence(&self, defence: &CharacterDefence) -> Result<(), RepoError>;

    async fn get_info(&self, id: CharacterId) -> Result<Option<CharacterInfo>, RepoError>;
    async fn save_info(&self, info: &CharacterInfo) -> Result<(), RepoError>;
}

// =============================================================================
// Character Links
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterFeatRepo: Send + Sync {
    async fn get(
        &self,
        character_id: CharacterId,
        feat_id: FeatId,
    ) -> Result<Option<CharacterFeat>, RepoError>;

    /// Atomic unique insert. A second link for the same (character, feat)
    /// fails with `RepoError::AlreadyExists`.
    async fn insert(&self, link: &CharacterFeat) -> Result<(), RepoError>;

    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterFeat>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSkillRepo: Send + Sync {
    async fn get(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Option<CharacterSkill>, RepoError>;
    async fn upsert(&self, link: &CharacterSkill) -> Result<(), RepoError>;
    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterSkill>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterItemRepo: Send + Sync {
    async fn get(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<Option<CharacterItem>, RepoError>;
    async fn save(&self, link: &CharacterItem) -> Result<(), RepoError>;
    async fn delete(&self, character_id: CharacterId, item_id: ItemId) -> Result<(), RepoError>;
    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterItem>, RepoError>;
}
