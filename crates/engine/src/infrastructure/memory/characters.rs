//! Character records and links held in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use kingdom_domain::*;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{
    CharacterFeatRepo, CharacterItemRepo, CharacterRecordRepo, CharacterSkillRepo, RepoError,
};

#[derive(Default)]
struct CharacterTables {
    attributes: HashMap<CharacterId, Attributes>,
    boosts: HashMap<CharacterId, CharacterBoost>,
    defences: HashMap<CharacterId, CharacterDefence>,
    infos: HashMap<CharacterId, CharacterInfo>,
    feats: HashMap<(CharacterId, FeatId), CharacterFeat>,
    skills: HashMap<(CharacterId, SkillId), CharacterSkill>,
    items: HashMap<(CharacterId, ItemId), CharacterItem>,
}

impl CharacterTables {
    fn has_any_record(&self, id: CharacterId) -> bool {
        self.attributes.contains_key(&id)
            || self.boosts.contains_key(&id)
            || self.defences.contains_key(&id)
            || self.infos.contains_key(&id)
            || self.feats.keys().any(|(owner, _)| *owner == id)
            || self.skills.keys().any(|(owner, _)| *owner == id)
            || self.items.keys().any(|(owner, _)| *owner == id)
    }

    /// Links may only point at a character whose records exist.
    fn require_character(&self, id: CharacterId, link: &'static str) -> Result<(), RepoError> {
        if self.infos.contains_key(&id) {
            Ok(())
        } else {
            Err(RepoError::constraint(format!(
                "{} references uninitialized character {}",
                link, id
            )))
        }
    }
}

/// Every per-character table in one place.
#[derive(Default)]
pub struct InMemoryCharacterStore {
    tables: RwLock<CharacterTables>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Every record in the bundle must belong to the same character.
fn check_bundle(records: &CharacterRecords) -> Result<(), RepoError> {
    let id = records.character_id();
    let owners = [
        records.boost.character_id,
        records.defence.character_id,
        records.info.character_id(),
        records.starting_feat.character_id,
    ]
    .into_iter()
    .chain(records.skills.iter().map(|s| s.character_id));

    for owner in owners {
        if owner != id {
            return Err(RepoError::constraint(format!(
                "Record for character {} in creation bundle of character {}",
                owner, id
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl CharacterRecordRepo for InMemoryCharacterStore {
    async fn create_character_records(&self, records: &CharacterRecords) -> Result<(), RepoError> {
        check_bundle(records)?;
        let id = records.character_id();

        let mut tables = self.tables.write().await;
        if tables.has_any_record(id) {
            return Err(RepoError::already_exists("CharacterRecords", id));
        }

        tables.attributes.insert(id, records.attributes);
        tables.boosts.insert(id, records.boost);
        tables.defences.insert(id, records.defence);
        tables.infos.insert(id, records.info);
        tables
            .feats
            .insert((id, records.starting_feat.feat_id), records.starting_feat);
        for skill in &records.skills {
            tables.skills.insert((id, skill.skill_id), *skill);
        }
        Ok(())
    }

    async fn get_attributes(&self, id: CharacterId) -> Result<Option<Attributes>, RepoError> {
        Ok(self.tables.read().await.attributes.get(&id).copied())
    }

    async fn save_attributes(&self, attributes: &Attributes) -> Result<(), RepoError> {
        self.tables
            .write()
            .await
            .attributes
            .insert(attributes.character_id, *attributes);
        Ok(())
    }

    async fn get_boost(&self, id: CharacterId) -> Result<Option<CharacterBoost>, RepoError> {
        Ok(self.tables.read().await.boosts.get(&id).copied())
    }

    async fn save_boost(&self, boost: &CharacterBoost) -> Result<(), RepoError> {
        self.tables
            .write()
            .await
            .boosts
            .insert(boost.character_id, *boost);
        Ok(())
    }

    async fn get_defence(&self, id: CharacterId) -> Result<Option<CharacterDefence>, RepoError> {
        Ok(self.tables.read().await.defences.get(&id).copied())
    }

    async fn save_defence(&self, defence: &CharacterDefence) -> Result<(), RepoError> {
        self.tables
            .write()
            .await
            .defences
            .insert(defence.character_id, *defence);
        Ok(())
    }

    async fn get_info(&self, id: CharacterId) -> Result<Option<CharacterInfo>, RepoError> {
        Ok(self.tables.read().await.infos.get(&id).copied())
    }

    async fn save_info(&self, info: &CharacterInfo) -> Result<(), RepoError> {
        self.tables
            .write()
            .await
            .infos
            .insert(info.character_id(), *info);
        Ok(())
    }
}

#[async_trait]
impl CharacterFeatRepo for InMemoryCharacterStore {
    async fn get(
        &self,
        character_id: CharacterId,
        feat_id: FeatId,
    ) -> Result<Option<CharacterFeat>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .feats
            .get(&(character_id, feat_id))
            .copied())
    }

    async fn insert(&self, link: &CharacterFeat) -> Result<(), RepoError> {
        use std::collections::hash_map::Entry;

        let mut tables = self.tables.write().await;
        tables.require_character(link.character_id, "CharacterFeat")?;
        match tables.feats.entry((link.character_id, link.feat_id)) {
            Entry::Occupied(_) => Err(RepoError::already_exists(
                "CharacterFeat",
                format!("{}/{}", link.character_id, link.feat_id),
            )),
            Entry::Vacant(slot) => {
                slot.insert(*link);
                Ok(())
            }
        }
    }

    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterFeat>, RepoError> {
        let tables = self.tables.read().await;
        let mut links: Vec<CharacterFeat> = tables
            .feats
            .values()
            .filter(|l| l.character_id == character_id)
            .copied()
            .collect();
        links.sort_by_key(|l| l.feat_id);
        Ok(links)
    }
}

#[async_trait]
impl CharacterSkillRepo for InMemoryCharacterStore {
    async fn get(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<Option<CharacterSkill>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .skills
            .get(&(character_id, skill_id))
            .copied())
    }

    async fn upsert(&self, link: &CharacterSkill) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_character(link.character_id, "CharacterSkill")?;
        tables
            .skills
            .insert((link.character_id, link.skill_id), *link);
        Ok(())
    }

    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterSkill>, RepoError> {
        let tables = self.tables.read().await;
        let mut links: Vec<CharacterSkill> = tables
            .skills
            .values()
            .filter(|l| l.character_id == character_id)
            .copied()
            .collect();
        links.sort_by_key(|l| l.skill_id);
        Ok(links)
    }
}

#[async_trait]
impl CharacterItemRepo for InMemoryCharacterStore {
    async fn get(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<Option<CharacterItem>, RepoError> {
        Ok(self
            .tables
            .read()
            .await
            .items
            .get(&(character_id, item_id))
            .copied())
    }

    async fn save(&self, link: &CharacterItem) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_character(link.character_id, "CharacterItem")?;
        tables
            .items
            .insert((link.character_id, link.item_id), *link);
        Ok(())
    }

    async fn delete(&self, character_id: CharacterId, item_id: ItemId) -> Result<(), RepoError> {
        self.tables
            .write()
            .await
            .items
            .remove(&(character_id, item_id));
        Ok(())
    }

    async fn list_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterItem>, RepoError> {
        let tables = self.tables.read().await;
        let mut links: Vec<CharacterItem> = tables
            .items
            .values()
            .filter(|l| l.character_id == character_id)
            .copied()
            .collect();
        links.sort_by_key(|l| l.item_id);
        Ok(links)
    }
}
