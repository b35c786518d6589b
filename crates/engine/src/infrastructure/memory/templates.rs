//! Template reference data held in memory.

use async_trait::async_trait;
use dashmap::DashMap;
use kingdom_domain::*;

use crate::infrastructure::ports::{RepoError, TemplateRepo};

/// Template catalogue. Loading is the host's job; the engine only reads.
#[derive(Default)]
pub struct InMemoryTemplateRepo {
    races: DashMap<RaceId, Race>,
    classes: DashMap<ClassId, CharacterClass>,
    backgrounds: DashMap<BackgroundId, Background>,
    feats: DashMap<FeatId, Feat>,
    skills: DashMap<SkillId, Skill>,
    items: DashMap<ItemId, Item>,
}

impl InMemoryTemplateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_race(&self, race: Race) {
        self.races.insert(race.id, race);
    }

    pub fn insert_class(&self, class: CharacterClass) {
        self.classes.insert(class.id, class);
    }

    pub fn insert_background(&self, background: Background) {
        self.backgrounds.insert(background.id, background);
    }

    pub fn insert_feat(&self, feat: Feat) {
        self.feats.insert(feat.id, feat);
    }

    pub fn insert_skill(&self, skill: Skill) {
        self.skills.insert(skill.id, skill);
    }

    pub fn insert_item(&self, item: Item) {
        self.items.insert(item.id, item);
    }
}

#[async_trait]
impl TemplateRepo for InMemoryTemplateRepo {
    async fn get_race(&self, id: RaceId) -> Result<Option<Race>, RepoError> {
        Ok(self.races.get(&id).map(|r| r.value().clone()))
    }

    async fn get_class(&self, id: ClassId) -> Result<Option<CharacterClass>, RepoError> {
        Ok(self.classes.get(&id).map(|c| c.value().clone()))
    }

    async fn get_background(&self, id: BackgroundId) -> Result<Option<Background>, RepoError> {
        Ok(self.backgrounds.get(&id).map(|b| b.value().clone()))
    }

    async fn get_feat(&self, id: FeatId) -> Result<Option<Feat>, RepoError> {
        Ok(self.feats.get(&id).map(|f| f.value().clone()))
    }

    async fn get_skill(&self, id: SkillId) -> Result<Option<Skill>, RepoError> {
        Ok(self.skills.get(&id).map(|s| s.value().clone()))
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.get(&id).map(|i| i.value().clone()))
    }
}
