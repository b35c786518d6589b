//! JSON template catalogue.
//!
//! Hosts ship reference data as one JSON document with a list per template
//! type. Every list is optional.

use anyhow::{bail, Context};
use kingdom_domain::{
    Background, CharacterClass, Feat, Item, Race, Skill, VALID_CLASS_HIT_POINTS,
};
use serde::{Deserialize, Serialize};

use super::InMemoryTemplateRepo;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateCatalogue {
    pub races: Vec<Race>,
    pub classes: Vec<CharacterClass>,
    pub backgrounds: Vec<Background>,
    pub feats: Vec<Feat>,
    pub skills: Vec<Skill>,
    pub items: Vec<Item>,
}

impl TemplateCatalogue {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalogue: Self =
            serde_json::from_str(json).context("Failed to parse template catalogue")?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Checks the rules deserialization cannot: class hit points, item bulk
    /// signs and references from backgrounds and feats into this catalogue.
    pub fn validate(&self) -> anyhow::Result<()> {
        for class in &self.classes {
            if !VALID_CLASS_HIT_POINTS.contains(&class.hit_points) {
                bail!(
                    "Class {} ({}) has {} hit points, expected one of {:?}",
                    class.id,
                    class.name,
                    class.hit_points,
                    VALID_CLASS_HIT_POINTS
                );
            }
        }

        for item in &self.items {
            item.check_bulk()?;
        }

        for background in &self.backgrounds {
            if !self.feats.iter().any(|f| f.id == background.feat_id) {
                bail!(
                    "Background {} grants unknown feat {}",
                    background.name,
                    background.feat_id
                );
            }
            for skill_id in background.distinct_skills() {
                if !self.skills.iter().any(|s| s.id == skill_id) {
                    bail!(
                        "Background {} trains unknown skill {}",
                        background.name,
                        skill_id
                    );
                }
            }
        }

        for feat in &self.feats {
            if let Some(gate) = feat.prerequisite() {
                if !self.skills.iter().any(|s| s.id == gate.skill_id) {
                    bail!(
                        "Feat {} requires unknown skill {}",
                        feat.name,
                        gate.skill_id
                    );
                }
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.races.len()
            + self.classes.len()
            + self.backgrounds.len()
            + self.feats.len()
            + self.skills.len()
            + self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<TemplateCatalogue> for InMemoryTemplateRepo {
    fn from(catalogue: TemplateCatalogue) -> Self {
        let repo = InMemoryTemplateRepo::new();
        catalogue.races.into_iter().for_each(|r| repo.insert_race(r));
        catalogue
            .classes
            .into_iter()
            .for_each(|c| repo.insert_class(c));
        catalogue
            .backgrounds
            .into_iter()
            .for_each(|b| repo.insert_background(b));
        catalogue.feats.into_iter().for_each(|f| repo.insert_feat(f));
        catalogue.skills.into_iter().for_each(|s| repo.insert_skill(s));
        catalogue.items.into_iter().for_each(|i| repo.insert_item(i));
        repo
    }
}
