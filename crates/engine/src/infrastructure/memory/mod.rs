//! In-memory storage adapters.
//!
//! Templates live in concurrent maps and are only ever read by the engine.
//! Character tables sit behind a single async lock so a creation bundle is
//! written as one unit.

mod catalogue;
mod characters;
mod templates;

use std::sync::Arc;

pub use catalogue::TemplateCatalogue;
pub use characters::InMemoryCharacterStore;
pub use templates::InMemoryTemplateRepo;

/// All in-memory repositories, shared behind `Arc`s.
#[derive(Clone, Default)]
pub struct InMemoryRepositories {
    pub templates: Arc<InMemoryTemplateRepo>,
    pub characters: Arc<InMemoryCharacterStore>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: InMemoryTemplateRepo) -> Self {
        Self {
            templates: Arc::new(templates),
            characters: Arc::new(InMemoryCharacterStore::new()),
        }
    }
}
