//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    locks::CharacterLocks,
    memory::InMemoryRepositories,
    ports::{
        CharacterFeatRepo, CharacterItemRepo, CharacterRecordRepo, CharacterSkillRepo, ClockPort,
        TemplateRepo,
    },
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub config: EngineConfig,
}

/// Container for all repository ports.
#[derive(Clone)]
pub struct Repositories {
    pub templates: Arc<dyn TemplateRepo>,
    pub records: Arc<dyn CharacterRecordRepo>,
    pub feats: Arc<dyn CharacterFeatRepo>,
    pub skills: Arc<dyn CharacterSkillRepo>,
    pub items: Arc<dyn CharacterItemRepo>,
}

impl From<&InMemoryRepositories> for Repositories {
    fn from(repos: &InMemoryRepositories) -> Self {
        Self {
            templates: repos.templates.clone(),
            records: repos.characters.clone(),
            feats: repos.characters.clone(),
            skills: repos.characters.clone(),
            items: repos.characters.clone(),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub creation: use_cases::CreationUseCases,
    pub feats: use_cases::FeatUseCases,
    pub inventory: use_cases::InventoryUseCases,
    pub skills: use_cases::SkillUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repositories: Repositories, clock: Arc<dyn ClockPort>, config: EngineConfig) -> Self {
        let locks = Arc::new(CharacterLocks::new());

        let initialize = Arc::new(use_cases::creation::InitializeCharacter::new(
            repositories.templates.clone(),
            repositories.records.clone(),
            locks.clone(),
            clock.clone(),
        ));

        let acquire = Arc::new(use_cases::feats::AcquireFeat::new(
            repositories.templates.clone(),
            repositories.records.clone(),
            repositories.feats.clone(),
            repositories.skills.clone(),
            clock.clone(),
        ));
        let feat_ops = Arc::new(use_cases::feats::FeatOps::new(repositories.feats.clone()));

        let bulk = Arc::new(use_cases::inventory::ApplyBulkDelta::new(
            repositories.records.clone(),
            locks.clone(),
            config.bulk_policy,
        ));
        let carry = Arc::new(use_cases::inventory::ItemCarry::new(
            repositories.templates.clone(),
            repositories.items.clone(),
            bulk.clone(),
            locks.clone(),
        ));

        let training = Arc::new(use_cases::skills::SkillTraining::new(
            repositories.templates.clone(),
            repositories.records.clone(),
            repositories.skills.clone(),
            locks,
        ));

        let use_cases = UseCases {
            creation: use_cases::CreationUseCases::new(initialize),
            feats: use_cases::FeatUseCases::new(acquire, feat_ops),
            inventory: use_cases::InventoryUseCases::new(bulk, carry),
            skills: use_cases::SkillUseCases::new(training),
        };

        tracing::debug!(bulk_policy = %config.bulk_policy, "Engine composed");

        Self {
            repositories,
            use_cases,
            config,
        }
    }

    /// App over in-memory storage and the system clock.
    pub fn in_memory(repos: &InMemoryRepositories, config: EngineConfig) -> Self {
        Self::new(repos.into(), Arc::new(SystemClock), config)
    }
}
