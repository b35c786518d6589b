//! Shared setup for end-to-end tests.

use std::sync::Arc;

use kingdom_domain::{
    Ability, AbilityScores, BackgroundId, BulkCapacityPolicy, CharacterId, CharacterRecords,
    ClassId, RaceId,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::memory::InMemoryRepositories;
use crate::test_fixtures::{self, templates};
use crate::{App, EngineConfig};

/// A composed app plus direct handles on its storage.
pub struct E2ETestContext {
    pub app: Arc<App>,
    pub repos: InMemoryRepositories,
}

impl E2ETestContext {
    pub fn setup() -> Self {
        Self::with_policy(BulkCapacityPolicy::Warn)
    }

    pub fn with_policy(policy: BulkCapacityPolicy) -> Self {
        Self::build(policy, FixedClock::at(test_fixtures::fixed_now()))
    }

    /// Context whose clock moves one minute forward per read.
    pub fn with_stepping_clock() -> Self {
        Self::build(
            BulkCapacityPolicy::Warn,
            FixedClock::stepping(test_fixtures::fixed_now(), chrono::Duration::minutes(1)),
        )
    }

    fn build(policy: BulkCapacityPolicy, clock: FixedClock) -> Self {
        test_fixtures::init_tracing();
        let repos = test_fixtures::seeded_repositories();
        let config = EngineConfig::default().with_bulk_policy(policy);
        let app = App::new((&repos).into(), Arc::new(clock), config);
        Self {
            app: Arc::new(app),
            repos,
        }
    }

    /// Create a character from the given templates with the given strength.
    pub async fn create(
        &self,
        id: CharacterId,
        strength: u8,
        race: RaceId,
        class: ClassId,
        background: BackgroundId,
    ) -> CharacterRecords {
        self.app
            .use_cases
            .creation
            .initialize
            .execute(
                id,
                AbilityScores::default().with(Ability::Strength, strength),
                race,
                class,
                background,
            )
            .await
            .expect("character creation should succeed")
    }

    /// Dwarf fighter farmhand with strength 14.
    pub async fn create_default(&self, id: CharacterId) -> CharacterRecords {
        self.create(
            id,
            14,
            templates::DWARF,
            templates::FIGHTER,
            templates::FARMHAND,
        )
        .await
    }
}
