//! Initialize character use case.
//!
//! Resolves the chosen race, class and background, derives every creation
//! record and stores them as one unit.

use std::sync::Arc;

use kingdom_domain::records::{initialize_character, CreationChoices};
use kingdom_domain::{AbilityScores, BackgroundId, CharacterId, CharacterRecords, ClassId, RaceId};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRecordRepo, ClockPort, RepoError, TemplateRepo};

use super::error::CreationError;

/// Initialize character use case.
///
/// Orchestrates: template resolution, record derivation, atomic creation.
pub struct InitializeCharacter {
    templates: Arc<dyn TemplateRepo>,
    records: Arc<dyn CharacterRecordRepo>,
    locks: Arc<CharacterLocks>,
    clock: Arc<dyn ClockPort>,
}

impl InitializeCharacter {
    pub fn new(
        templates: Arc<dyn TemplateRepo>,
        records: Arc<dyn CharacterRecordRepo>,
        locks: Arc<CharacterLocks>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            templates,
            records,
            locks,
            clock,
        }
    }

    /// Execute the initialize character use case.
    ///
    /// # Returns
    /// * `Ok(CharacterRecords)` - Everything that was stored
    /// * `Err(CreationError::TemplateMissing)` - A chosen template does not exist
    /// * `Err(CreationError::AlreadyInitialized)` - Records exist; nothing was written
    pub async fn execute(
        &self,
        character_id: CharacterId,
        scores: AbilityScores,
        race_id: RaceId,
        class_id: ClassId,
        background_id: BackgroundId,
    ) -> Result<CharacterRecords, CreationError> {
        let race = self
            .templates
            .get_race(race_id)
            .await?
            .ok_or_else(|| CreationError::template_missing("Race", race_id))?;
        let class = self
            .templates
            .get_class(class_id)
            .await?
            .ok_or_else(|| CreationError::template_missing("Class", class_id))?;
        let background = self
            .templates
            .get_background(background_id)
            .await?
            .ok_or_else(|| CreationError::template_missing("Background", background_id))?;

        // The granted feat and skills must exist even though the feat's
        // prerequisites are not checked.
        if self.templates.get_feat(background.feat_id).await?.is_none() {
            return Err(CreationError::template_missing("Feat", background.feat_id));
        }
        for skill_id in background.distinct_skills() {
            if self.templates.get_skill(skill_id).await?.is_none() {
                return Err(CreationError::template_missing("Skill", skill_id));
            }
        }

        let records = initialize_character(
            character_id,
            scores,
            CreationChoices {
                race: &race,
                class: &class,
                background: &background,
            },
            self.clock.now(),
        );

        let _guard = self.locks.lock(character_id).await;
        self.records
            .create_character_records(&records)
            .await
            .map_err(|e| match e {
                RepoError::AlreadyExists { .. } => CreationError::AlreadyInitialized(character_id),
                other => CreationError::Repo(other),
            })?;

        tracing::info!(
            character_id = %character_id,
            race = %race.name,
            class = %class.name,
            background = %background.name,
            max_hit_points = records.defence.max_hit_points,
            max_bulk = %records.info.max_bulk(),
            "Character initialized"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockCharacterRecordRepo, MockTemplateRepo};
    use crate::test_fixtures::{self, templates};
    use kingdom_domain::{Ability, Bulk, FeatId, MasteryRank, SkillId};
    use mockall::predicate::eq;

    fn templates_with_everything() -> MockTemplateRepo {
        let mut repo = MockTemplateRepo::new();
        repo.expect_get_race()
            .with(eq(templates::DWARF))
            .returning(|_| Ok(Some(templates::dwarf())));
        repo.expect_get_class()
            .with(eq(templates::FIGHTER))
            .returning(|_| Ok(Some(templates::fighter())));
        repo.expect_get_background()
            .with(eq(templates::FARMHAND))
            .returning(|_| Ok(Some(templates::farmhand())));
        repo.expect_get_feat()
            .returning(|id| Ok(Some(kingdom_domain::Feat::new(id, "Granted"))));
        repo.expect_get_skill().returning(|id| {
            Ok(Some(kingdom_domain::Skill::new(
                id,
                "Granted",
                Ability::Strength,
            )))
        });
        repo
    }

    fn use_case(templates: MockTemplateRepo, records: MockCharacterRecordRepo) -> InitializeCharacter {
        InitializeCharacter::new(
            Arc::new(templates),
            Arc::new(records),
            Arc::new(CharacterLocks::new()),
            Arc::new(FixedClock::at(test_fixtures::fixed_now())),
        )
    }

    #[tokio::test]
    async fn when_valid_input_stores_derived_records() {
        test_fixtures::init_tracing();
        let id = CharacterId::new(7);

        let mut records = MockCharacterRecordRepo::new();
        records
            .expect_create_character_records()
            .withf(move |r| r.character_id() == id)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(templates_with_everything(), records)
            .execute(
                id,
                AbilityScores::default().with(Ability::Strength, 14),
                templates::DWARF,
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await
            .unwrap();

        // Dwarf 10 + Fighter 10
        assert_eq!(result.defence.max_hit_points, 20);
        assert_eq!(result.defence.hit_points, 20);
        assert_eq!(result.defence.speed, 20);
        assert_eq!(result.defence.fortitude, MasteryRank::Expert);
        assert_eq!(result.info.max_bulk(), Bulk::from_whole(17));
        assert_eq!(result.info.bulk(), Bulk::ZERO);
        assert_eq!(result.boost.ancestry_boosts, 2);
        assert_eq!(result.starting_feat.feat_id, templates::farmhand().feat_id);
        assert_eq!(result.starting_feat.acquired_at, test_fixtures::fixed_now());
        assert_eq!(result.skills.len(), 2);
    }

    #[tokio::test]
    async fn when_race_missing_nothing_is_written() {
        let mut template_repo = MockTemplateRepo::new();
        template_repo.expect_get_race().returning(|_| Ok(None));

        // No expectations: any write would panic the mock.
        let records = MockCharacterRecordRepo::new();

        let result = use_case(template_repo, records)
            .execute(
                CharacterId::new(1),
                AbilityScores::default(),
                RaceId::new(99),
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await;

        match result {
            Err(CreationError::TemplateMissing { kind, id }) => {
                assert_eq!(kind, "Race");
                assert_eq!(id, "99");
            }
            other => panic!("expected TemplateMissing, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn when_background_feat_missing_returns_template_error() {
        let mut template_repo = MockTemplateRepo::new();
        template_repo
            .expect_get_race()
            .returning(|_| Ok(Some(templates::dwarf())));
        template_repo
            .expect_get_class()
            .returning(|_| Ok(Some(templates::fighter())));
        template_repo
            .expect_get_background()
            .returning(|_| Ok(Some(templates::farmhand())));
        template_repo.expect_get_feat().returning(|_| Ok(None));

        let result = use_case(template_repo, MockCharacterRecordRepo::new())
            .execute(
                CharacterId::new(1),
                AbilityScores::default(),
                templates::DWARF,
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await;

        assert!(matches!(
            result,
            Err(CreationError::TemplateMissing { kind: "Feat", .. })
        ));
    }

    #[tokio::test]
    async fn when_records_exist_returns_already_initialized() {
        let mut records = MockCharacterRecordRepo::new();
        records
            .expect_create_character_records()
            .returning(|r| Err(RepoError::already_exists("CharacterRecords", r.character_id())));

        let result = use_case(templates_with_everything(), records)
            .execute(
                CharacterId::new(3),
                AbilityScores::default(),
                templates::DWARF,
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, CreationError::AlreadyInitialized(id) if id == CharacterId::new(3)));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn when_storage_fails_error_propagates() {
        let mut records = MockCharacterRecordRepo::new();
        records
            .expect_create_character_records()
            .returning(|_| Err(RepoError::database("create_character_records", "connection reset")));

        let err = use_case(templates_with_everything(), records)
            .execute(
                CharacterId::new(3),
                AbilityScores::default(),
                templates::DWARF,
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CreationError::Repo(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn duplicate_background_skills_link_once() {
        let mut template_repo = MockTemplateRepo::new();
        template_repo
            .expect_get_race()
            .returning(|_| Ok(Some(templates::dwarf())));
        template_repo
            .expect_get_class()
            .returning(|_| Ok(Some(templates::fighter())));
        template_repo.expect_get_background().returning(|_| {
            let mut bg = templates::farmhand();
            bg.skill_ids = [SkillId::new(1), SkillId::new(1)];
            Ok(Some(bg))
        });
        template_repo
            .expect_get_feat()
            .returning(|id| Ok(Some(kingdom_domain::Feat::new(id, "Granted"))));
        template_repo
            .expect_get_skill()
            .times(1)
            .returning(|id| Ok(Some(kingdom_domain::Skill::new(id, "Athletics", Ability::Strength))));

        let mut records = MockCharacterRecordRepo::new();
        records
            .expect_create_character_records()
            .withf(|r| r.skills.len() == 1 && r.starting_feat.feat_id == FeatId::new(100))
            .returning(|_| Ok(()));

        let result = use_case(template_repo, records)
            .execute(
                CharacterId::new(5),
                AbilityScores::default(),
                templates::DWARF,
                templates::FIGHTER,
                templates::FARMHAND,
            )
            .await;

        assert!(result.is_ok());
    }
}
