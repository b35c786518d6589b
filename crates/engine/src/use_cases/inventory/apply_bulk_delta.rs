//! Apply bulk delta use case.
//!
//! Adjusts a character's carried-bulk total by a signed amount.

use std::sync::Arc;

use kingdom_domain::{Bulk, BulkCapacityPolicy, BulkOutcome, CharacterId};

use crate::infrastructure::locks::{CharacterGuard, CharacterLocks};
use crate::infrastructure::ports::CharacterRecordRepo;

use super::error::BulkError;

/// Apply bulk delta use case.
///
/// The read-modify-write of the info record runs under the character's lock.
pub struct ApplyBulkDelta {
    records: Arc<dyn CharacterRecordRepo>,
    locks: Arc<CharacterLocks>,
    policy: BulkCapacityPolicy,
}

impl ApplyBulkDelta {
    pub fn new(
        records: Arc<dyn CharacterRecordRepo>,
        locks: Arc<CharacterLocks>,
        policy: BulkCapacityPolicy,
    ) -> Self {
        Self {
            records,
            locks,
            policy,
        }
    }

    pub fn policy(&self) -> BulkCapacityPolicy {
        self.policy
    }

    /// Execute the apply bulk delta use case.
    ///
    /// # Returns
    /// * `Ok(BulkOutcome)` - The stored total and whether it is over capacity
    /// * `Err(BulkError::Underflow)` - The total would go negative; nothing stored
    /// * `Err(BulkError::CapacityExceeded)` - Only under the reject policy
    pub async fn execute(
        &self,
        character_id: CharacterId,
        delta: Bulk,
    ) -> Result<BulkOutcome, BulkError> {
        let guard = self.locks.lock(character_id).await;
        self.apply_locked(&guard, character_id, delta).await
    }

    /// Apply a delta while the caller already holds the character's lock.
    pub(crate) async fn apply_locked(
        &self,
        _guard: &CharacterGuard,
        character_id: CharacterId,
        delta: Bulk,
    ) -> Result<BulkOutcome, BulkError> {
        let mut info = self
            .records
            .get_info(character_id)
            .await?
            .ok_or(BulkError::CharacterNotInitialized(character_id))?;

        let outcome = info.apply_bulk_delta(delta, self.policy)?;
        self.records.save_info(&info).await?;

        if outcome.over_capacity && self.policy == BulkCapacityPolicy::Warn {
            tracing::warn!(
                character_id = %character_id,
                bulk = %outcome.bulk,
                max_bulk = %outcome.max_bulk,
                "Carried bulk over capacity"
            );
        }
        tracing::debug!(
            character_id = %character_id,
            delta = %delta,
            bulk = %outcome.bulk,
            "Bulk delta applied"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterRecordRepo, RepoError};
    use crate::test_fixtures;
    use kingdom_domain::CharacterInfo;
    use mockall::predicate::eq;

    const CHARACTER: CharacterId = CharacterId::new(4);

    fn records_with(info: Option<CharacterInfo>) -> MockCharacterRecordRepo {
        let mut repo = MockCharacterRecordRepo::new();
        repo.expect_get_info()
            .with(eq(CHARACTER))
            .returning(move |_| Ok(info));
        repo
    }

    fn use_case(records: MockCharacterRecordRepo, policy: BulkCapacityPolicy) -> ApplyBulkDelta {
        ApplyBulkDelta::new(Arc::new(records), Arc::new(CharacterLocks::new()), policy)
    }

    #[tokio::test]
    async fn when_not_initialized_returns_error() {
        let result = use_case(records_with(None), BulkCapacityPolicy::Warn)
            .execute(CHARACTER, Bulk::from_whole(1))
            .await;

        assert!(matches!(result, Err(BulkError::CharacterNotInitialized(id)) if id == CHARACTER));
    }

    #[tokio::test]
    async fn when_valid_delta_saves_new_total() {
        let mut records = records_with(Some(CharacterInfo::initialize(CHARACTER, 14)));
        records
            .expect_save_info()
            .withf(|info| info.bulk() == Bulk::from_milli(2_500))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = use_case(records, BulkCapacityPolicy::Warn)
            .execute(CHARACTER, Bulk::from_milli(2_500))
            .await
            .unwrap();

        assert_eq!(outcome.previous, Bulk::ZERO);
        assert_eq!(outcome.bulk, Bulk::from_milli(2_500));
        assert_eq!(outcome.max_bulk, Bulk::from_whole(17));
        assert!(!outcome.over_capacity);
    }

    #[tokio::test]
    async fn when_underflow_nothing_is_saved() {
        // No save expectation: a write would panic the mock.
        let records = records_with(Some(CharacterInfo::initialize(CHARACTER, 10)));

        let err = use_case(records, BulkCapacityPolicy::Warn)
            .execute(CHARACTER, Bulk::from_whole(-1))
            .await
            .unwrap_err();

        assert!(matches!(err, BulkError::Underflow { .. }));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn when_over_capacity_under_warn_stores_and_flags() {
        test_fixtures::init_tracing();
        let mut records = records_with(Some(CharacterInfo::initialize(CHARACTER, 0)));
        records.expect_save_info().times(1).returning(|_| Ok(()));

        let outcome = use_case(records, BulkCapacityPolicy::Warn)
            .execute(CHARACTER, Bulk::from_whole(12))
            .await
            .unwrap();

        assert!(outcome.over_capacity);
        assert_eq!(outcome.bulk, Bulk::from_whole(12));
    }

    #[tokio::test]
    async fn when_over_capacity_under_reject_nothing_is_saved() {
        let records = records_with(Some(CharacterInfo::initialize(CHARACTER, 0)));

        let err = use_case(records, BulkCapacityPolicy::Reject)
            .execute(CHARACTER, Bulk::from_whole(12))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BulkError::CapacityExceeded { attempted, max }
                if attempted == Bulk::from_whole(12) && max == Bulk::from_whole(10)
        ));
    }

    #[tokio::test]
    async fn when_save_fails_error_propagates() {
        let mut records = records_with(Some(CharacterInfo::initialize(CHARACTER, 10)));
        records
            .expect_save_info()
            .returning(|_| Err(RepoError::database("save_info", "Database unavailable")));

        let err = use_case(records, BulkCapacityPolicy::Allow)
            .execute(CHARACTER, Bulk::from_whole(1))
            .await
            .unwrap_err();

        assert!(matches!(err, BulkError::Repo(_)));
        assert!(!err.is_client_error());
    }
}
