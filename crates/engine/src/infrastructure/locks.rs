//! Per-character mutation locks.
//!
//! Every read-modify-write on a character's records runs while holding that
//! character's lock, so concurrent requests for the same character settle in
//! some serial order. Different characters never contend.

use std::sync::Arc;

use dashmap::DashMap;
use kingdom_domain::CharacterId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Guard returned by [`CharacterLocks::lock`]. The lock is released on drop.
pub type CharacterGuard = OwnedMutexGuard<()>;

/// Registry of one async mutex per character.
#[derive(Default)]
pub struct CharacterLocks {
    locks: DashMap<CharacterId, Arc<Mutex<()>>>,
}

impl CharacterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a character.
    pub async fn lock(&self, character_id: CharacterId) -> CharacterGuard {
        // Clone the Arc out so the map shard is not held across the await.
        let mutex = self
            .locks
            .entry(character_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        mutex.lock_owned().await
    }

    /// Number of characters that have been locked at least once.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_character_is_exclusive() {
        let locks = CharacterLocks::new();
        let id = CharacterId::new(1);

        let guard = locks.lock(id).await;
        let second = tokio::time::timeout(Duration::from_millis(20), locks.lock(id)).await;
        assert!(second.is_err(), "second lock should wait while the first is held");

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(200), locks.lock(id)).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn different_characters_do_not_contend() {
        let locks = CharacterLocks::new();
        let _a = locks.lock(CharacterId::new(1)).await;
        let b = tokio::time::timeout(Duration::from_millis(200), locks.lock(CharacterId::new(2))).await;
        assert!(b.is_ok());
        assert_eq!(locks.len(), 2);
    }
}
