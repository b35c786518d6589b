//! Carried bulk and item errors.

use kingdom_domain::{Bulk, CharacterId, DomainError, ItemId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while changing a character's carried bulk.
#[derive(Debug, thiserror::Error)]
pub enum BulkError {
    #[error("Character {0} has no info record")]
    CharacterNotInitialized(CharacterId),
    #[error("Carried bulk would drop below zero: {current} + ({delta})")]
    Underflow { current: Bulk, delta: Bulk },
    #[error("Carried bulk {attempted} exceeds capacity {max}")]
    CapacityExceeded { attempted: Bulk, max: Bulk },
    #[error("Validation error: {0}")]
    Domain(DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<DomainError> for BulkError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::BulkUnderflow { current, delta } => Self::Underflow { current, delta },
            DomainError::CapacityExceeded { attempted, max } => {
                Self::CapacityExceeded { attempted, max }
            }
            other => Self::Domain(other),
        }
    }
}

impl BulkError {
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Repo(e) => e.is_client_error(),
            _ => true,
        }
    }
}

/// Errors that can occur while picking up, re-counting or dropping items.
#[derive(Debug, thiserror::Error)]
pub enum ItemCarryError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Character {character_id} is not carrying item {item_id}")]
    ItemNotCarried {
        character_id: CharacterId,
        item_id: ItemId,
    },
    #[error("Quantity must be positive and fit the carried count")]
    InvalidQuantity,
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error(transparent)]
    Bulk(#[from] BulkError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl ItemCarryError {
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Bulk(e) => e.is_client_error(),
            Self::Repo(e) => e.is_client_error(),
            _ => true,
        }
    }
}
