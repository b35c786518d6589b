//! Unified error types for the domain layer
//!
//! Provides a common error type for rule evaluation and value-object parsing,
//! so adapters never need to fall back to String or anyhow.

use thiserror::Error;

use crate::value_objects::Bulk;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Mastery rank text outside the closed rank set
    #[error("Invalid mastery rank: {0}")]
    InvalidRank(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Carried bulk would drop below zero
    #[error("Bulk underflow: {current} + ({delta}) is below zero")]
    BulkUnderflow { current: Bulk, delta: Bulk },

    /// Carried bulk would exceed the character's ceiling
    #[error("Capacity exceeded: {attempted}/{max} bulk")]
    CapacityExceeded { attempted: Bulk, max: Bulk },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Values are outside allowed ranges
    /// - Required template data is inconsistent
    ///
    /// # Example
    /// ```ignore
    /// if quantity == 0 {
    ///     return Err(DomainError::validation("Quantity must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create an invalid rank error carrying the rejected input
    pub fn invalid_rank(input: impl Into<String>) -> Self {
        Self::InvalidRank(input.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant, for example an unknown ability
    /// name or a malformed bulk amount.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
