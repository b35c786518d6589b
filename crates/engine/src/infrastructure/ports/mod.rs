//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Template and character storage (in-memory today, a database later)
//! - Time, so feat timestamps are deterministic under test

mod error;
mod repos;
mod time;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{
    CharacterFeatRepo, CharacterItemRepo, CharacterRecordRepo, CharacterSkillRepo, TemplateRepo,
};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockCharacterFeatRepo, MockCharacterItemRepo, MockCharacterRecordRepo,
    MockCharacterSkillRepo, MockTemplateRepo,
};

#[cfg(test)]
pub use time::MockClockPort;

// =============================================================================
// Time
// =============================================================================
pub use time::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
