//! Kingdom character engine library.
//!
//! Assembles characters from race, class and background templates and keeps
//! their derived records consistent as feats, skills and items change.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the ports
//! - `infrastructure/` - Ports, in-memory adapters, locks and configuration
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit and end-to-end tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests against the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
pub use infrastructure::config::EngineConfig;
