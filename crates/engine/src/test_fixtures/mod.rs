//! Common test helpers: a seeded template catalogue, a fixed clock value
//! and a tracing subscriber that writes through the test harness.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{self, templates};
//!
//! #[tokio::test]
//! async fn test_dwarf_fighter() {
//!     test_fixtures::init_tracing();
//!     let repos = test_fixtures::seeded_repositories();
//!     // ... test logic
//! }
//! ```

pub mod templates;

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};

use crate::infrastructure::memory::InMemoryRepositories;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`, defaulting to debug output for this crate.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "kingdom_engine=debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// The instant every fixed clock in the tests reports.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap()
}

/// In-memory repositories with the standard template catalogue loaded.
pub fn seeded_repositories() -> InMemoryRepositories {
    InMemoryRepositories::with_templates(templates::catalogue())
}
