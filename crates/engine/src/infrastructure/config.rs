//! Engine configuration loaded from the environment.

use std::path::Path;

use anyhow::Context;
use kingdom_domain::BulkCapacityPolicy;

pub const BULK_POLICY_VAR: &str = "KINGDOM_BULK_POLICY";
pub const LOG_FILTER_VAR: &str = "KINGDOM_LOG_FILTER";
pub const DEFAULT_LOG_FILTER: &str = "kingdom_engine=info";

/// Runtime settings for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// What happens when carried bulk goes past a character's ceiling
    pub bulk_policy: BulkCapacityPolicy,
    /// Tracing filter directive for hosts that install a subscriber
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bulk_policy: BulkCapacityPolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from the process environment only.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the process environment after reading `.env.local` and
    /// `.env` from `dir`, a directory chosen by the host.
    pub fn from_env_in(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        load_dotenv_files(dir.as_ref());
        Self::from_env()
    }

    /// Build from an arbitrary key lookup. Unset or blank keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bulk_policy = match read(BULK_POLICY_VAR) {
            Some(raw) => raw
                .parse::<BulkCapacityPolicy>()
                .with_context(|| format!("{} must be allow, warn or reject", BULK_POLICY_VAR))?,
            None => BulkCapacityPolicy::default(),
        };
        let log_filter = read(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bulk_policy,
            log_filter,
        })
    }

    pub fn with_bulk_policy(mut self, policy: BulkCapacityPolicy) -> Self {
        self.bulk_policy = policy;
        self
    }
}

/// Returns how many files were read. Missing or unreadable files are skipped.
fn load_dotenv_files(dir: &Path) -> usize {
    let mut loaded = 0;
    // Local overrides first; dotenvy never replaces a variable already set.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        match dotenvy::from_path(&path) {
            Ok(()) => loaded += 1,
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "Skipping env file"),
        }
    }
    loaded
}
