//! End-to-end tests.
//!
//! These tests run complete use-case flows through a fully composed [`App`]
//! backed by the in-memory adapters and the standard template catalogue.
//!
//! ```bash
//! cargo test -p kingdom-engine --lib e2e_tests
//! ```
//!
//! [`App`]: crate::App

mod e2e_helpers;

pub use e2e_helpers::*;
