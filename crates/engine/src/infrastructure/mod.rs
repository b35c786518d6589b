//! Infrastructure implementations.
//!
//! Contains port traits, their in-memory implementations, configuration and
//! the per-character lock registry.

pub mod clock;
pub mod config;
pub mod locks;
pub mod memory;
pub mod ports;
