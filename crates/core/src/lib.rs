//! Core types, errors, and configuration for cluemine
//!
//! This crate provides the foundational types, heuristic constants, and
//! configuration shared by the cluemine transcript mining pipeline.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::{CluemineConfig, SearchConfig};
pub use error::{Error, Result};
pub use types::*;
