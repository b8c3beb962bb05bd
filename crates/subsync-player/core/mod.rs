//! Core types for the playback session layer
//!
//! - `PlayerError` and the user-facing status lines
//! - `PlayerConfig` with defaults and environment overrides

pub mod config;
pub mod errors;

pub use config::PlayerConfig;
pub use errors::{PlayerError, Result};
