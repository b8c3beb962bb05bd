//! Error types for the subsync-player crate
//!
//! Provides the main `PlayerError` enum that wraps `CoreError` from
//! subsync-core and adds the failure cases of the session layer. Service
//! failures are caught where they happen and turned into a short status
//! line for the user; nothing here is retried.

use subsync_core::utils::errors::CoreError;
use thiserror::Error;

/// Status line shown when a lookup fails
pub const TRANSLATE_FAILED: &str = "Could not translate this line.";

/// Status line shown when saving a word fails
pub const SAVE_FAILED: &str = "Failed to save word.";

/// Status line shown when saving without a definition
pub const NO_DEFINITION: &str = "Cannot save, no definition found.";

/// Main error type for subsync-player operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Errors from subsync-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Subtitle transfer failed
    #[error("Network error: {0}")]
    Network(String),

    /// Lookup service failed or returned an error status
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Vocabulary service failed or returned an error status
    #[error("Save failed: {0}")]
    Save(String),

    /// Save attempted before a definition was resolved
    #[error("Cannot save, no definition found.")]
    MissingDefinition,

    /// Lookup attempted with an empty word
    #[error("No word to look up")]
    EmptyWord,

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl PlayerError {
    /// Create a network error
    pub fn network<T: std::fmt::Display>(message: T) -> Self {
        Self::Network(message.to_string())
    }

    /// Create a translation error
    pub fn translation<T: std::fmt::Display>(message: T) -> Self {
        Self::Translation(message.to_string())
    }

    /// Create a save error
    pub fn save<T: std::fmt::Display>(message: T) -> Self {
        Self::Save(message.to_string())
    }

    /// User-facing status line for this error
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            Self::Translation(_) | Self::EmptyWord => TRANSLATE_FAILED.to_string(),
            Self::Save(_) => SAVE_FAILED.to_string(),
            Self::MissingDefinition => NO_DEFINITION.to_string(),
            Self::Network(_) => "Could not load subtitles.".to_string(),
            Self::Core(_) | Self::Config(_) => self.to_string(),
        }
    }
}

/// Result type alias for player operations
pub type Result<T> = core::result::Result<T, PlayerError>;
