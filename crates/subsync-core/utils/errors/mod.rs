//! Error types for subsync utilities and cross-module error handling
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` in libraries)
//! - Malformed subtitle input is tolerated, not reported; errors are reserved
//!   for strict helpers and lookups
//!
//! # Examples
//!
//! ```rust
//! use subsync_core::utils::errors::CoreError;
//!
//! let time_err = CoreError::invalid_time("1:23", "missing seconds");
//! assert_eq!(time_err.to_string(), "Invalid time format: 1:23: missing seconds");
//! ```

mod core;

pub use core::{CoreError, Result};

impl CoreError {
    /// Create time error from invalid format
    pub fn invalid_time<T: ::core::fmt::Display>(time: T, reason: &str) -> Self {
        Self::InvalidTime(format!("{time}: {reason}"))
    }
}

/// Convert from integer parse errors
impl From<::core::num::ParseIntError> for CoreError {
    fn from(err: ::core::num::ParseIntError) -> Self {
        Self::InvalidNumeric(format!("Integer parse error: {err}"))
    }
}
