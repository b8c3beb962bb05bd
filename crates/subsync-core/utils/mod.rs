//! Utility functions and shared types for subsync core
//!
//! Contains the error types, SRT timestamp conversion and input
//! normalization helpers used by the parser and writer.
//!
//! # Example
//!
//! ```rust
//! use subsync_core::utils::{format_srt_time, parse_srt_time};
//!
//! let seconds = parse_srt_time("00:00:04,250")?;
//! assert_eq!(format_srt_time(seconds), "00:00:04,250");
//! # Ok::<(), subsync_core::CoreError>(())
//! ```

pub mod errors;
pub mod time;
pub mod utf8;

pub use errors::CoreError;
pub use time::{format_srt_time, parse_srt_time};
pub use utf8::{decode_text, normalize_line_endings, prepare_input, strip_bom};
