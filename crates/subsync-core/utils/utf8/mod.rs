//! Text encoding utilities for subtitle input
//!
//! Subtitle files arrive from many tools and platforms. Before scanning,
//! input is stripped of a leading byte order mark and its line endings are
//! folded into a single style.
//!
//! # Examples
//!
//! ```rust
//! use subsync_core::utils::utf8::{normalize_line_endings, strip_bom};
//!
//! let input = "\u{FEFF}1\r\n00:00:01,000 --> 00:00:02,000\r\nHi";
//! let (stripped, had_bom) = strip_bom(input);
//! assert!(had_bom);
//! assert_eq!(
//!     normalize_line_endings(stripped),
//!     "1\n00:00:01,000 --> 00:00:02,000\nHi"
//! );
//! ```

mod bom;
mod normalization;

pub use bom::{decode_text, detect_bom, strip_bom, BomType};
pub use normalization::{normalize_line_endings, prepare_input};
