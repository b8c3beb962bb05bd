//! SubRip (SRT) parser module
//!
//! Turns raw SRT text into an ordered [`CueSequence`]. Parsing is permissive:
//! malformed blocks are dropped, never raised, so the worst a damaged file
//! can do is produce an empty or partial sequence. Use
//! [`parse_srt_report`] to see what was dropped.
//!
//! # Example
//!
//! ```rust
//! use subsync_core::parser::parse_srt;
//!
//! let text = "1\n00:00:01,000 --> 00:00:03,000\nHello\nworld\n\n\
//!             2\n00:00:04,000 --> 00:00:06,000\nGoodbye\n";
//!
//! let cues = parse_srt(text);
//! assert_eq!(cues.len(), 2);
//! assert_eq!(cues.as_slice()[0].text, "Hello<br>world");
//! assert_eq!(cues.as_slice()[1].start, 4.0);
//! ```

mod cue;
mod issue;
mod srt;
mod writer;

pub use cue::{Cue, CueSequence};
pub use issue::{IssueKind, ParseIssue};
pub use srt::{parse_srt_report, ParseReport};
pub use writer::{format_timestamp, write_srt};

/// Marker joining the source lines of a multi-line cue
pub const LINE_BREAK: &str = "<br>";

/// Separator between the start and end timestamps of a cue
pub const TIMESTAMP_SEPARATOR: &str = "-->";

/// Parse SRT text into cues, dropping malformed blocks
///
/// A leading BOM is stripped and line endings are normalized first. Index
/// lines are optional; stray numeric lines inside cue text are discarded.
/// Cues whose end is not after their start are dropped.
#[must_use]
pub fn parse_srt(text: &str) -> CueSequence {
    parse_srt_report(text).cues
}
