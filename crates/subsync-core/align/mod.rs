//! Dual-track alignment
//!
//! Merges a primary and a secondary cue sequence into display [`Block`]s.
//! The primary track defines the timeline: there is exactly one block per
//! primary cue, and each block borrows the text of the first secondary cue
//! whose interval overlaps it.
//!
//! # Example
//!
//! ```rust
//! use subsync_core::{align::align, parser::parse_srt};
//!
//! let primary = parse_srt("00:00:02,000 --> 00:00:05,000\nHola");
//! let secondary = parse_srt(
//!     "00:00:00,000 --> 00:00:03,000\nHello\n\n00:00:04,000 --> 00:00:06,000\nHi",
//! );
//!
//! let blocks = align(primary.as_slice(), secondary.as_slice());
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].secondary_text, "Hello");
//! assert_eq!(blocks[0].id.to_string(), "block-0");
//! ```

use crate::parser::Cue;
use core::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a block within one alignment
///
/// Ids are only meaningful for the alignment that produced them; every
/// track change rebuilds the block list from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(pub usize);

impl BlockId {
    /// Index into the block list
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

/// Which track a line of a block came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineKind {
    /// Line from the primary (timeline-defining) track
    Primary,
    /// Line from the secondary track
    Secondary,
}

/// Combined display unit for one primary cue
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// Index of the primary cue this block was built from
    pub id: BlockId,

    /// Start time in seconds, taken from the primary cue
    pub start: f64,

    /// End time in seconds, taken from the primary cue
    pub end: f64,

    /// Primary cue text
    pub primary_text: String,

    /// Text of the first overlapping secondary cue, or empty
    pub secondary_text: String,
}

impl Block {
    /// Check whether `time` falls inside `[start, end)`
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    /// Check whether a secondary line was matched
    #[must_use]
    pub fn has_secondary(&self) -> bool {
        !self.secondary_text.is_empty()
    }

    /// Text of the given line
    #[must_use]
    pub fn text(&self, kind: LineKind) -> &str {
        match kind {
            LineKind::Primary => &self.primary_text,
            LineKind::Secondary => &self.secondary_text,
        }
    }
}

/// Merge two cue tracks into blocks by temporal overlap
///
/// Primary cues are walked in source order. For each, the secondary track
/// is scanned from the start and the first cue with
/// `primary.start < secondary.end && primary.end > secondary.start` wins,
/// even when a later secondary cue overlaps more. Secondary cues that
/// overlap nothing are dropped.
#[must_use]
pub fn align(primary: &[Cue], secondary: &[Cue]) -> Vec<Block> {
    let blocks: Vec<Block> = primary
        .iter()
        .enumerate()
        .map(|(index, cue)| {
            let secondary_text = secondary
                .iter()
                .find(|other| cue.overlaps(other))
                .map(|other| other.text.clone())
                .unwrap_or_default();

            Block {
                id: BlockId(index),
                start: cue.start,
                end: cue.end,
                primary_text: cue.text.clone(),
                secondary_text,
            }
        })
        .collect();

    trace!(
        primary = primary.len(),
        secondary = secondary.len(),
        matched = blocks.iter().filter(|b| b.has_secondary()).count(),
        "aligned tracks"
    );
    blocks
}

/// Look up a block by id
///
/// # Errors
///
/// Returns [`CoreError::BlockNotFound`](crate::CoreError::BlockNotFound)
/// when the id does not belong to `blocks`, typically because the id was
/// kept across a track change.
pub fn block_by_id(blocks: &[Block], id: BlockId) -> crate::Result<&Block> {
    blocks.get(id.index()).ok_or(crate::CoreError::BlockNotFound {
        index: id.index(),
        len: blocks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: f64, end: f64, text: &str) -> Cue {
        Cue::new(start, end, text).unwrap()
    }

    #[test]
    fn one_block_per_primary_cue() {
        let primary = [cue(0.0, 1.0, "a"), cue(1.0, 2.0, "b"), cue(5.0, 6.0, "c")];
        let secondary = [cue(0.5, 1.5, "x")];
        let blocks = align(&primary, &secondary);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].secondary_text, "x");
        assert_eq!(blocks[1].secondary_text, "x");
        assert_eq!(blocks[2].secondary_text, "");
        assert_eq!(blocks[2].id, BlockId(2));
    }

    #[test]
    fn touching_secondary_is_not_matched() {
        let blocks = align(&[cue(2.0, 4.0, "p")], &[cue(0.0, 2.0, "s")]);
        assert!(!blocks[0].has_secondary());
    }

    #[test]
    fn text_selects_line() {
        let blocks = align(&[cue(0.0, 1.0, "p")], &[cue(0.0, 1.0, "s")]);
        assert_eq!(blocks[0].text(LineKind::Primary), "p");
        assert_eq!(blocks[0].text(LineKind::Secondary), "s");
    }

    #[test]
    fn stale_block_id_is_reported() {
        let blocks = align(&[cue(0.0, 1.0, "p")], &[]);
        assert!(block_by_id(&blocks, BlockId(0)).is_ok());
        assert_eq!(
            block_by_id(&blocks, BlockId(3)).unwrap_err(),
            crate::CoreError::BlockNotFound { index: 3, len: 1 }
        );
    }
}
