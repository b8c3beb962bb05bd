//! Timed subtitle cue and ordered cue sequence
//!
//! A [`Cue`] is one SRT block reduced to its interval and text. Multi-line
//! cue text is joined with [`LINE_BREAK`](super::LINE_BREAK) so it can be
//! rendered as a single display line.

use crate::utils::errors::{CoreError, Result};
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::LINE_BREAK;

/// Single timed subtitle line
///
/// The interval is half-open: a cue is showing from `start` up to, but not
/// including, `end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cue {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds, always greater than `start`
    pub end: f64,

    /// Cue text with `<br>` between source lines
    pub text: String,
}

impl Cue {
    /// Create a cue, validating its interval
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTime`] if either bound is negative or not
    /// finite, or if `end <= start`.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 {
            return Err(CoreError::invalid_time(
                format_args!("{start} --> {end}"),
                "bounds must be finite and non-negative",
            ));
        }
        if end <= start {
            return Err(CoreError::invalid_time(
                format_args!("{start} --> {end}"),
                "end must be after start",
            ));
        }

        Ok(Self {
            start,
            end,
            text: text.into(),
        })
    }

    /// Duration in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check whether `time` falls inside `[start, end)`
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    /// Check whether two cues share any instant
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Iterate over the source lines of the cue text
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(LINE_BREAK)
    }
}

/// Cues in the order they appeared in the source
///
/// The parser never re-sorts; out-of-order files keep their order so block
/// indices line up with the file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CueSequence(Vec<Cue>);

impl CueSequence {
    /// Create an empty sequence
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse SRT text, dropping anything malformed
    ///
    /// Shorthand for [`parse_srt`](super::parse_srt).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        super::parse_srt(text)
    }

    /// Number of cues
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no cues
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over cues in source order
    pub fn iter(&self) -> slice::Iter<'_, Cue> {
        self.0.iter()
    }

    /// Borrow the cues as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Cue] {
        &self.0
    }

    /// Append a cue
    pub fn push(&mut self, cue: Cue) {
        self.0.push(cue);
    }

    /// Take ownership of the cues
    #[must_use]
    pub fn into_vec(self) -> Vec<Cue> {
        self.0
    }

    /// Serialize back to SRT
    #[must_use]
    pub fn to_srt(&self) -> String {
        super::write_srt(self.as_slice())
    }
}

impl From<Vec<Cue>> for CueSequence {
    fn from(cues: Vec<Cue>) -> Self {
        Self(cues)
    }
}

impl FromIterator<Cue> for CueSequence {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CueSequence {
    type Item = &'a Cue;
    type IntoIter = slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CueSequence {
    type Item = Cue;
    type IntoIter = std::vec::IntoIter<Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
