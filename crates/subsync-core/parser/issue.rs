//! Recoverable problems found while scanning SRT text
//!
//! The scanner never fails. Blocks it cannot use are dropped and reported
//! here so callers (the CLI, logging) can explain why a file produced fewer
//! cues than expected.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What went wrong with a dropped block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IssueKind {
    /// One side of the `-->` separator was empty
    MissingTimestamp,

    /// A timestamp could not be parsed as `HH:MM:SS,mmm`
    InvalidTimestamp,

    /// The end time was not after the start time
    NonPositiveDuration,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingTimestamp => "missing timestamp",
            Self::InvalidTimestamp => "invalid timestamp",
            Self::NonPositiveDuration => "non-positive duration",
        };
        f.write_str(name)
    }
}

/// A dropped cue block and the reason it was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseIssue {
    /// Issue kind for filtering
    pub kind: IssueKind,

    /// Line of the timestamp row (1-based, after BOM and outer trim)
    pub line: usize,

    /// Human-readable detail
    pub message: String,
}

impl ParseIssue {
    /// Create a new issue
    #[must_use]
    pub fn new(kind: IssueKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}
