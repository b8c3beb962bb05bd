//! Line scanner for SubRip text
//!
//! Works line by line over normalized input. A timestamp row is any line
//! containing `-->`; the lines that follow it, up to a blank line or the
//! next timestamp row, are the cue text. Everything else is ignored, which
//! makes index lines optional and lets damaged files yield partial results.

use super::{
    cue::{Cue, CueSequence},
    issue::{IssueKind, ParseIssue},
    LINE_BREAK, TIMESTAMP_SEPARATOR,
};
use crate::utils::{parse_srt_time, prepare_input};
use tracing::debug;

/// Result of a scan: the usable cues plus what was dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Cues in source order
    pub cues: CueSequence,

    /// One entry per dropped block
    pub issues: Vec<ParseIssue>,
}

impl ParseReport {
    /// Check if every timestamp row produced a cue
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scan SRT text and report dropped blocks
///
/// See [`parse_srt`](super::parse_srt) for the accepted shape.
#[must_use]
pub fn parse_srt_report(text: &str) -> ParseReport {
    let prepared = prepare_input(text);
    let lines: Vec<&str> = prepared.lines().collect();
    let mut report = ParseReport::default();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !line.contains(TIMESTAMP_SEPARATOR) {
            i += 1;
            continue;
        }

        let timing_line = i + 1;
        let mut text_lines = Vec::new();
        let mut j = i + 1;
        while j < lines.len() {
            let candidate = lines[j];
            let trimmed = candidate.trim();
            if trimmed.is_empty() || candidate.contains(TIMESTAMP_SEPARATOR) {
                break;
            }
            // text keeps its own indentation; only the checks ignore it
            if !is_index_line(trimmed) {
                text_lines.push(candidate);
            }
            j += 1;
        }

        match build_cue(line, text_lines.join(LINE_BREAK)) {
            Ok(cue) => report.cues.push(cue),
            Err((kind, message)) => {
                debug!(line = timing_line, %kind, %message, "skipping SRT block");
                report
                    .issues
                    .push(ParseIssue::new(kind, timing_line, message));
            }
        }

        i = j;
    }

    debug!(
        cues = report.cues.len(),
        skipped = report.issues.len(),
        "parsed SRT text"
    );
    report
}

fn build_cue(timing: &str, text: String) -> Result<Cue, (IssueKind, String)> {
    let (start_str, end_str) = timing
        .split_once(TIMESTAMP_SEPARATOR)
        .map(|(a, b)| (a.trim(), b.trim()))
        .unwrap_or_default();

    if start_str.is_empty() || end_str.is_empty() {
        return Err((
            IssueKind::MissingTimestamp,
            format!("expected `start --> end`, found {timing:?}"),
        ));
    }

    let start = parse_srt_time(start_str)
        .map_err(|err| (IssueKind::InvalidTimestamp, err.to_string()))?;
    let end =
        parse_srt_time(end_str).map_err(|err| (IssueKind::InvalidTimestamp, err.to_string()))?;

    if end <= start {
        return Err((
            IssueKind::NonPositiveDuration,
            format!("{start_str} --> {end_str} never becomes active"),
        ));
    }

    Ok(Cue { start, end, text })
}

fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lines_detected() {
        assert!(is_index_line("12"));
        assert!(!is_index_line("12a"));
        assert!(!is_index_line(""));
    }

    #[test]
    fn report_records_dropped_blocks() {
        let report = parse_srt_report(
            "1\n00:00:01,000 --> 00:00:03,000\nok\n\n2\nxx --> 00:00:05,000\nbad\n\n3\n --> \nnothing",
        );
        assert_eq!(report.cues.len(), 1);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].kind, IssueKind::InvalidTimestamp);
        assert_eq!(report.issues[0].line, 6);
        assert_eq!(report.issues[1].kind, IssueKind::MissingTimestamp);
        assert!(!report.is_clean());
    }

    #[test]
    fn zero_length_cue_is_reported() {
        let report = parse_srt_report("00:00:02,000 --> 00:00:02,000\nflash");
        assert!(report.cues.is_empty());
        assert_eq!(report.issues[0].kind, IssueKind::NonPositiveDuration);
    }
}
