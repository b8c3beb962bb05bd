//! SRT serialization
//!
//! Writes cues as numbered blocks. Joined cue text is split back onto
//! separate lines so the output parses to the same cues.

use super::{cue::Cue, LINE_BREAK};
use crate::utils::format_srt_time;

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`)
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    format_srt_time(seconds)
}

/// Write cues as SRT, numbering blocks from 1
///
/// # Examples
///
/// ```rust
/// use subsync_core::parser::{write_srt, Cue};
///
/// let cues = [Cue::new(1.0, 3.0, "Hello<br>world")?];
/// assert_eq!(
///     write_srt(&cues),
///     "1\n00:00:01,000 --> 00:00:03,000\nHello\nworld\n"
/// );
/// # Ok::<(), subsync_core::CoreError>(())
/// ```
#[must_use]
pub fn write_srt(cues: &[Cue]) -> String {
    let mut out = String::with_capacity(cues.len() * 64);
    for (index, cue) in cues.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}\n{} --> {}\n",
            index + 1,
            format_srt_time(cue.start),
            format_srt_time(cue.end)
        ));
        for line in cue.text.split(LINE_BREAK) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
