//! SRT timestamp conversion
//!
//! SRT timestamps have the shape `HH:MM:SS,mmm`. Playback time is carried
//! as `f64` seconds throughout the engine, matching what media players
//! report on their time-update notifications.

use crate::utils::errors::{CoreError, Result};

/// Parse an SRT timestamp into seconds
///
/// Computes `H*3600 + M*60 + S + ms/1000`. Parsing is lenient in the same
/// places real files are: surrounding whitespace and trailing cue settings
/// (`00:00:01,000 X1:40`) are ignored, a `.` is accepted in place of the
/// comma, and a missing millisecond part counts as zero. Field ranges are
/// not validated.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] when the value does not have three
/// colon-separated numeric fields, or [`CoreError::InvalidNumeric`] when a
/// field overflows.
///
/// # Examples
///
/// ```rust
/// use subsync_core::utils::parse_srt_time;
///
/// assert_eq!(parse_srt_time("00:01:02,500")?, 62.5);
/// assert_eq!(parse_srt_time("01:00:00,000")?, 3600.0);
/// assert!(parse_srt_time("not a time").is_err());
/// # Ok::<(), subsync_core::CoreError>(())
/// ```
pub fn parse_srt_time(time_str: &str) -> Result<f64> {
    let token = time_str
        .split_whitespace()
        .next()
        .ok_or_else(|| CoreError::invalid_time(time_str, "empty timestamp"))?;

    let (clock, millis) = match token.rfind(|c: char| c == ',' || c == '.') {
        Some(pos) => (&token[..pos], &token[pos + 1..]),
        None => (token, ""),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3 {
        return Err(CoreError::invalid_time(
            time_str,
            "expected HH:MM:SS,mmm",
        ));
    }

    let hours = parse_field(parts[0], time_str, "hours")?;
    let minutes = parse_field(parts[1], time_str, "minutes")?;
    let seconds = parse_field(parts[2], time_str, "seconds")?;
    let millis = if millis.is_empty() {
        0
    } else {
        parse_field(millis, time_str, "milliseconds")?
    };

    Ok(f64::from(hours) * 3600.0
        + f64::from(minutes) * 60.0
        + f64::from(seconds)
        + f64::from(millis) / 1000.0)
}

fn parse_field(field: &str, time_str: &str, name: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_time(
            time_str,
            &format!("invalid {name}: {field:?}"),
        ));
    }
    // all digits, so the only failure left is overflow
    Ok(field.parse::<u32>()?)
}

/// Format seconds as an SRT timestamp
///
/// Negative and non-finite input is clamped to zero. The value is rounded
/// to the nearest millisecond, so [`parse_srt_time`] recovers it within 1ms.
///
/// # Examples
///
/// ```rust
/// use subsync_core::utils::format_srt_time;
///
/// assert_eq!(format_srt_time(62.5), "00:01:02,500");
/// assert_eq!(format_srt_time(3725.042), "01:02:05,042");
/// ```
#[must_use]
pub fn format_srt_time(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_timestamps() {
        assert_eq!(parse_srt_time("00:00:01,000").unwrap(), 1.0);
        assert_eq!(parse_srt_time("00:00:04,250").unwrap(), 4.25);
        assert!((parse_srt_time("10:59:59,999").unwrap() - 39599.999).abs() < 1e-9);
    }

    #[test]
    fn tolerates_real_world_irregularities() {
        assert_eq!(parse_srt_time("  00:00:02,000  ").unwrap(), 2.0);
        assert_eq!(parse_srt_time("00:00:02.500").unwrap(), 2.5);
        assert_eq!(parse_srt_time("00:00:03").unwrap(), 3.0);
        assert_eq!(parse_srt_time("00:00:05,000 X1:40 X2:600").unwrap(), 5.0);
        assert!((parse_srt_time("0:0:7,5").unwrap() - 7.005).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(parse_srt_time("").is_err());
        assert!(parse_srt_time("00:01,000").is_err());
        assert!(parse_srt_time("aa:bb:cc,ddd").is_err());
        assert!(parse_srt_time("-1:00:00,000").is_err());
    }

    #[test]
    fn formats_with_padding() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(1.001), "00:00:01,001");
        assert_eq!(format_srt_time(-4.0), "00:00:00,000");
        assert_eq!(format_srt_time(f64::NAN), "00:00:00,000");
        assert_eq!(format_srt_time(360_000.0), "100:00:00,000");
    }
}
