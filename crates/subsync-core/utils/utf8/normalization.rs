//! Line ending normalization for subtitle text
//!
//! SRT files circulate with Windows (`\r\n`), Unix (`\n`) and classic Mac
//! (`\r`) line endings, sometimes mixed within one file.

use super::bom::strip_bom;

/// Normalize line endings to Unix style (`\n`)
///
/// # Examples
///
/// ```rust
/// # use subsync_core::utils::utf8::normalize_line_endings;
/// let input = "Line 1\r\nLine 2\rLine 3\n";
/// assert_eq!(normalize_line_endings(input), "Line 1\nLine 2\nLine 3\n");
/// ```
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Prepare raw subtitle text for line scanning
///
/// Strips a BOM, normalizes line endings and trims surrounding whitespace.
#[must_use]
pub fn prepare_input(text: &str) -> String {
    let (text, _) = strip_bom(text);
    normalize_line_endings(text).trim().to_string()
}
