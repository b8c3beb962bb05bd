//! BOM (Byte Order Mark) detection and stripping
//!
//! Subtitle editors on Windows frequently save SRT files with a UTF-8 BOM.
//! Left in place it would glue itself to the first index line, so it is
//! removed before the cue scanner runs. UTF-16 files are refused outright
//! rather than decoded into mojibake.

use crate::utils::errors::{CoreError, Result};

/// Byte Order Mark signatures recognised in subtitle downloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BomType {
    /// UTF-8 BOM (EF BB BF)
    Utf8,
    /// UTF-16 Little Endian (FF FE)
    Utf16Le,
    /// UTF-16 Big Endian (FE FF)
    Utf16Be,
}

impl BomType {
    /// Byte signature for this BOM type
    #[must_use]
    pub const fn signature(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
        }
    }

    /// Canonical encoding name for this BOM
    #[must_use]
    pub const fn encoding_name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
        }
    }
}

/// Strip a leading UTF-8 BOM from already-decoded text
///
/// Returns the remaining slice and whether a BOM was removed. Only the
/// UTF-8 mark can appear in a `&str`; other encodings must be transcoded
/// before they reach the parser.
///
/// # Examples
///
/// ```rust
/// # use subsync_core::utils::utf8::strip_bom;
/// let (stripped, had_bom) = strip_bom("\u{FEFF}1");
/// assert_eq!(stripped, "1");
/// assert!(had_bom);
/// ```
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => (rest, true),
        None => (text, false),
    }
}

/// Detect BOM type from a raw byte sequence
#[must_use]
pub fn detect_bom(bytes: &[u8]) -> Option<BomType> {
    [BomType::Utf8, BomType::Utf16Le, BomType::Utf16Be]
        .into_iter()
        .find(|bom| bytes.starts_with(bom.signature()))
}

/// Decode a downloaded subtitle file into text
///
/// A UTF-8 BOM is dropped and invalid UTF-8 sequences become U+FFFD.
///
/// # Errors
///
/// Returns [`CoreError::UnsupportedEncoding`] when the bytes start with a
/// UTF-16 byte order mark.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let body = match detect_bom(bytes) {
        Some(BomType::Utf8) => &bytes[BomType::Utf8.signature().len()..],
        Some(bom) => return Err(CoreError::UnsupportedEncoding(bom.encoding_name())),
        None => bytes,
    };
    Ok(String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_type_properties() {
        assert_eq!(BomType::Utf8.signature(), &[0xEF, 0xBB, 0xBF]);
        assert_eq!(BomType::Utf16Le.encoding_name(), "UTF-16LE");
    }

    #[test]
    fn strip_utf8_bom() {
        let (stripped, had_bom) = strip_bom("\u{FEFF}00:00:01,000");
        assert_eq!(stripped, "00:00:01,000");
        assert!(had_bom);
    }

    #[test]
    fn strip_no_bom() {
        let (stripped, had_bom) = strip_bom("Hello");
        assert_eq!(stripped, "Hello");
        assert!(!had_bom);
    }

    #[test]
    fn detect_from_bytes() {
        assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, b'1']), Some(BomType::Utf8));
        assert_eq!(detect_bom(&[0xFE, 0xFF, 0x00]), Some(BomType::Utf16Be));
        assert_eq!(detect_bom(b"1\n"), None);
    }

    #[test]
    fn decode_drops_utf8_bom() {
        let text = decode_text(b"\xEF\xBB\xBF1\n00:00:01,000").unwrap();
        assert_eq!(text, "1\n00:00:01,000");
    }

    #[test]
    fn decode_replaces_invalid_sequences() {
        assert_eq!(decode_text(b"caf\xE9").unwrap(), "caf\u{FFFD}");
    }

    #[test]
    fn decode_rejects_utf16() {
        assert_eq!(
            decode_text(&[0xFF, 0xFE, b'1', 0x00]),
            Err(CoreError::UnsupportedEncoding("UTF-16LE"))
        );
        assert_eq!(
            decode_text(&[0xFE, 0xFF, 0x00, b'1']),
            Err(CoreError::UnsupportedEncoding("UTF-16BE"))
        );
    }
}
