//! Subtitle track discovery and preselection
//!
//! Subtitle files live next to the video and are named
//! `<video_id>.<lang>.srt`. The language tag is taken from the file name
//! and uppercased for display.

use serde::{Deserialize, Serialize};

/// Language tag that is preselected as the secondary track
pub const ENGLISH: &str = "EN";

/// One available subtitle track
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Uppercased language tag, e.g. `ES`
    pub lang_code: String,
    /// Location passed to a [`SubtitleFetcher`](crate::services::SubtitleFetcher)
    pub url: String,
}

impl SubtitleTrack {
    /// Create a track, uppercasing the language tag
    #[must_use]
    pub fn new(lang_code: &str, url: impl Into<String>) -> Self {
        Self {
            lang_code: lang_code.trim().to_uppercase(),
            url: url.into(),
        }
    }

    /// Check whether this is the English track
    #[must_use]
    pub fn is_english(&self) -> bool {
        self.lang_code == ENGLISH
    }
}

/// Tracks chosen for the two display lines
///
/// `None` is a valid choice and loads as an empty track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSelection {
    /// Track that defines the block timeline
    pub primary: Option<SubtitleTrack>,
    /// Track matched into each block by overlap
    pub secondary: Option<SubtitleTrack>,
}

impl TrackSelection {
    /// Select two tracks
    #[must_use]
    pub const fn new(primary: Option<SubtitleTrack>, secondary: Option<SubtitleTrack>) -> Self {
        Self { primary, secondary }
    }

    /// URL of the primary track, empty if none
    #[must_use]
    pub fn primary_url(&self) -> &str {
        self.primary.as_ref().map_or("", |t| t.url.as_str())
    }

    /// URL of the secondary track, empty if none
    #[must_use]
    pub fn secondary_url(&self) -> &str {
        self.secondary.as_ref().map_or("", |t| t.url.as_str())
    }

    /// Language tag of the primary track, empty if none
    #[must_use]
    pub fn primary_lang(&self) -> &str {
        self.primary.as_ref().map_or("", |t| t.lang_code.as_str())
    }

    /// Language tag of the secondary track, empty if none
    #[must_use]
    pub fn secondary_lang(&self) -> &str {
        self.secondary.as_ref().map_or("", |t| t.lang_code.as_str())
    }
}

/// Language tag of a subtitle file belonging to `video_id`
///
/// The tag is the second-to-last dot-separated part of the name, so
/// `abc.pt.BR.srt` yields `BR` and `abc.en-US.srt` yields `EN-US`. Returns
/// `None` for files of other videos or other formats.
#[must_use]
pub fn lang_code_from_file_name(video_id: &str, file_name: &str) -> Option<String> {
    let rest = file_name.strip_prefix(video_id)?.strip_prefix('.')?;
    let stem = rest.strip_suffix(".srt")?;
    let lang = stem.rsplit('.').next()?;
    (!lang.is_empty()).then(|| lang.to_uppercase())
}

/// Build the track list for a video from a directory listing
///
/// Each matching file becomes a track whose URL is `url_prefix` joined with
/// the file name. Tracks are sorted by language tag.
pub fn discover_tracks<I, S>(video_id: &str, file_names: I, url_prefix: &str) -> Vec<SubtitleTrack>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = url_prefix.trim_end_matches('/');
    let mut tracks: Vec<SubtitleTrack> = file_names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let lang = lang_code_from_file_name(video_id, name)?;
            let url = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };
            Some(SubtitleTrack { lang_code: lang, url })
        })
        .collect();
    tracks.sort_by(|a, b| a.lang_code.cmp(&b.lang_code).then_with(|| a.url.cmp(&b.url)));
    tracks
}

/// Initial track choice for a freshly opened video
///
/// English goes on the secondary line. When English is one of exactly two
/// tracks, the other one becomes the primary line; otherwise the primary
/// is left for the user to pick.
#[must_use]
pub fn preselect(tracks: &[SubtitleTrack]) -> TrackSelection {
    let english = tracks.iter().find(|t| t.is_english());
    let primary = match (english, tracks.len()) {
        (Some(_), 2) => tracks.iter().find(|t| !t.is_english()).cloned(),
        _ => None,
    };

    TrackSelection {
        primary,
        secondary: english.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_from_file_names() {
        assert_eq!(lang_code_from_file_name("abc", "abc.es.srt").as_deref(), Some("ES"));
        assert_eq!(lang_code_from_file_name("abc", "abc.en-US.srt").as_deref(), Some("EN-US"));
        assert_eq!(lang_code_from_file_name("abc", "abc.pt.BR.srt").as_deref(), Some("BR"));
        assert_eq!(lang_code_from_file_name("abc", "abc.srt"), None);
        assert_eq!(lang_code_from_file_name("abc", "abc.mp4"), None);
        assert_eq!(lang_code_from_file_name("abc", "abcd.es.srt"), None);
        assert_eq!(lang_code_from_file_name("abc", "xyz.es.srt"), None);
    }

    #[test]
    fn selection_urls_default_to_empty() {
        let selection = TrackSelection::default();
        assert_eq!(selection.primary_url(), "");
        assert_eq!(selection.secondary_lang(), "");
    }
}
