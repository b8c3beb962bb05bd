//! Track discovery and initial selection

use pretty_assertions::assert_eq;
use subsync_player::{discover_tracks, preselect, SubtitleTrack};

#[test]
fn discovers_only_matching_subtitle_files() {
    let listing = [
        "vid42.mp4",
        "vid42.es.srt",
        "vid42.en.srt",
        "vid7.fr.srt",
        "vid42.de.vtt",
        "notes.txt",
    ];

    let tracks = discover_tracks("vid42", listing, "/media/");

    assert_eq!(
        tracks,
        vec![
            SubtitleTrack::new("en", "/media/vid42.en.srt"),
            SubtitleTrack::new("es", "/media/vid42.es.srt"),
        ]
    );
}

#[test]
fn empty_prefix_keeps_bare_names() {
    let tracks = discover_tracks("v", ["v.ja.srt"], "");
    assert_eq!(tracks[0].url, "v.ja.srt");
    assert_eq!(tracks[0].lang_code, "JA");
}

#[test]
fn english_pair_fills_both_lines() {
    let tracks = discover_tracks("v", ["v.en.srt", "v.es.srt"], "");
    let selection = preselect(&tracks);

    assert_eq!(selection.primary_lang(), "ES");
    assert_eq!(selection.secondary_lang(), "EN");
}

#[test]
fn several_tracks_leave_primary_to_the_user() {
    let tracks = discover_tracks("v", ["v.en.srt", "v.es.srt", "v.fr.srt"], "");
    let selection = preselect(&tracks);

    assert!(selection.primary.is_none());
    assert_eq!(selection.secondary_url(), "v.en.srt");
}

#[test]
fn no_english_selects_nothing() {
    let tracks = discover_tracks("v", ["v.es.srt", "v.fr.srt"], "");
    let selection = preselect(&tracks);

    assert!(selection.primary.is_none());
    assert!(selection.secondary.is_none());
    assert_eq!(selection.primary_url(), "");
}

#[test]
fn single_english_track_is_secondary_only() {
    let tracks = discover_tracks("v", ["v.en.srt"], "");
    let selection = preselect(&tracks);

    assert!(selection.primary.is_none());
    assert_eq!(selection.secondary_lang(), "EN");
}
