//! Playback session layer for dual-track subtitles
//!
//! `subsync-player` drives the engine in `subsync-core` from a media
//! player: it loads the selected subtitle tracks, keeps the highlighted line
//! in sync with playback, maps keyboard shortcuts to player commands and
//! runs the word lookup popup against a translation backend.
//!
//! # Features
//!
//! - **Track discovery**: `<video_id>.<lang>.srt` naming with English preselected as the secondary line
//! - **Race-free loading**: generation-stamped loads; stale results are dropped
//! - **Player seam**: any [`PlayerControl`] can drive a session
//! - **Word lookup**: translate or echo a clicked word, then save it with its definition
//! - **HTTP services**: reqwest-backed fetcher, translator and vocabulary store (`http` feature)
//!
//! # Example
//!
//! ```
//! use subsync_player::{PlaybackSession, PlayerConfig, PlayerControl, SimulatedPlayer};
//! use subsync_player::tracks::TrackSelection;
//! use subsync_core::{parse_srt, NoLayout, SyncView, BlockId};
//!
//! struct Log(Vec<BlockId>);
//! impl SyncView for Log {
//!     fn clear_highlights(&mut self) {}
//!     fn highlight(&mut self, id: BlockId) { self.0.push(id) }
//!     fn scroll_by(&mut self, _delta: f64) {}
//! }
//!
//! let mut session = PlaybackSession::new(PlayerConfig::default());
//! let ticket = session.begin_track_change(TrackSelection::default());
//! let primary = parse_srt("1\n00:00:01,000 --> 00:00:03,000\nHola\n");
//! session.apply_loaded(&ticket, &primary, &Default::default());
//!
//! let mut player = SimulatedPlayer::new(10.0);
//! player.seek(2.0);
//! let mut view = Log(Vec::new());
//! session.on_time_update(&mut player, &NoLayout, &mut view);
//! assert_eq!(view.0, vec![BlockId(0)]);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod lookup;
pub mod player;
pub mod services;
pub mod sessions;
pub mod tracks;

pub use crate::core::{PlayerConfig, PlayerError, Result};
pub use lookup::{LookupPopup, LookupState, StatusKind, StatusMessage, WordSelection};
pub use player::{apply_shortcut, PlayerControl, Shortcut, ShortcutOutcome, SimulatedPlayer};
pub use services::{
    FsFetcher, SaveRequest, SaveResponse, SubtitleFetcher, TranslationRequest,
    TranslationResponse, Translator, VocabularyStore,
};
#[cfg(feature = "http")]
pub use services::{HttpFetcher, HttpTranslator, HttpVocabulary};
pub use sessions::{LoadTicket, PlaybackSession, SharedSession, TrackLoadOutcome};
pub use tracks::{discover_tracks, preselect, SubtitleTrack, TrackSelection};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
