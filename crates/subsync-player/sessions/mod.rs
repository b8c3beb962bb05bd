//! Playback session state
//!
//! A [`PlaybackSession`] owns everything that changes while a video plays:
//! the selected tracks, the aligned blocks and the sync state. It reacts to
//! three kinds of event (track change, time update, user input) and is the
//! only place that state lives.
//!
//! Track loads are asynchronous and cannot be cancelled. Each load takes a
//! generation number when it starts; a result whose generation is no longer
//! current is dropped, so a slow response can never replace the tracks of a
//! newer selection.

use crate::{
    core::{PlayerConfig, PlayerError, Result},
    lookup::WordSelection,
    player::{apply_shortcut, PlayerControl, Shortcut, ShortcutOutcome},
    services::SubtitleFetcher,
    tracks::TrackSelection,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use subsync_core::{
    align::{align, block_by_id, Block, BlockId, LineKind},
    annotate::{mark_word, resolve_click, WordRef},
    parser::{parse_srt, CueSequence},
    sync::{LayoutGeometry, SyncController, SyncOutcome, SyncState, SyncView},
};
use tracing::{debug, info, warn};

/// Proof that a track load was started, carrying its generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    selection: TrackSelection,
}

impl LoadTicket {
    /// Generation this load belongs to
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Tracks being loaded
    #[must_use]
    pub const fn selection(&self) -> &TrackSelection {
        &self.selection
    }
}

/// Result of a track change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLoadOutcome {
    /// Generation of the load
    pub generation: u64,
    /// `false` if a newer selection superseded this one
    pub applied: bool,
    /// Blocks built, when applied
    pub blocks: usize,
    /// Fetch failures; the failed track was loaded as empty
    pub errors: Vec<PlayerError>,
}

/// State of one playing video
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    config: PlayerConfig,
    selection: TrackSelection,
    sync: SyncController,
    generation: u64,
}

impl PlaybackSession {
    /// Create a session with no tracks loaded
    #[must_use]
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Tracks whose blocks are currently shown
    #[must_use]
    pub const fn selection(&self) -> &TrackSelection {
        &self.selection
    }

    /// Current blocks
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.sync.blocks()
    }

    /// Current sync state
    #[must_use]
    pub const fn sync_state(&self) -> &SyncState {
        self.sync.state()
    }

    /// Latest load generation
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a track change and take a ticket for its results
    ///
    /// Any load still in flight becomes stale. The current blocks stay on
    /// screen until [`apply_loaded`](Self::apply_loaded) replaces them.
    pub fn begin_track_change(&mut self, selection: TrackSelection) -> LoadTicket {
        self.generation += 1;
        debug!(
            generation = self.generation,
            primary = selection.primary_lang(),
            secondary = selection.secondary_lang(),
            "track change started"
        );
        LoadTicket {
            generation: self.generation,
            selection,
        }
    }

    /// Install loaded tracks if `ticket` is still current
    ///
    /// Returns `false`, leaving the session untouched, for a stale ticket.
    pub fn apply_loaded(
        &mut self,
        ticket: &LoadTicket,
        primary: &CueSequence,
        secondary: &CueSequence,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale track load"
            );
            return false;
        }

        let blocks = align(primary.as_slice(), secondary.as_slice());
        info!(
            generation = ticket.generation,
            blocks = blocks.len(),
            primary = primary.len(),
            secondary = secondary.len(),
            "tracks loaded"
        );
        self.selection = ticket.selection.clone();
        self.sync.reset(blocks);
        true
    }

    /// Handle a time update from the player
    ///
    /// A loop seek is applied to the player (seek, then play). Otherwise
    /// the highlight and scroll are applied to `view`.
    pub fn on_time_update<P, G, V>(
        &mut self,
        player: &mut P,
        geometry: &G,
        view: &mut V,
    ) -> SyncOutcome
    where
        P: PlayerControl + ?Sized,
        G: LayoutGeometry + ?Sized,
        V: SyncView + ?Sized,
    {
        let outcome = self.sync.on_time_update(player.current_time(), geometry);
        match outcome {
            SyncOutcome::Seek { to } => {
                player.seek(to);
                player.play();
            }
            SyncOutcome::Render { .. } => outcome.render(view),
        }
        outcome
    }

    /// Handle a click on a block, seeking to its start when needed
    ///
    /// Returns the seek target, or `None` when the cursor is already inside
    /// the block.
    ///
    /// # Errors
    ///
    /// Returns a core `BlockNotFound` error for an id from an older
    /// alignment.
    pub fn click_block<P: PlayerControl + ?Sized>(
        &self,
        id: BlockId,
        player: &mut P,
    ) -> Result<Option<f64>> {
        let target = self.sync.click(id, player.current_time())?;
        if let Some(time) = target {
            player.seek(time);
        }
        Ok(target)
    }

    /// Flip loop mode and return the new value
    pub fn toggle_loop(&mut self) -> bool {
        let looping = self.sync.toggle_loop();
        debug!(looping, "loop toggled");
        looping
    }

    /// Handle a key press
    ///
    /// Returns the shortcut that was applied, or `None` for unbound keys
    /// and keys that were ignored in the current focus state.
    pub fn handle_key<P: PlayerControl + ?Sized>(
        &mut self,
        key: &str,
        player_focused: bool,
        player: &mut P,
    ) -> Option<Shortcut> {
        let shortcut = Shortcut::from_key(key)?;
        match apply_shortcut(shortcut, player, player_focused, self.config.seek_step_secs) {
            ShortcutOutcome::Applied => Some(shortcut),
            ShortcutOutcome::ToggleLoop => {
                self.toggle_loop();
                Some(shortcut)
            }
            ShortcutOutcome::Ignored => None,
        }
    }

    /// Resolve a click on a word of a block
    ///
    /// # Errors
    ///
    /// Returns a core `BlockNotFound` error for a stale block id, or
    /// [`PlayerError::EmptyWord`] if the line has no such word.
    pub fn select_word(&self, id: BlockId, word: WordRef) -> Result<WordSelection> {
        let block = block_by_id(self.blocks(), id)?;
        let text = block.text(word.line);
        let lang_code = match word.line {
            LineKind::Primary => self.selection.primary_lang(),
            LineKind::Secondary => self.selection.secondary_lang(),
        };

        let lookup =
            resolve_click(text, word.word_index, lang_code).ok_or(PlayerError::EmptyWord)?;
        let original_markup = mark_word(text, word.word_index).ok_or(PlayerError::EmptyWord)?;

        Ok(WordSelection {
            lookup,
            original_markup,
        })
    }
}

/// Session shared between the UI thread and async track loaders
///
/// The lock is only taken for short synchronous sections and never held
/// across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SharedSession(Arc<Mutex<PlaybackSession>>);

impl SharedSession {
    /// Wrap a session
    #[must_use]
    pub fn new(session: PlaybackSession) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    /// Lock the session for synchronous access
    pub fn lock(&self) -> MutexGuard<'_, PlaybackSession> {
        self.0.lock()
    }

    /// Fetch, parse and install a new track selection
    ///
    /// Both tracks are fetched concurrently. A track that fails to fetch is
    /// loaded as empty and its error is reported in the outcome; an empty
    /// selection is valid and loads nothing.
    pub async fn change_tracks<F>(
        &self,
        fetcher: &F,
        selection: TrackSelection,
    ) -> TrackLoadOutcome
    where
        F: SubtitleFetcher + ?Sized,
    {
        let ticket = self.lock().begin_track_change(selection);

        let (primary, secondary) = tokio::join!(
            fetcher.fetch_text(ticket.selection().primary_url()),
            fetcher.fetch_text(ticket.selection().secondary_url()),
        );

        let mut errors = Vec::new();
        let mut parse_track = |fetched: Result<String>, lang: &str| match fetched {
            Ok(text) => parse_srt(&text),
            Err(err) => {
                warn!(lang, error = %err, "subtitle track failed to load");
                errors.push(err);
                CueSequence::new()
            }
        };
        let primary = parse_track(primary, ticket.selection().primary_lang());
        let secondary = parse_track(secondary, ticket.selection().secondary_lang());

        let mut session = self.lock();
        let applied = session.apply_loaded(&ticket, &primary, &secondary);
        let blocks = if applied { session.blocks().len() } else { 0 };
        drop(session);

        TrackLoadOutcome {
            generation: ticket.generation(),
            applied,
            blocks,
            errors,
        }
    }
}
