//! Keyboard shortcuts
//!
//! | Key         | Action                                   |
//! |-------------|------------------------------------------|
//! | Space       | play/pause, unless the player has focus  |
//! | Left/Right  | seek back/forward by the configured step |
//! | `l`         | toggle line loop                         |
//! | `f`         | toggle fullscreen                        |
//! | `m`         | toggle mute                              |

use super::PlayerControl;

/// Action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Play or pause
    TogglePlay,
    /// Seek backwards one step
    SeekBackward,
    /// Seek forwards one step
    SeekForward,
    /// Toggle line loop
    ToggleLoop,
    /// Enter or leave fullscreen
    ToggleFullscreen,
    /// Mute or unmute
    ToggleMute,
}

impl Shortcut {
    /// Map a key name (as in DOM `KeyboardEvent.key`) to a shortcut
    ///
    /// Matching is case-insensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            " " | "space" | "spacebar" => Some(Self::TogglePlay),
            "arrowleft" | "left" => Some(Self::SeekBackward),
            "arrowright" | "right" => Some(Self::SeekForward),
            "l" => Some(Self::ToggleLoop),
            "f" => Some(Self::ToggleFullscreen),
            "m" => Some(Self::ToggleMute),
            _ => None,
        }
    }
}

/// What [`apply_shortcut`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// The player was updated
    Applied,
    /// Loop state lives in the session; the caller must toggle it
    ToggleLoop,
    /// Nothing happened
    Ignored,
}

/// Apply a shortcut to the player
///
/// Space is ignored while the player itself has focus, since the player
/// handles it natively there. Seeks are clamped to `[0, duration]`.
pub fn apply_shortcut<P: PlayerControl + ?Sized>(
    shortcut: Shortcut,
    player: &mut P,
    player_focused: bool,
    seek_step: f64,
) -> ShortcutOutcome {
    match shortcut {
        Shortcut::TogglePlay => {
            if player_focused {
                return ShortcutOutcome::Ignored;
            }
            if player.is_paused() {
                player.play();
            } else {
                player.pause();
            }
        }
        Shortcut::SeekBackward => {
            let target = (player.current_time() - seek_step).max(0.0);
            player.seek(target);
        }
        Shortcut::SeekForward => {
            // f64::min ignores a NaN duration
            let target = (player.current_time() + seek_step).min(player.duration());
            player.seek(target);
        }
        Shortcut::ToggleLoop => return ShortcutOutcome::ToggleLoop,
        Shortcut::ToggleFullscreen => {
            if player.is_fullscreen() {
                player.exit_fullscreen();
            } else {
                player.enter_fullscreen();
            }
        }
        Shortcut::ToggleMute => {
            let muted = player.is_muted();
            player.set_muted(!muted);
        }
    }
    ShortcutOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SimulatedPlayer;

    #[test]
    fn key_names() {
        assert_eq!(Shortcut::from_key(" "), Some(Shortcut::TogglePlay));
        assert_eq!(Shortcut::from_key("ArrowLeft"), Some(Shortcut::SeekBackward));
        assert_eq!(Shortcut::from_key("L"), Some(Shortcut::ToggleLoop));
        assert_eq!(Shortcut::from_key("x"), None);
    }

    #[test]
    fn seeks_are_clamped() {
        let mut player = SimulatedPlayer::new(20.0);
        player.seek(3.0);
        apply_shortcut(Shortcut::SeekBackward, &mut player, false, 5.0);
        assert_eq!(player.current_time(), 0.0);

        player.seek(18.0);
        apply_shortcut(Shortcut::SeekForward, &mut player, false, 5.0);
        assert_eq!(player.current_time(), 20.0);
    }

    #[test]
    fn space_ignored_when_player_focused() {
        let mut player = SimulatedPlayer::new(20.0);
        assert_eq!(
            apply_shortcut(Shortcut::TogglePlay, &mut player, true, 5.0),
            ShortcutOutcome::Ignored
        );
        assert!(player.is_paused());

        apply_shortcut(Shortcut::TogglePlay, &mut player, false, 5.0);
        assert!(!player.is_paused());
    }

    #[test]
    fn toggles() {
        let mut player = SimulatedPlayer::new(20.0);
        apply_shortcut(Shortcut::ToggleMute, &mut player, false, 5.0);
        apply_shortcut(Shortcut::ToggleFullscreen, &mut player, false, 5.0);
        assert!(player.is_muted());
        assert!(player.is_fullscreen());
        assert_eq!(
            apply_shortcut(Shortcut::ToggleLoop, &mut player, false, 5.0),
            ShortcutOutcome::ToggleLoop
        );
    }
}
