//! Media player seam
//!
//! The engine treats the player as an opaque time cursor. Anything that can
//! report its position and accept seeks and transport commands can drive a
//! session: a browser video element behind FFI, a native player, or the
//! in-memory [`SimulatedPlayer`].

pub mod shortcuts;
mod simulated;

pub use shortcuts::{apply_shortcut, Shortcut, ShortcutOutcome};
pub use simulated::SimulatedPlayer;

/// Transport and state surface of a media player
pub trait PlayerControl {
    /// Playback position in seconds
    fn current_time(&self) -> f64;

    /// Media length in seconds; may be NaN before metadata is known
    fn duration(&self) -> f64;

    /// Whether playback is paused
    fn is_paused(&self) -> bool;

    /// Whether audio is muted
    fn is_muted(&self) -> bool;

    /// Whether the player fills the screen
    fn is_fullscreen(&self) -> bool;

    /// Move the playback position
    fn seek(&mut self, time: f64);

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Mute or unmute audio
    fn set_muted(&mut self, muted: bool);

    /// Enter fullscreen
    fn enter_fullscreen(&mut self);

    /// Leave fullscreen
    fn exit_fullscreen(&mut self);
}
