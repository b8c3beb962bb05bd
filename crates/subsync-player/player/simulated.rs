//! In-memory player
//!
//! Advances a clock on demand instead of decoding media. Used by tests and
//! the CLI to drive sessions deterministically.

use super::PlayerControl;

/// Deterministic [`PlayerControl`] implementation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPlayer {
    time: f64,
    duration: f64,
    paused: bool,
    muted: bool,
    fullscreen: bool,
    seeks: Vec<f64>,
}

impl SimulatedPlayer {
    /// Create a paused player at time zero
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            paused: true,
            muted: false,
            fullscreen: false,
            seeks: Vec::new(),
        }
    }

    /// Let `dt` seconds of playback pass; no-op while paused
    ///
    /// Playback pauses on reaching the end, like a media element does.
    pub fn advance(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        self.time += dt;
        if self.time >= self.duration {
            self.time = self.duration;
            self.paused = true;
        }
    }

    /// Every seek target, in order
    #[must_use]
    pub fn seek_log(&self) -> &[f64] {
        &self.seeks
    }
}

impl PlayerControl for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn seek(&mut self, time: f64) {
        let time = time.max(0.0).min(self.duration);
        self.seeks.push(time);
        self.time = time;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn enter_fullscreen(&mut self) {
        self.fullscreen = true;
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_only_while_playing() {
        let mut player = SimulatedPlayer::new(10.0);
        player.advance(1.0);
        assert_eq!(player.current_time(), 0.0);

        player.play();
        player.advance(1.5);
        assert_eq!(player.current_time(), 1.5);
    }

    #[test]
    fn stops_at_end() {
        let mut player = SimulatedPlayer::new(2.0);
        player.play();
        player.advance(5.0);
        assert_eq!(player.current_time(), 2.0);
        assert!(player.is_paused());
    }

    #[test]
    fn seeks_are_logged_and_clamped() {
        let mut player = SimulatedPlayer::new(10.0);
        player.seek(-3.0);
        player.seek(4.0);
        player.seek(99.0);
        assert_eq!(player.seek_log(), &[0.0, 4.0, 10.0]);
    }
}
