//! Playback bookkeeping for the music view.
//!
//! The media element is the source of truth; these types only mirror its
//! events so the view can derive the ending indicator and the lyric ticker.

/// Milliseconds between lyric lines while the anthem plays.
pub const LINE_INTERVAL_MS: u32 = 16_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Playback {
    #[default]
    Idle,
    Playing,
    Paused,
    /// Playback ran to the end; the completion heart is showing.
    Ended,
}

impl Playback {
    pub fn on_play(&mut self) {
        *self = Self::Playing;
    }

    /// The browser fires `pause` right before `ended`; `on_ended` wins
    /// because it arrives after.
    pub fn on_pause(&mut self) {
        *self = Self::Paused;
    }

    pub fn on_ended(&mut self) {
        *self = Self::Ended;
    }

    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Completion indicator; cleared the moment playback restarts.
    #[must_use]
    pub const fn show_ending(self) -> bool {
        matches!(self, Self::Ended)
    }
}

/// Cycles through the anthem's lyric lines while playing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LineTicker {
    index: usize,
}

impl LineTicker {
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self, line_count: usize) {
        if line_count > 0 {
            self.index = (self.index + 1) % line_count;
        }
    }

    /// Back to the first line (playback ended).
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ending_indicator_clears_on_replay() {
        let mut playback = Playback::default();
        playback.on_play();
        assert!(playback.is_playing());
        playback.on_pause();
        playback.on_ended();
        assert!(playback.show_ending());
        playback.on_play();
        assert!(!playback.show_ending());
        assert!(playback.is_playing());
    }

    #[test]
    fn ticker_wraps_and_resets() {
        let mut ticker = LineTicker::default();
        ticker.advance(3);
        ticker.advance(3);
        assert_eq!(ticker.index(), 2);
        ticker.advance(3);
        assert_eq!(ticker.index(), 0);
        ticker.advance(3);
        ticker.reset();
        assert_eq!(ticker.index(), 0);
    }

    #[test]
    fn ticker_ignores_empty_line_lists() {
        let mut ticker = LineTicker::default();
        ticker.advance(0);
        assert_eq!(ticker.index(), 0);
    }
}
