//! The embedded external player on the opening slide.
//!
//! It plays two fixed excerpts of one video in a loop and is always muted;
//! the sound on that slide comes from the shared track.

use std::time::{Duration, Instant};

pub const VIDEO_ID: &str = "TQrxavU5dTI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub start: Duration,
    pub end: Duration,
}

impl Clip {
    const fn secs(start: u64, end: u64) -> Self {
        Self {
            start: Duration::from_secs(start),
            end: Duration::from_secs(end),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}

pub const CLIPS: [Clip; 2] = [Clip::secs(42, 51), Clip::secs(69, 77)];

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Stopped,
    /// `played` is the part of the current clip already shown before `since`.
    Playing { since: Instant, played: Duration },
    Paused { played: Duration },
}

#[derive(Debug, Clone)]
pub struct ClipSequence {
    clip: usize,
    state: State,
}

impl Default for ClipSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipSequence {
    pub fn new() -> Self {
        Self {
            clip: 0,
            state: State::Stopped,
        }
    }

    pub fn is_muted(&self) -> bool {
        true
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, State::Playing { .. })
    }

    pub fn clip_index(&self) -> usize {
        self.clip
    }

    /// Seek to the first clip and play.
    pub fn start(&mut self, now: Instant) {
        self.clip = 0;
        self.state = State::Playing {
            since: now,
            played: Duration::ZERO,
        };
        tracing::debug!(video = VIDEO_ID, "embedded clip sequence started");
    }

    pub fn stop(&mut self) {
        self.clip = 0;
        self.state = State::Stopped;
    }

    pub fn pause(&mut self, now: Instant) {
        self.tick(now);
        if let State::Playing { since, played } = self.state {
            self.state = State::Paused {
                played: played + now.saturating_duration_since(since),
            };
        }
    }

    /// Continue the current clip for whatever time it had left.
    pub fn resume(&mut self, now: Instant) {
        if let State::Paused { played } = self.state {
            self.state = State::Playing { since: now, played };
        }
    }

    /// Move on to the next clip whenever the current one has run out.
    pub fn tick(&mut self, now: Instant) {
        while let State::Playing { since, played } = self.state {
            let len = CLIPS[self.clip].duration();
            let elapsed = played + now.saturating_duration_since(since);
            if elapsed < len {
                break;
            }
            self.clip = (self.clip + 1) % CLIPS.len();
            self.state = State::Playing {
                since: since + (len - played),
                played: Duration::ZERO,
            };
        }
    }

    /// Position inside the source video, if the sequence has been started.
    pub fn position(&self, now: Instant) -> Option<Duration> {
        let clip = CLIPS[self.clip];
        let played = match self.state {
            State::Stopped => return None,
            State::Playing { since, played } => played + now.saturating_duration_since(since),
            State::Paused { played } => played,
        };
        Some(clip.start + played.min(clip.duration()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_clips_alternate() {
        let t0 = Instant::now();
        let mut seq = ClipSequence::new();
        assert_eq!(seq.position(t0), None);
        seq.start(t0);
        assert_eq!(seq.position(t0), Some(secs(42)));

        seq.tick(t0 + secs(8));
        assert_eq!(seq.clip_index(), 0);
        seq.tick(t0 + secs(9));
        assert_eq!(seq.clip_index(), 1);
        assert_eq!(seq.position(t0 + secs(9)), Some(secs(69)));

        seq.tick(t0 + secs(17));
        assert_eq!(seq.clip_index(), 0);
        assert_eq!(seq.position(t0 + secs(18)), Some(secs(43)));
    }

    #[test]
    fn test_tick_catches_up_several_clips() {
        let t0 = Instant::now();
        let mut seq = ClipSequence::new();
        seq.start(t0);
        seq.tick(t0 + secs(25));
        assert_eq!(seq.clip_index(), 0);
        assert_eq!(seq.position(t0 + secs(25)), Some(secs(50)));
        seq.tick(t0 + secs(27));
        assert_eq!(seq.clip_index(), 1);
    }

    #[test]
    fn test_resume_keeps_remaining_clip_time() {
        let t0 = Instant::now();
        let mut seq = ClipSequence::new();
        seq.start(t0);
        seq.pause(t0 + secs(5));
        assert!(!seq.is_playing());
        seq.tick(t0 + secs(60));
        assert_eq!(seq.clip_index(), 0);
        assert_eq!(seq.position(t0 + secs(60)), Some(secs(47)));

        let resumed = t0 + secs(60);
        seq.resume(resumed);
        seq.tick(resumed + secs(3));
        assert_eq!(seq.clip_index(), 0);
        seq.tick(resumed + secs(4));
        assert_eq!(seq.clip_index(), 1);
    }

    #[test]
    fn test_always_muted_and_stoppable() {
        let t0 = Instant::now();
        let mut seq = ClipSequence::new();
        assert!(seq.is_muted());
        seq.start(t0);
        seq.tick(t0 + secs(10));
        seq.stop();
        assert_eq!(seq.clip_index(), 0);
        assert!(!seq.is_playing());
        seq.resume(t0 + secs(11));
        assert!(!seq.is_playing());
    }
}
