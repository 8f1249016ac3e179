//! Media coordination: the global mute flag, the shared ambient track and
//! the slide-local tracks.
//!
//! Tracks are playback timelines rather than decoders. Each one knows its
//! position, whether it is paused or muted, and when it has ended. The
//! shared track may be driven by one slide at a time, proven by a
//! [`SharedLease`].

pub mod embed;

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Position the ambient track starts from on the landing gate and slide 0.
pub const AMBIENT_START: Duration = Duration::from_secs(195);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("playback of {0} was blocked: no user gesture yet")]
    AutoplayBlocked(MediaId),
    #[error("shared track is already held by {holder}")]
    SharedBusy { holder: &'static str },
}

/// Slide-local tracks, which any active slide may drive directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalMedia {
    Film,
    QuotesBackdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaId {
    Shared,
    Local(LocalMedia),
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaId::Shared => write!(f, "ambient track"),
            MediaId::Local(LocalMedia::Film) => write!(f, "film"),
            MediaId::Local(LocalMedia::QuotesBackdrop) => write!(f, "quotes backdrop"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Playback {
    Paused { at: Duration },
    Playing { since: Instant, from: Duration },
}

#[derive(Debug, Clone)]
pub struct Track {
    pub source: &'static str,
    pub length: Duration,
    pub looping: bool,
    /// Never follows the global mute flag.
    pub always_muted: bool,
    muted: bool,
    playback: Playback,
}

impl Track {
    pub fn new(source: &'static str, length: Duration, looping: bool, always_muted: bool) -> Self {
        Self {
            source,
            length,
            looping,
            always_muted,
            muted: true,
            playback: Playback::Paused { at: Duration::ZERO },
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.playback, Playback::Paused { .. })
    }

    pub fn position(&self, now: Instant) -> Duration {
        match self.playback {
            Playback::Paused { at } => at,
            Playback::Playing { since, from } => {
                let raw = from + now.saturating_duration_since(since);
                if self.looping && !self.length.is_zero() {
                    Duration::from_nanos((raw.as_nanos() % self.length.as_nanos()) as u64)
                } else {
                    raw.min(self.length)
                }
            }
        }
    }

    fn play(&mut self, now: Instant) {
        if let Playback::Paused { at } = self.playback {
            // Playing an ended track starts it over.
            let from = if !self.looping && at >= self.length {
                Duration::ZERO
            } else {
                at
            };
            self.playback = Playback::Playing { since: now, from };
        }
    }

    fn pause(&mut self, now: Instant) {
        let at = self.position(now);
        self.playback = Playback::Paused { at };
    }

    fn seek(&mut self, to: Duration, now: Instant) {
        let to = if self.looping && !self.length.is_zero() {
            Duration::from_nanos((to.as_nanos() % self.length.as_nanos()) as u64)
        } else {
            to.min(self.length)
        };
        self.playback = match self.playback {
            Playback::Paused { .. } => Playback::Paused { at: to },
            Playback::Playing { .. } => Playback::Playing {
                since: now,
                from: to,
            },
        };
    }

    /// Stop the track if it ran off its end. Returns true exactly once per end.
    fn poll_ended(&mut self, now: Instant) -> bool {
        if self.looping || self.is_paused() {
            return false;
        }
        if self.position(now) >= self.length {
            self.playback = Playback::Paused { at: self.length };
            return true;
        }
        false
    }
}

/// Proof that a slide drives the shared track. Not clonable, so at most
/// one exists at a time.
#[derive(Debug)]
#[must_use = "a lease must be returned with MediaBus::release_shared"]
pub struct SharedLease {
    holder: &'static str,
}

impl SharedLease {
    pub fn holder(&self) -> &'static str {
        self.holder
    }
}

pub struct MediaBus {
    muted: bool,
    unlocked: bool,
    holder: Option<&'static str>,
    /// The shared track is muted by a foreground video; the global flag
    /// is what gets restored afterwards.
    shared_held: bool,
    shared: Track,
    film: Track,
    backdrop: Track,
}

impl MediaBus {
    pub fn new(muted: bool) -> Self {
        let mut bus = Self {
            muted,
            unlocked: false,
            holder: None,
            shared_held: false,
            shared: Track::new(
                "/assets/videos/page2_clip_compressed.mp4",
                Duration::from_secs(300),
                true,
                false,
            ),
            film: Track::new(
                "/assets/videos/page8_clip.mp4",
                Duration::from_secs(45),
                false,
                false,
            ),
            backdrop: Track::new(
                "/assets/videos/page12_quotes.mp4",
                Duration::from_secs(60),
                true,
                true,
            ),
        };
        bus.apply_mute();
        bus
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_mute();
        tracing::debug!(muted, "global mute changed");
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    /// Record the user gesture that allows playback.
    pub fn unlock(&mut self) {
        if !self.unlocked {
            tracing::debug!("media unlocked by user gesture");
        }
        self.unlocked = true;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn track(&self, id: MediaId) -> &Track {
        match id {
            MediaId::Shared => &self.shared,
            MediaId::Local(LocalMedia::Film) => &self.film,
            MediaId::Local(LocalMedia::QuotesBackdrop) => &self.backdrop,
        }
    }

    fn local_mut(&mut self, media: LocalMedia) -> &mut Track {
        match media {
            LocalMedia::Film => &mut self.film,
            LocalMedia::QuotesBackdrop => &mut self.backdrop,
        }
    }

    fn apply_mute(&mut self) {
        let muted = self.muted;
        for track in [&mut self.shared, &mut self.film, &mut self.backdrop] {
            track.muted = track.always_muted || muted;
        }
        if self.shared_held {
            self.shared.muted = true;
        }
    }

    fn check_unlocked(&self, id: MediaId) -> Result<(), MediaError> {
        if self.unlocked {
            Ok(())
        } else {
            Err(MediaError::AutoplayBlocked(id))
        }
    }

    pub fn play(&mut self, media: LocalMedia, now: Instant) -> Result<(), MediaError> {
        self.check_unlocked(MediaId::Local(media))?;
        self.local_mut(media).play(now);
        Ok(())
    }

    /// Play and log a rejection instead of returning it.
    pub fn try_play(&mut self, media: LocalMedia, now: Instant) {
        if let Err(err) = self.play(media, now) {
            tracing::warn!("{err}");
        }
    }

    pub fn pause(&mut self, media: LocalMedia, now: Instant) {
        self.local_mut(media).pause(now);
    }

    pub fn seek(&mut self, media: LocalMedia, to: Duration, now: Instant) {
        self.local_mut(media).seek(to, now);
    }

    pub fn acquire_shared(&mut self, holder: &'static str) -> Result<SharedLease, MediaError> {
        if let Some(current) = self.holder {
            return Err(MediaError::SharedBusy { holder: current });
        }
        self.holder = Some(holder);
        tracing::trace!(holder, "shared track acquired");
        Ok(SharedLease { holder })
    }

    /// Return a lease. Any mute hold taken under it is restored.
    pub fn release_shared(&mut self, lease: SharedLease) {
        self.restore_shared_mute(&lease);
        if self.holder == Some(lease.holder) {
            self.holder = None;
        }
        tracing::trace!(holder = lease.holder, "shared track released");
    }

    pub fn shared_holder(&self) -> Option<&'static str> {
        self.holder
    }

    pub fn play_shared(&mut self, _lease: &SharedLease, now: Instant) -> Result<(), MediaError> {
        self.check_unlocked(MediaId::Shared)?;
        self.shared.play(now);
        Ok(())
    }

    pub fn try_play_shared(&mut self, lease: &SharedLease, now: Instant) {
        if let Err(err) = self.play_shared(lease, now) {
            tracing::warn!("{err}");
        }
    }

    pub fn pause_shared(&mut self, _lease: &SharedLease, now: Instant) {
        self.shared.pause(now);
    }

    pub fn seek_shared(&mut self, _lease: &SharedLease, to: Duration, now: Instant) {
        self.shared.seek(to, now);
    }

    /// Mute the shared track regardless of the global flag until restored.
    pub fn hold_shared_muted(&mut self, _lease: &SharedLease) {
        self.shared_held = true;
        self.apply_mute();
    }

    pub fn restore_shared_mute(&mut self, _lease: &SharedLease) {
        if self.shared_held {
            self.shared_held = false;
            self.apply_mute();
        }
    }

    pub fn is_shared_held(&self) -> bool {
        self.shared_held
    }

    /// Tracks that reached their end since the last poll.
    pub fn poll(&mut self, now: Instant) -> Vec<MediaId> {
        let mut ended = Vec::new();
        if self.shared.poll_ended(now) {
            ended.push(MediaId::Shared);
        }
        if self.film.poll_ended(now) {
            ended.push(MediaId::Local(LocalMedia::Film));
        }
        if self.backdrop.poll_ended(now) {
            ended.push(MediaId::Local(LocalMedia::QuotesBackdrop));
        }
        ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILM: MediaId = MediaId::Local(LocalMedia::Film);
    const BACKDROP: MediaId = MediaId::Local(LocalMedia::QuotesBackdrop);

    fn unlocked(muted: bool) -> MediaBus {
        let mut bus = MediaBus::new(muted);
        bus.unlock();
        bus
    }

    #[test]
    fn test_starts_muted_and_locked() {
        let bus = MediaBus::new(true);
        assert!(bus.is_muted());
        assert!(!bus.is_unlocked());
        assert!(bus.track(MediaId::Shared).is_muted());
        assert!(bus.track(FILM).is_muted());
    }

    #[test]
    fn test_play_blocked_before_gesture() {
        let t0 = Instant::now();
        let mut bus = MediaBus::new(true);
        assert_eq!(
            bus.play(LocalMedia::Film, t0),
            Err(MediaError::AutoplayBlocked(FILM))
        );
        let lease = bus.acquire_shared("landing").unwrap();
        assert!(bus.play_shared(&lease, t0).is_err());
        bus.try_play_shared(&lease, t0);
        assert!(bus.track(MediaId::Shared).is_paused());
        bus.release_shared(lease);
    }

    #[test]
    fn test_toggle_mute_reaches_every_track() {
        let mut bus = unlocked(true);
        assert!(!bus.toggle_mute());
        assert!(!bus.track(MediaId::Shared).is_muted());
        assert!(!bus.track(FILM).is_muted());
        assert!(bus.track(BACKDROP).is_muted(), "backdrop is always muted");
        assert!(bus.toggle_mute());
        assert!(bus.track(FILM).is_muted());
    }

    #[test]
    fn test_foreground_video_follows_mute_in_same_tick() {
        let t0 = Instant::now();
        let mut bus = unlocked(true);
        let lease = bus.acquire_shared("film").unwrap();
        bus.hold_shared_muted(&lease);
        bus.seek(LocalMedia::Film, Duration::ZERO, t0);
        bus.play(LocalMedia::Film, t0).unwrap();

        bus.set_muted(false);
        assert!(!bus.track(FILM).is_muted());
        assert!(bus.track(MediaId::Shared).is_muted(), "held stays muted");
        bus.set_muted(true);
        assert!(bus.track(FILM).is_muted());
        bus.release_shared(lease);
    }

    #[test]
    fn test_hold_restores_latest_mute_state() {
        let mut bus = unlocked(false);
        let lease = bus.acquire_shared("film").unwrap();
        bus.hold_shared_muted(&lease);
        assert!(bus.track(MediaId::Shared).is_muted());
        bus.toggle_mute();
        bus.toggle_mute();
        bus.set_muted(true);
        bus.restore_shared_mute(&lease);
        assert!(bus.track(MediaId::Shared).is_muted());

        bus.hold_shared_muted(&lease);
        bus.set_muted(false);
        bus.release_shared(lease);
        assert!(!bus.is_shared_held());
        assert!(!bus.track(MediaId::Shared).is_muted());
    }

    #[test]
    fn test_double_acquire_is_refused() {
        let mut bus = MediaBus::new(true);
        let lease = bus.acquire_shared("opening").unwrap();
        assert_eq!(
            bus.acquire_shared("welcome").unwrap_err(),
            MediaError::SharedBusy { holder: "opening" }
        );
        bus.release_shared(lease);
        let again = bus.acquire_shared("welcome").unwrap();
        assert_eq!(again.holder(), "welcome");
        assert_eq!(bus.shared_holder(), Some("welcome"));
        bus.release_shared(again);
        assert_eq!(bus.shared_holder(), None);
    }

    #[test]
    fn test_shared_track_loops() {
        let t0 = Instant::now();
        let mut bus = unlocked(true);
        let lease = bus.acquire_shared("landing").unwrap();
        bus.seek_shared(&lease, AMBIENT_START, t0);
        bus.play_shared(&lease, t0).unwrap();
        assert_eq!(bus.track(MediaId::Shared).position(t0), AMBIENT_START);
        let later = t0 + Duration::from_secs(110);
        assert_eq!(
            bus.track(MediaId::Shared).position(later),
            Duration::from_secs(5)
        );
        assert!(bus.poll(later).is_empty());
        bus.release_shared(lease);
    }

    #[test]
    fn test_film_ends_once() {
        let t0 = Instant::now();
        let mut bus = unlocked(true);
        bus.play(LocalMedia::Film, t0).unwrap();
        assert!(bus.poll(t0 + Duration::from_secs(44)).is_empty());
        let end = t0 + Duration::from_secs(45);
        assert_eq!(bus.poll(end), vec![FILM]);
        assert!(bus.poll(end + Duration::from_secs(1)).is_empty());
        assert!(bus.track(FILM).is_paused());
    }

    #[test]
    fn test_pause_keeps_position() {
        let t0 = Instant::now();
        let mut bus = unlocked(true);
        bus.play(LocalMedia::Film, t0).unwrap();
        bus.pause(LocalMedia::Film, t0 + Duration::from_secs(10));
        let pos = bus.track(FILM).position(t0 + Duration::from_secs(30));
        assert_eq!(pos, Duration::from_secs(10));
        bus.play(LocalMedia::Film, t0 + Duration::from_secs(30)).unwrap();
        let pos = bus.track(FILM).position(t0 + Duration::from_secs(35));
        assert_eq!(pos, Duration::from_secs(15));
    }

    #[test]
    fn test_replaying_ended_film_starts_over() {
        let t0 = Instant::now();
        let mut bus = unlocked(true);
        bus.play(LocalMedia::Film, t0).unwrap();
        let end = t0 + Duration::from_secs(50);
        bus.poll(end);
        bus.play(LocalMedia::Film, end).unwrap();
        assert_eq!(bus.track(FILM).position(end), Duration::ZERO);
    }
}
