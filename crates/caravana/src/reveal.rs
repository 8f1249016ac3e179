//! Timed reveals and rotating content inside a slide.

use std::time::{Duration, Instant};

/// How long a revealed element takes to fade in.
pub const FADE: Duration = Duration::from_millis(1_000);

/// Reveal stages that appear at fixed offsets after slide activation.
#[derive(Debug, Clone)]
pub struct Reveal {
    activated_at: Instant,
    cues: &'static [u64],
}

impl Reveal {
    pub fn new(cues: &'static [u64], now: Instant) -> Self {
        Self {
            activated_at: now,
            cues,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.activated_at)
    }

    pub fn stage_count(&self) -> usize {
        self.cues.len()
    }

    /// Number of stages whose cue has passed.
    pub fn shown(&self, now: Instant) -> usize {
        let elapsed = self.elapsed(now);
        self.cues
            .iter()
            .take_while(|&&cue| Duration::from_millis(cue) <= elapsed)
            .count()
    }

    /// Fade-in progress of a stage, `0.0` before its cue and `1.0` once
    /// fully shown. Stages past the cue list are never shown.
    pub fn progress(&self, stage: usize, now: Instant) -> f32 {
        match self.cues.get(stage) {
            Some(&cue) => self.progress_after(Duration::from_millis(cue), now),
            None => 0.0,
        }
    }

    /// Fade-in progress of something shown `offset` after activation.
    pub fn progress_after(&self, offset: Duration, now: Instant) -> f32 {
        let elapsed = self.elapsed(now);
        if elapsed < offset {
            return 0.0;
        }
        let t = (elapsed - offset).as_secs_f32() / FADE.as_secs_f32();
        t.min(1.0)
    }
}

/// Cycles through `len` items at a fixed period.
#[derive(Debug, Clone)]
pub struct Rotation {
    len: usize,
    period: Duration,
    started: Instant,
    base: usize,
    wrap: bool,
}

impl Rotation {
    /// A rotation that stops on its last item.
    pub fn once(len: usize, period: Duration, now: Instant) -> Self {
        Self {
            len,
            period,
            started: now,
            base: 0,
            wrap: false,
        }
    }

    /// A rotation that starts over after its last item.
    pub fn cycling(len: usize, period: Duration, now: Instant) -> Self {
        Self {
            wrap: true,
            ..Self::once(len, period, now)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn steps(&self, now: Instant) -> usize {
        if self.period.is_zero() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_nanos() / self.period.as_nanos()) as usize
    }

    pub fn index(&self, now: Instant) -> usize {
        if self.len == 0 {
            return 0;
        }
        let raw = self.base.saturating_add(self.steps(now));
        if self.wrap {
            raw % self.len
        } else {
            raw.min(self.len - 1)
        }
    }

    /// Fraction of the current item's period that has passed.
    pub fn phase(&self, now: Instant) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let within = elapsed.as_nanos() % self.period.as_nanos();
        within as f32 / self.period.as_nanos() as f32
    }

    /// Show item `index` now and restart its period.
    pub fn jump(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.base = index;
            self.started = now;
        }
    }

    /// When a non-wrapping rotation would step past its last item.
    pub fn exhausted_at(&self) -> Option<Instant> {
        if self.wrap {
            return None;
        }
        let remaining = self.len.saturating_sub(self.base) as u32;
        Some(self.started + self.period * remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stages_follow_cues() {
        let t0 = Instant::now();
        let reveal = Reveal::new(&[1_000, 2_500, 4_000], t0);
        assert_eq!(reveal.stage_count(), 3);
        assert_eq!(reveal.shown(t0), 0);
        assert_eq!(reveal.shown(t0 + ms(999)), 0);
        assert_eq!(reveal.shown(t0 + ms(1_000)), 1);
        assert_eq!(reveal.shown(t0 + ms(3_000)), 2);
        assert_eq!(reveal.shown(t0 + ms(10_000)), 3);
    }

    #[test]
    fn test_stage_fades_in() {
        let t0 = Instant::now();
        let reveal = Reveal::new(&[500], t0);
        assert_eq!(reveal.progress(0, t0 + ms(400)), 0.0);
        assert_eq!(reveal.progress(0, t0 + ms(500)), 0.0);
        assert!((reveal.progress(0, t0 + ms(1_000)) - 0.5).abs() < 1e-3);
        assert_eq!(reveal.progress(0, t0 + ms(1_500)), 1.0);
        assert_eq!(reveal.progress(0, t0 + ms(9_000)), 1.0);
        assert_eq!(reveal.progress(3, t0 + ms(9_000)), 0.0);
    }

    #[test]
    fn test_once_rotation_holds_last_item() {
        let t0 = Instant::now();
        let rot = Rotation::once(11, ms(4_000), t0);
        assert_eq!(rot.index(t0), 0);
        assert_eq!(rot.index(t0 + ms(3_999)), 0);
        assert_eq!(rot.index(t0 + ms(4_000)), 1);
        assert_eq!(rot.index(t0 + ms(40_000)), 10);
        assert_eq!(rot.index(t0 + ms(400_000)), 10);
        assert_eq!(rot.exhausted_at(), Some(t0 + ms(44_000)));
    }

    #[test]
    fn test_cycling_rotation_wraps_and_jumps() {
        let t0 = Instant::now();
        let mut rot = Rotation::cycling(4, ms(5_000), t0);
        assert_eq!(rot.index(t0 + ms(15_000)), 3);
        assert_eq!(rot.index(t0 + ms(20_000)), 0);
        assert_eq!(rot.exhausted_at(), None);

        rot.jump(2, t0 + ms(21_000));
        assert_eq!(rot.index(t0 + ms(25_999)), 2);
        assert_eq!(rot.index(t0 + ms(26_000)), 3);
        assert_eq!(rot.index(t0 + ms(31_000)), 0);

        rot.jump(9, t0 + ms(31_000));
        assert_eq!(rot.index(t0 + ms(31_000)), 0);
    }

    #[test]
    fn test_phase_within_period() {
        let t0 = Instant::now();
        let rot = Rotation::cycling(2, ms(5_000), t0);
        assert!((rot.phase(t0 + ms(2_500)) - 0.5).abs() < 1e-3);
        assert!(rot.phase(t0 + ms(5_000)) < 1e-3);
    }
}
