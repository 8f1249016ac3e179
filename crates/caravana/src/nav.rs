//! Slide navigation state machine.
//!
//! The controller owns the current slide index. Every index change goes
//! through [`Navigator::go_to`], which debounces input, starts a transition
//! and commits the new index after a fixed delay. Time is always passed in,
//! so the whole machine can be driven deterministically from tests.

use std::time::{Duration, Instant};

use crate::deck::{self, SLIDE_COUNT, SlideIndex};

/// Minimum time between two accepted navigations.
pub const DEBOUNCE: Duration = Duration::from_millis(800);
/// Delay between accepting a navigation and committing the new index.
pub const COMMIT_DELAY: Duration = Duration::from_millis(300);
/// Delay between the index commit and the end of the transition.
pub const SETTLE_DELAY: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn between(from: SlideIndex, to: SlideIndex) -> Self {
        if to > from { Self::Down } else { Self::Up }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A navigation was accepted and the transition effect should start.
    Started {
        target: SlideIndex,
        direction: Direction,
    },
    /// The current index changed.
    Committed {
        from: SlideIndex,
        to: SlideIndex,
        direction: Direction,
    },
    /// The transition finished.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not started yet; the landing gate is still up.
    Idle,
    Transitioning {
        /// Pending commit, cleared once the index has moved.
        pending: Option<(SlideIndex, Instant)>,
        settle_at: Instant,
    },
    Settled,
}

pub struct Navigator {
    current: SlideIndex,
    phase: Phase,
    direction: Direction,
    paused: bool,
    auto_advance: bool,
    last_navigation: Option<Instant>,
    auto_advance_at: Option<Instant>,
    events: Vec<NavEvent>,
}

impl Navigator {
    pub fn new(auto_advance: bool) -> Self {
        Self {
            current: 0,
            phase: Phase::Idle,
            direction: Direction::Down,
            paused: false,
            auto_advance,
            last_navigation: None,
            auto_advance_at: None,
            events: Vec::new(),
        }
    }

    pub fn current(&self) -> SlideIndex {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Whether an accepted navigation is still waiting to commit.
    pub fn has_pending_commit(&self) -> bool {
        matches!(
            self.phase,
            Phase::Transitioning {
                pending: Some(_),
                ..
            }
        )
    }

    /// When the auto-advance timer will fire, if armed.
    pub fn auto_advance_deadline(&self) -> Option<Instant> {
        self.auto_advance_at
    }

    /// Leave `Idle` and show `index` without a transition.
    pub fn start(&mut self, index: SlideIndex, now: Instant) {
        if self.is_started() {
            return;
        }
        self.current = index.min(deck::last_index());
        self.phase = Phase::Settled;
        tracing::info!(slide = self.current, "presentation started");
        self.arm_auto_advance(now);
    }

    /// Request navigation to `target`. Returns whether it was accepted.
    pub fn go_to(
        &mut self,
        target: SlideIndex,
        direction: Option<Direction>,
        skip_debounce: bool,
        now: Instant,
    ) -> bool {
        if !self.is_started() {
            return false;
        }
        if !skip_debounce {
            if let Some(last) = self.last_navigation {
                if now.saturating_duration_since(last) < DEBOUNCE {
                    tracing::trace!(target, "navigation debounced");
                    return false;
                }
            }
        }
        if target >= SLIDE_COUNT || target == self.current {
            return false;
        }

        let direction = direction.unwrap_or_else(|| Direction::between(self.current, target));
        self.last_navigation = Some(now);
        self.direction = direction;
        // The outgoing slide's timer must not retarget this navigation.
        self.auto_advance_at = None;
        self.phase = Phase::Transitioning {
            pending: Some((target, now + COMMIT_DELAY)),
            settle_at: now + COMMIT_DELAY + SETTLE_DELAY,
        };
        self.events.push(NavEvent::Started { target, direction });
        tracing::debug!(from = self.current, target, ?direction, "navigation accepted");
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.current >= deck::last_index() {
            return false;
        }
        self.go_to(self.current + 1, Some(Direction::Down), false, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.go_to(self.current - 1, Some(Direction::Up), false, now)
    }

    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        tracing::info!(paused, "auto-advance pause toggled");
        self.arm_auto_advance(now);
    }

    pub fn toggle_pause(&mut self, now: Instant) -> bool {
        self.set_paused(!self.paused, now);
        self.paused
    }

    /// Fire every timer that is due at `now`.
    pub fn advance(&mut self, now: Instant) {
        if let Phase::Transitioning { pending, settle_at } = self.phase {
            if let Some((target, commit_at)) = pending {
                if commit_at <= now {
                    let from = self.current;
                    self.current = target;
                    self.phase = Phase::Transitioning {
                        pending: None,
                        settle_at,
                    };
                    self.events.push(NavEvent::Committed {
                        from,
                        to: target,
                        direction: self.direction,
                    });
                    tracing::info!(from, to = target, "slide committed");
                    self.arm_auto_advance(commit_at);
                }
            }
            if let Phase::Transitioning {
                pending: None,
                settle_at,
            } = self.phase
            {
                if settle_at <= now {
                    self.phase = Phase::Settled;
                    self.events.push(NavEvent::Settled);
                }
            }
        }

        if let Some(deadline) = self.auto_advance_at {
            if deadline <= now {
                self.auto_advance_at = None;
                tracing::debug!(slide = self.current, "auto-advance timer fired");
                self.go_to(self.current + 1, Some(Direction::Down), true, now);
            }
        }
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    fn arm_auto_advance(&mut self, from: Instant) {
        self.auto_advance_at = None;
        if !self.auto_advance
            || !self.is_started()
            || self.has_pending_commit()
            || self.paused
            || self.current >= deck::last_index()
            || deck::drives_own_completion(self.current)
        {
            return;
        }
        self.auto_advance_at = Some(from + deck::slide_duration(self.current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn started(t0: Instant) -> Navigator {
        let mut nav = Navigator::new(true);
        nav.start(0, t0);
        nav
    }

    /// Navigate and run the clock far enough for the commit and settle.
    fn settle_at(nav: &mut Navigator, target: SlideIndex, now: Instant) -> Instant {
        assert!(nav.go_to(target, None, true, now));
        let done = now + COMMIT_DELAY + SETTLE_DELAY;
        nav.advance(done);
        done
    }

    #[test]
    fn test_idle_ignores_navigation() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(true);
        assert!(!nav.go_to(3, None, true, t0));
        assert!(!nav.next(t0));
        assert_eq!(nav.current(), 0);
        assert!(nav.auto_advance_deadline().is_none());
    }

    #[test]
    fn test_commit_happens_after_delay_and_no_earlier() {
        let t0 = Instant::now();
        for target in 1..SLIDE_COUNT {
            let mut nav = started(t0);
            assert!(nav.go_to(target, None, false, t0));
            nav.advance(t0 + ms(299));
            assert_eq!(nav.current(), 0, "committed early for {target}");
            nav.advance(t0 + COMMIT_DELAY);
            assert_eq!(nav.current(), target);
        }
    }

    #[test]
    fn test_transition_flag_lifecycle() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(!nav.is_transitioning());
        nav.next(t0);
        assert!(nav.is_transitioning());
        nav.advance(t0 + COMMIT_DELAY);
        assert!(nav.is_transitioning());
        nav.advance(t0 + COMMIT_DELAY + ms(699));
        assert!(nav.is_transitioning());
        nav.advance(t0 + COMMIT_DELAY + SETTLE_DELAY);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_events_in_order() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        nav.next(t0);
        nav.advance(t0 + ms(1_000));
        assert_eq!(
            nav.take_events(),
            vec![
                NavEvent::Started {
                    target: 1,
                    direction: Direction::Down
                },
                NavEvent::Committed {
                    from: 0,
                    to: 1,
                    direction: Direction::Down
                },
                NavEvent::Settled,
            ]
        );
        assert!(nav.take_events().is_empty());
    }

    #[test]
    fn test_debounce_drops_calls_inside_window() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(nav.next(t0));
        assert!(!nav.next(t0 + ms(100)));
        assert!(!nav.go_to(7, None, false, t0 + ms(799)));
        nav.advance(t0 + ms(1_000));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_skip_debounce_bypasses_window() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(nav.next(t0));
        assert!(nav.go_to(5, None, true, t0 + ms(50)));
        nav.advance(t0 + ms(400));
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn test_three_spaced_nexts_reach_index_three() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        for step in 0..3u64 {
            let now = t0 + ms(step * 900);
            assert!(nav.next(now));
            nav.advance(now + COMMIT_DELAY);
        }
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_two_quick_nexts_advance_once() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        nav.next(t0);
        nav.advance(t0 + ms(50));
        nav.next(t0 + ms(100));
        nav.advance(t0 + ms(2_000));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_go_to_current_is_noop() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(!nav.go_to(0, None, true, t0));
        assert!(nav.take_events().is_empty());
        let later = settle_at(&mut nav, 4, t0);
        nav.take_events();
        assert!(!nav.go_to(4, None, true, later + ms(900)));
        assert!(nav.take_events().is_empty());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(!nav.go_to(SLIDE_COUNT, None, true, t0));
        assert!(!nav.go_to(usize::MAX, None, true, t0));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_bounds_are_noops() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(!nav.previous(t0));

        let mut nav = Navigator::new(true);
        nav.start(deck::last_index(), t0);
        assert!(!nav.next(t0));
        assert_eq!(nav.current(), deck::last_index());
    }

    #[test]
    fn test_direction_inferred_or_supplied() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(true);
        nav.start(6, t0);
        nav.go_to(2, None, true, t0);
        assert_eq!(nav.direction(), Direction::Up);
        nav.go_to(9, Some(Direction::Up), true, t0);
        assert_eq!(nav.direction(), Direction::Up);
        nav.go_to(9, None, true, t0);
        assert_eq!(nav.direction(), Direction::Down);
    }

    #[test]
    fn test_retarget_replaces_pending_commit() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        nav.go_to(2, None, true, t0);
        nav.go_to(8, None, true, t0 + ms(200));
        nav.advance(t0 + ms(450));
        assert_eq!(nav.current(), 0);
        nav.advance(t0 + ms(500));
        assert_eq!(nav.current(), 8);
        let committed: Vec<_> = nav
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, NavEvent::Committed { .. }))
            .collect();
        assert_eq!(committed.len(), 1);
    }

    #[test]
    fn test_auto_advance_default_duration() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert_eq!(nav.auto_advance_deadline(), Some(t0 + ms(13_000)));
        nav.advance(t0 + ms(12_999));
        assert!(!nav.is_transitioning());
        nav.advance(t0 + ms(13_000));
        assert!(nav.is_transitioning());
        nav.advance(t0 + ms(13_300));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_auto_advance_uses_override() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        nav.go_to(2, None, true, t0);
        let commit = t0 + COMMIT_DELAY;
        nav.advance(commit);
        nav.advance(commit + ms(13_000));
        assert_eq!(nav.current(), 2);
        assert!(!nav.is_transitioning());
        nav.advance(commit + ms(21_999));
        assert!(!nav.is_transitioning());
        nav.advance(commit + ms(22_000));
        nav.advance(commit + ms(22_300));
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_user_jump_before_deadline_is_not_overridden() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        assert!(nav.go_to(8, None, false, t0 + ms(12_900)));
        assert!(nav.auto_advance_deadline().is_none());
        assert!(nav.has_pending_commit());
        nav.advance(t0 + ms(13_000));
        nav.advance(t0 + ms(14_500));
        assert_eq!(nav.current(), 8);
        assert!(!nav.has_pending_commit());
        let started_targets: Vec<_> = nav
            .take_events()
            .into_iter()
            .filter_map(|e| match e {
                NavEvent::Started { target, .. } => Some(target),
                _ => None,
            })
            .collect();
        assert_eq!(started_targets, vec![8]);
    }

    #[test]
    fn test_pause_disarms_and_resume_rearms() {
        let t0 = Instant::now();
        let mut nav = started(t0);
        nav.set_paused(true, t0 + ms(5_000));
        assert!(nav.auto_advance_deadline().is_none());
        nav.advance(t0 + ms(20_000));
        assert_eq!(nav.current(), 0);
        nav.set_paused(false, t0 + ms(20_000));
        assert_eq!(nav.auto_advance_deadline(), Some(t0 + ms(33_000)));
    }

    #[test]
    fn test_no_auto_advance_on_self_driven_or_last_slides() {
        let t0 = Instant::now();
        for index in [5, 11, deck::last_index()] {
            let mut nav = Navigator::new(true);
            nav.start(index, t0);
            assert!(nav.auto_advance_deadline().is_none(), "armed on {index}");
        }
    }

    #[test]
    fn test_auto_advance_disabled() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(false);
        nav.start(0, t0);
        assert!(nav.auto_advance_deadline().is_none());
        nav.advance(t0 + ms(60_000));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_start_clamps_index() {
        let t0 = Instant::now();
        let mut nav = Navigator::new(true);
        nav.start(40, t0);
        assert_eq!(nav.current(), deck::last_index());
    }
}
