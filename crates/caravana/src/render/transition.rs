//! Sand-particle effect played while the slide changes.

use std::time::{Duration, Instant};

use eframe::egui;
use rand::Rng;

use crate::nav::Direction;

pub const PARTICLE_COUNT: usize = 150;
/// The effect clears itself this long after it was triggered.
pub const EFFECT_DURATION: Duration = Duration::from_millis(1_500);
/// Duration of the translucent sand wave sweeping across the screen.
const WAVE_DURATION: f32 = 0.8;
const PARTICLE_OPACITY: f32 = 0.8;
const SAND_HUE: f32 = 38.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal start, percent of the screen width.
    pub x: f32,
    /// Vertical start, percent of the screen height.
    pub y: f32,
    pub size: f32,
    /// Total drift in reference pixels.
    pub scatter: egui::Vec2,
    /// Seconds.
    pub delay: f32,
    /// Seconds.
    pub duration: f32,
    pub color: egui::Color32,
}

impl Particle {
    pub fn random(direction: Direction, rng: &mut impl Rng) -> Self {
        let (y, scatter_y) = match direction {
            Direction::Down => (
                -20.0 - rng.random_range(0.0..20.0),
                rng.random_range(50.0..200.0),
            ),
            Direction::Up => (
                100.0 + rng.random_range(0.0..20.0),
                -rng.random_range(50.0..200.0),
            ),
        };
        Self {
            x: rng.random_range(0.0..100.0),
            y,
            size: rng.random_range(2.0..6.0),
            scatter: egui::vec2(rng.random_range(-100.0..100.0), scatter_y),
            delay: rng.random_range(0.0..0.3),
            duration: rng.random_range(0.7..1.5),
            color: hsl(
                SAND_HUE,
                rng.random_range(0.35..0.50),
                rng.random_range(0.65..0.85),
            ),
        }
    }

    /// Drift and opacity `t` seconds after the trigger, or `None` once the
    /// particle has finished.
    pub fn at(&self, t: f32) -> Option<(egui::Vec2, f32)> {
        let local = t - self.delay;
        if local < 0.0 {
            return Some((egui::Vec2::ZERO, PARTICLE_OPACITY));
        }
        if local >= self.duration {
            return None;
        }
        let p = local / self.duration;
        let eased = 1.0 - (1.0 - p).powi(3);
        Some((self.scatter * eased, PARTICLE_OPACITY * (1.0 - p)))
    }
}

/// HSL to RGB with saturation and lightness in `0..=1`.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> egui::Color32 {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    egui::Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b))
}

struct Active {
    started: Instant,
    direction: Direction,
    particles: Vec<Particle>,
}

#[derive(Default)]
pub struct SandTransition {
    active: Option<Active>,
}

impl SandTransition {
    /// Start the effect, replacing one that is still running.
    pub fn trigger(&mut self, direction: Direction, now: Instant, rng: &mut impl Rng) {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(direction, rng))
            .collect();
        self.active = Some(Active {
            started: now,
            direction,
            particles,
        });
    }

    /// Clear the effect once it has run its course. Returns true on the
    /// frame it completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .active
            .as_ref()
            .is_some_and(|a| now.saturating_duration_since(a.started) >= EFFECT_DURATION);
        if expired {
            self.active = None;
        }
        expired
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn particles(&self) -> &[Particle] {
        match &self.active {
            Some(active) => &active.particles,
            None => &[],
        }
    }

    pub fn draw(&self, painter: &egui::Painter, rect: egui::Rect, scale: f32, now: Instant) {
        let Some(active) = &self.active else {
            return;
        };
        let t = now.saturating_duration_since(active.started).as_secs_f32();

        draw_wave(painter, rect, active.direction, t);

        for particle in &active.particles {
            let Some((drift, opacity)) = particle.at(t) else {
                continue;
            };
            let start = egui::pos2(
                rect.left() + rect.width() * particle.x / 100.0,
                rect.top() + rect.height() * particle.y / 100.0,
            );
            let pos = start + drift * scale;
            painter.circle_filled(
                pos,
                particle.size * scale / 2.0,
                particle.color.gamma_multiply(opacity),
            );
        }
    }
}

fn draw_wave(painter: &egui::Painter, rect: egui::Rect, direction: Direction, t: f32) {
    if t >= WAVE_DURATION {
        return;
    }
    let p = t / WAVE_DURATION;
    let band = rect.height() * 0.25;
    let travel = rect.height() + band;
    let top = match direction {
        Direction::Down => rect.top() - band + travel * p,
        Direction::Up => rect.bottom() - travel * p,
    };
    let color = hsl(SAND_HUE, 0.35, 0.75);
    let steps = 16;
    for i in 0..steps {
        let f = (i as f32 + 0.5) / steps as f32;
        // Peak in the middle of the band, transparent at both edges.
        let alpha = 0.3 * (1.0 - (2.0 * f - 1.0).abs()) * (1.0 - p);
        let y = top + band * i as f32 / steps as f32;
        let strip = egui::Rect::from_min_size(
            egui::pos2(rect.left(), y),
            egui::vec2(rect.width(), band / steps as f32 + 1.0),
        );
        painter.rect_filled(strip, 0.0, color.gamma_multiply(alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_particle_ranges_going_down() {
        let mut rng = rng();
        let mut sand = SandTransition::default();
        sand.trigger(Direction::Down, Instant::now(), &mut rng);
        assert_eq!(sand.particles().len(), PARTICLE_COUNT);
        for p in sand.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((-40.0..=-20.0).contains(&p.y));
            assert!((2.0..6.0).contains(&p.size));
            assert!((-100.0..100.0).contains(&p.scatter.x));
            assert!((50.0..200.0).contains(&p.scatter.y));
            assert!((0.0..0.3).contains(&p.delay));
            assert!((0.7..1.5).contains(&p.duration));
        }
    }

    #[test]
    fn test_particles_travel_up() {
        let mut rng = rng();
        for _ in 0..200 {
            let p = Particle::random(Direction::Up, &mut rng);
            assert!((100.0..=120.0).contains(&p.y));
            assert!((-200.0..=-50.0).contains(&p.scatter.y));
        }
    }

    #[test]
    fn test_effect_ends_after_fixed_duration() {
        let t0 = Instant::now();
        let mut sand = SandTransition::default();
        sand.trigger(Direction::Down, t0, &mut rng());
        assert!(!sand.tick(t0 + Duration::from_millis(1_499)));
        assert!(sand.is_active());
        assert!(sand.tick(t0 + EFFECT_DURATION));
        assert!(!sand.is_active());
        assert!(sand.particles().is_empty());
        assert!(!sand.tick(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn test_retrigger_restarts() {
        let t0 = Instant::now();
        let mut rng = rng();
        let mut sand = SandTransition::default();
        sand.trigger(Direction::Down, t0, &mut rng);
        sand.trigger(Direction::Up, t0 + Duration::from_millis(1_000), &mut rng);
        assert!(!sand.tick(t0 + Duration::from_millis(2_000)));
        assert!(sand.particles().iter().all(|p| p.y >= 100.0));
        assert!(sand.tick(t0 + Duration::from_millis(2_500)));
    }

    #[test]
    fn test_particle_motion() {
        let p = Particle {
            x: 50.0,
            y: -30.0,
            size: 4.0,
            scatter: egui::vec2(100.0, 100.0),
            delay: 0.2,
            duration: 1.0,
            color: egui::Color32::WHITE,
        };
        assert_eq!(p.at(0.1), Some((egui::Vec2::ZERO, PARTICLE_OPACITY)));
        let (drift, opacity) = p.at(0.7).unwrap();
        assert!(drift.y > 50.0 && drift.y < 100.0);
        assert!((opacity - 0.4).abs() < 1e-4);
        assert_eq!(p.at(1.2), None);
    }

    #[test]
    fn test_sand_colour() {
        let c = hsl(38.0, 0.35, 0.75);
        assert!(c.r() > c.g() && c.g() > c.b());
        assert_eq!(hsl(0.0, 0.0, 1.0), egui::Color32::WHITE);
        assert_eq!(hsl(0.0, 0.0, 0.0), egui::Color32::BLACK);
    }
}
