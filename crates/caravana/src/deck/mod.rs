pub mod content;

use std::time::Duration;

/// Position of a slide in the presentation, `0..SLIDE_COUNT`.
pub type SlideIndex = usize;

pub const SLIDE_COUNT: usize = 13;

/// Auto-advance delay for slides without an override.
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(13_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Opening,
    Welcome,
    Collaborations,
    Venues,
    Accolades,
    Film,
    Heritage,
    Bridge,
    Gallery,
    WorldTour,
    Attendance,
    Quotes,
    Contact,
}

/// How a slide hands over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The navigation controller's auto-advance timer moves on.
    Timed,
    /// The slide signals completion itself; no timer is armed.
    OnComplete,
}

#[derive(Debug, Clone, Copy)]
pub struct SlideDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub scene: Scene,
    pub duration: Option<Duration>,
    pub advance: Advance,
    /// Offsets from activation at which each reveal stage appears.
    pub cues: &'static [u64],
}

const fn slide(
    id: &'static str,
    title: &'static str,
    scene: Scene,
    duration_ms: Option<u64>,
    advance: Advance,
    cues: &'static [u64],
) -> SlideDefinition {
    let duration = match duration_ms {
        Some(ms) => Some(Duration::from_millis(ms)),
        None => None,
    };
    SlideDefinition {
        id,
        title,
        scene,
        duration,
        advance,
        cues,
    }
}

pub const DECK: [SlideDefinition; SLIDE_COUNT] = [
    slide(
        "opening",
        "Music of the Desert of Rajasthan",
        Scene::Opening,
        None,
        Advance::Timed,
        &[1_000, 2_500, 4_000],
    ),
    slide(
        "welcome",
        "Welcome to the world of Caravana",
        Scene::Welcome,
        None,
        Advance::Timed,
        &[500],
    ),
    slide(
        "collaborations",
        "Performed with prestigious musicians",
        Scene::Collaborations,
        Some(22_000),
        Advance::Timed,
        &[200, 800, 1_500, 2_500, 3_500],
    ),
    slide(
        "venues",
        "Sold-out venues worldwide",
        Scene::Venues,
        Some(19_000),
        Advance::Timed,
        &[300, 1_200],
    ),
    slide(
        "accolades",
        "Accolades",
        Scene::Accolades,
        None,
        Advance::Timed,
        &[500, 900, 1_300, 1_700, 2_100],
    ),
    slide(
        "film",
        "In performance",
        Scene::Film,
        Some(17_000),
        Advance::OnComplete,
        &[],
    ),
    slide(
        "heritage",
        "The Manganiyar musicians",
        Scene::Heritage,
        Some(17_000),
        Advance::Timed,
        &[300, 1_500, 3_000, 5_000, 7_000],
    ),
    slide(
        "bridge",
        "A spiritual and cultural bridge",
        Scene::Bridge,
        None,
        Advance::Timed,
        &[300, 2_000, 4_000, 6_000],
    ),
    slide(
        "gallery",
        "Gallery",
        Scene::Gallery,
        None,
        Advance::Timed,
        &[],
    ),
    slide(
        "world-tour",
        "Performances & tours",
        Scene::WorldTour,
        None,
        Advance::Timed,
        &[300],
    ),
    slide(
        "attendance",
        "Attendance numbers",
        Scene::Attendance,
        Some(14_000),
        Advance::Timed,
        &[300],
    ),
    slide(
        "quotes",
        "Press quotes",
        Scene::Quotes,
        None,
        Advance::OnComplete,
        &[],
    ),
    slide(
        "contact",
        "Booking contact",
        Scene::Contact,
        None,
        Advance::Timed,
        &[300],
    ),
];

pub fn definition(index: SlideIndex) -> Option<&'static SlideDefinition> {
    DECK.get(index)
}

/// Auto-advance delay for a slide, falling back to the default.
pub fn slide_duration(index: SlideIndex) -> Duration {
    definition(index)
        .and_then(|d| d.duration)
        .unwrap_or(DEFAULT_SLIDE_DURATION)
}

/// Whether the slide drives its own completion instead of the timer.
pub fn drives_own_completion(index: SlideIndex) -> bool {
    definition(index).is_some_and(|d| d.advance == Advance::OnComplete)
}

pub fn last_index() -> SlideIndex {
    SLIDE_COUNT - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_thirteen_slides() {
        assert_eq!(DECK.len(), 13);
        assert_eq!(last_index(), 12);
    }

    #[test]
    fn test_duration_overrides() {
        assert_eq!(slide_duration(0), DEFAULT_SLIDE_DURATION);
        assert_eq!(slide_duration(2), Duration::from_millis(22_000));
        assert_eq!(slide_duration(3), Duration::from_millis(19_000));
        assert_eq!(slide_duration(5), Duration::from_millis(17_000));
        assert_eq!(slide_duration(6), Duration::from_millis(17_000));
        assert_eq!(slide_duration(10), Duration::from_millis(14_000));
        assert_eq!(slide_duration(12), DEFAULT_SLIDE_DURATION);
    }

    #[test]
    fn test_out_of_range_uses_default() {
        assert!(definition(SLIDE_COUNT).is_none());
        assert_eq!(slide_duration(99), DEFAULT_SLIDE_DURATION);
    }

    #[test]
    fn test_self_driven_slides() {
        let driven: Vec<SlideIndex> = (0..SLIDE_COUNT)
            .filter(|&i| drives_own_completion(i))
            .collect();
        assert_eq!(driven, vec![5, 11]);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in DECK.iter().enumerate() {
            for b in &DECK[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_cues_are_sorted() {
        for def in &DECK {
            assert!(
                def.cues.windows(2).all(|w| w[0] <= w[1]),
                "cues out of order on {}",
                def.id
            );
        }
    }
}
