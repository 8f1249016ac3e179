//! Per-slide runtime: reveal timers, rotations and media choreography.
//!
//! A runtime drives media and timers only while its slide is current. The
//! app deactivates the outgoing runtime before activating the incoming one,
//! so leases on the shared track are always returned before the next slide
//! asks for them.

use std::time::{Duration, Instant};

use crate::deck::content::{contact, gallery, quotes, world_tour};
use crate::deck::{self, Scene, SlideDefinition, SlideIndex};
use crate::media::embed::ClipSequence;
use crate::media::{AMBIENT_START, LocalMedia, MediaBus, MediaId, SharedLease};
use crate::reveal::{Reveal, Rotation};

/// Delay between a slideshow running out and its completion signal.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(500);
/// Interval of the welcome slide's playback watchdog.
pub const WATCHDOG_INTERVAL: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSignal {
    /// The slide finished its own content; move on to the next one.
    Completed,
}

pub struct SlideContext<'a> {
    pub media: &'a mut MediaBus,
    pub paused: bool,
    pub now: Instant,
}

pub enum SceneState {
    Opening {
        lease: Option<SharedLease>,
        clips: ClipSequence,
    },
    Welcome {
        lease: Option<SharedLease>,
        next_check: Instant,
    },
    Film {
        lease: Option<SharedLease>,
        completed: bool,
    },
    Gallery {
        photos: Rotation,
        complete_at: Option<Instant>,
    },
    WorldTour {
        regions: Rotation,
    },
    Quotes {
        quotes: Rotation,
        complete_at: Option<Instant>,
    },
    Contact {
        backgrounds: Rotation,
    },
    Static,
}

pub struct SlideRuntime {
    index: SlideIndex,
    definition: &'static SlideDefinition,
    reveal: Reveal,
    scene: SceneState,
}

fn acquire(media: &mut MediaBus, holder: &'static str) -> Option<SharedLease> {
    match media.acquire_shared(holder) {
        Ok(lease) => Some(lease),
        Err(err) => {
            tracing::warn!(holder, "{err}");
            None
        }
    }
}

impl SlideRuntime {
    /// Start the slide at `index`. Returns `None` for an unknown index.
    pub fn activate(index: SlideIndex, ctx: &mut SlideContext<'_>) -> Option<Self> {
        let definition = deck::definition(index)?;
        let now = ctx.now;
        let media = &mut *ctx.media;

        let scene = match definition.scene {
            Scene::Opening => {
                let lease = acquire(media, definition.id);
                let mut clips = ClipSequence::new();
                if let Some(lease) = &lease {
                    media.seek_shared(lease, AMBIENT_START, now);
                    if !ctx.paused {
                        media.try_play_shared(lease, now);
                    }
                }
                if !ctx.paused {
                    clips.start(now);
                }
                SceneState::Opening { lease, clips }
            }
            Scene::Welcome => {
                let lease = acquire(media, definition.id);
                if let Some(lease) = &lease {
                    if media.track(MediaId::Shared).is_paused() {
                        media.seek_shared(lease, Duration::ZERO, now);
                        media.try_play_shared(lease, now);
                    }
                }
                SceneState::Welcome {
                    lease,
                    next_check: now + WATCHDOG_INTERVAL,
                }
            }
            Scene::Film => {
                let lease = acquire(media, definition.id);
                if let Some(lease) = &lease {
                    media.hold_shared_muted(lease);
                }
                media.seek(LocalMedia::Film, Duration::ZERO, now);
                media.try_play(LocalMedia::Film, now);
                SceneState::Film {
                    lease,
                    completed: false,
                }
            }
            Scene::Gallery => {
                let photos = Rotation::once(gallery::PHOTOS.len(), gallery::PHOTO_DURATION, now);
                let complete_at = photos.exhausted_at().map(|t| t + COMPLETION_DELAY);
                SceneState::Gallery {
                    photos,
                    complete_at,
                }
            }
            Scene::WorldTour => SceneState::WorldTour {
                regions: Rotation::cycling(
                    world_tour::REGIONS.len(),
                    world_tour::REGION_DURATION,
                    now,
                ),
            },
            Scene::Quotes => {
                media.seek(LocalMedia::QuotesBackdrop, Duration::ZERO, now);
                media.try_play(LocalMedia::QuotesBackdrop, now);
                let quotes = Rotation::once(quotes::QUOTES.len(), quotes::QUOTE_DURATION, now);
                let complete_at = quotes.exhausted_at().map(|t| t + COMPLETION_DELAY);
                SceneState::Quotes {
                    quotes,
                    complete_at,
                }
            }
            Scene::Contact => SceneState::Contact {
                backgrounds: Rotation::cycling(
                    contact::BACKGROUNDS.len(),
                    contact::BACKGROUND_DURATION,
                    now,
                ),
            },
            Scene::Collaborations
            | Scene::Venues
            | Scene::Accolades
            | Scene::Heritage
            | Scene::Bridge
            | Scene::Attendance => SceneState::Static,
        };

        tracing::debug!(slide = index, id = definition.id, "slide activated");
        Some(Self {
            index,
            definition,
            reveal: Reveal::new(definition.cues, now),
            scene,
        })
    }

    /// Stop everything the slide started and return its lease. The runtime
    /// stays renderable so the outgoing slide can fade out.
    pub fn deactivate(&mut self, ctx: &mut SlideContext<'_>) {
        let media = &mut *ctx.media;
        match &mut self.scene {
            SceneState::Opening { lease, clips } => {
                clips.stop();
                if let Some(lease) = lease.take() {
                    media.release_shared(lease);
                }
            }
            SceneState::Welcome { lease, .. } => {
                if let Some(lease) = lease.take() {
                    media.release_shared(lease);
                }
            }
            SceneState::Film { lease, .. } => {
                media.pause(LocalMedia::Film, ctx.now);
                media.seek(LocalMedia::Film, Duration::ZERO, ctx.now);
                if let Some(lease) = lease.take() {
                    media.release_shared(lease);
                }
            }
            SceneState::Gallery { complete_at, .. } => *complete_at = None,
            SceneState::Quotes { complete_at, .. } => {
                *complete_at = None;
                media.pause(LocalMedia::QuotesBackdrop, ctx.now);
            }
            SceneState::WorldTour { .. } | SceneState::Contact { .. } | SceneState::Static => {}
        }
        tracing::debug!(slide = self.index, id = self.definition.id, "slide deactivated");
    }

    pub fn index(&self) -> SlideIndex {
        self.index
    }

    pub fn definition(&self) -> &'static SlideDefinition {
        self.definition
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Item shown by the slide's rotation, if it has one.
    pub fn rotation_index(&self, now: Instant) -> Option<usize> {
        self.rotation().map(|r| r.index(now))
    }

    pub fn rotation(&self) -> Option<&Rotation> {
        match &self.scene {
            SceneState::Gallery { photos, .. } => Some(photos),
            SceneState::WorldTour { regions } => Some(regions),
            SceneState::Quotes { quotes, .. } => Some(quotes),
            SceneState::Contact { backgrounds } => Some(backgrounds),
            _ => None,
        }
    }

    /// Pick a region on the world tour map.
    pub fn select_region(&mut self, region: usize, now: Instant) {
        if let SceneState::WorldTour { regions } = &mut self.scene {
            regions.jump(region, now);
        }
    }

    pub fn set_paused(&mut self, ctx: &mut SlideContext<'_>) {
        let now = ctx.now;
        if let SceneState::Opening { lease, clips } = &mut self.scene {
            if ctx.paused {
                clips.pause(now);
                if let Some(lease) = lease {
                    ctx.media.pause_shared(lease, now);
                }
            } else {
                if clips.position(now).is_some() {
                    clips.resume(now);
                } else {
                    clips.start(now);
                }
                if let Some(lease) = lease {
                    if ctx.media.track(MediaId::Shared).is_paused() {
                        ctx.media.try_play_shared(lease, now);
                    }
                }
            }
        }
    }

    /// Fire the slide's due timers.
    pub fn tick(&mut self, ctx: &mut SlideContext<'_>) -> Option<SlideSignal> {
        let now = ctx.now;
        match &mut self.scene {
            SceneState::Opening { clips, .. } => {
                clips.tick(now);
                None
            }
            SceneState::Welcome { lease, next_check } => {
                if now >= *next_check {
                    *next_check = now + WATCHDOG_INTERVAL;
                    if let Some(lease) = lease {
                        if ctx.media.track(MediaId::Shared).is_paused() {
                            tracing::debug!("watchdog restarting the ambient track");
                            ctx.media.try_play_shared(lease, now);
                        }
                    }
                }
                None
            }
            SceneState::Gallery { complete_at, .. } | SceneState::Quotes { complete_at, .. } => {
                match *complete_at {
                    Some(at) if at <= now => {
                        *complete_at = None;
                        Some(SlideSignal::Completed)
                    }
                    _ => None,
                }
            }
            SceneState::Film { .. }
            | SceneState::WorldTour { .. }
            | SceneState::Contact { .. }
            | SceneState::Static => None,
        }
    }

    pub fn on_media_ended(
        &mut self,
        media: MediaId,
        ctx: &mut SlideContext<'_>,
    ) -> Option<SlideSignal> {
        if let SceneState::Film { lease, completed } = &mut self.scene {
            if media == MediaId::Local(LocalMedia::Film) && !*completed {
                *completed = true;
                if let Some(lease) = lease {
                    ctx.media.restore_shared_mute(lease);
                }
                tracing::info!("film finished");
                return Some(SlideSignal::Completed);
            }
        }
        None
    }
}
