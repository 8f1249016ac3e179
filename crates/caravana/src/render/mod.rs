pub mod image_cache;
pub mod layouts;
pub mod text;
pub mod transition;

use std::time::Instant;

use eframe::egui;

use crate::deck::Scene;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

use image_cache::ImageCache;

/// Reference resolution every size in the layouts is expressed in.
pub const REFERENCE_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / REFERENCE_SIZE.x).min(rect.height() / REFERENCE_SIZE.y)
}

/// Render a single slide using its scene layout.
#[allow(clippy::too_many_arguments)]
pub fn render_slide(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
    now: Instant,
) {
    if opacity <= 0.0 {
        return;
    }
    match slide.definition().scene {
        Scene::Opening => layouts::opening::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Welcome => layouts::welcome::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Collaborations => {
            layouts::collaborations::render(ui, slide, theme, rect, opacity, scale, now)
        }
        Scene::Venues => layouts::venues::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Accolades => layouts::accolades::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Film => layouts::film::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Heritage => {
            layouts::story::render_heritage(ui, slide, theme, rect, opacity, images, scale, now)
        }
        Scene::Bridge => {
            layouts::story::render_bridge(ui, slide, theme, rect, opacity, images, scale, now)
        }
        Scene::Gallery => {
            layouts::gallery::render(ui, slide, theme, rect, opacity, images, scale, now)
        }
        Scene::WorldTour => {
            layouts::world_tour::render(ui, slide, theme, rect, opacity, images, scale, now)
        }
        Scene::Attendance => {
            layouts::attendance::render(ui, slide, theme, rect, opacity, scale, now)
        }
        Scene::Quotes => layouts::quote::render(ui, slide, theme, rect, opacity, scale, now),
        Scene::Contact => {
            layouts::contact::render(ui, slide, theme, rect, opacity, images, scale, now)
        }
    }
}
