use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::gallery::PHOTOS;
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// Share of a photo's period spent cross-fading into the next one.
const CROSSFADE: f32 = 0.175;

/// Full-bleed photo slideshow with a counter in the corner.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
    now: Instant,
) {
    let Some(rotation) = slide.rotation() else {
        return;
    };
    let index = rotation.index(now);
    let finished = rotation.exhausted_at().is_some_and(|at| now >= at);
    let phase = if finished { 1.0 } else { rotation.phase(now) };

    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(egui::Color32::BLACK, opacity));

    // The previous photo stays underneath while the current one fades in.
    let fade_in = if index == 0 {
        1.0
    } else {
        (phase / CROSSFADE).min(1.0)
    };
    if fade_in < 1.0 {
        text::draw_cover_image(ui, images, PHOTOS[index - 1], theme, rect, opacity);
    }
    text::draw_cover_image(ui, images, PHOTOS[index], theme, rect, opacity * fade_in);

    let counter_color = Theme::with_opacity(theme.foreground, opacity * 0.8);
    let galley = ui.painter().layout_no_wrap(
        format!("{} / {}", index + 1, PHOTOS.len()),
        FontId::proportional(theme.small_size * scale),
        counter_color,
    );
    let pos = Pos2::new(
        rect.right() - galley.rect.width() - 40.0 * scale,
        rect.top() + 32.0 * scale,
    );
    ui.painter().galley(pos, galley, counter_color);

    // Progress ticks along the top edge.
    let tick_w = 36.0 * scale;
    let gap = 6.0 * scale;
    let total = PHOTOS.len() as f32 * (tick_w + gap) - gap;
    let mut x = rect.center().x - total / 2.0;
    for i in 0..PHOTOS.len() {
        let fill = if i < index {
            1.0
        } else if i == index {
            phase
        } else {
            0.0
        };
        let track = egui::Rect::from_min_size(
            Pos2::new(x, rect.top() + 20.0 * scale),
            egui::vec2(tick_w, 3.0 * scale),
        );
        ui.painter().rect_filled(
            track,
            1.0,
            Theme::with_opacity(theme.foreground, opacity * 0.25),
        );
        let mut done = track;
        done.set_width(tick_w * fill);
        ui.painter()
            .rect_filled(done, 1.0, Theme::with_opacity(theme.primary, opacity));
        x += tick_w + gap;
    }
}
