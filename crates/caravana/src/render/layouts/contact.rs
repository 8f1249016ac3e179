use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::content::{contact, TITLE};
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// Share of a background's period spent cross-fading.
const CROSSFADE: f32 = 0.2;

/// Closing slide: alternating backdrops behind a booking card.
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
    if let Some(rotation) = slide.rotation() {
        let index = rotation.index(now);
        let previous = (index + contact::BACKGROUNDS.len() - 1) % contact::BACKGROUNDS.len();
        let fade = (rotation.phase(now) / CROSSFADE).min(1.0);
        // The very first background has nothing to fade from.
        let first_period = slide.reveal().elapsed(now) < contact::BACKGROUND_DURATION;
        if fade < 1.0 && !first_period {
            text::draw_cover_image(ui, images, contact::BACKGROUNDS[previous], theme, rect, opacity);
        }
        let alpha = if first_period { 1.0 } else { fade };
        text::draw_cover_image(ui, images, contact::BACKGROUNDS[index], theme, rect, opacity * alpha);
    }
    text::draw_scrim(ui, rect, 0.55, opacity);

    let progress = slide.reveal().progress(0, now) * opacity;
    if progress <= 0.0 {
        return;
    }
    let center_x = rect.center().x;
    let card = egui::Rect::from_center_size(
        Pos2::new(center_x, rect.center().y + text::rise_offset(progress, scale)),
        egui::vec2(720.0 * scale, 460.0 * scale),
    );
    ui.painter().rect_filled(
        card,
        12.0 * scale,
        Theme::with_opacity(theme.background, progress * 0.75),
    );
    ui.painter().rect_stroke(
        card,
        12.0 * scale,
        Stroke::new(1.0, Theme::with_opacity(theme.sand_dark, progress)),
        egui::StrokeKind::Inside,
    );

    let width = card.width() - 80.0 * scale;
    let mut y = card.top() + 48.0 * scale;
    y += text::draw_centered(
        ui,
        TITLE,
        FontId::proportional(theme.heading_size * scale),
        Theme::with_opacity(theme.primary, progress),
        center_x,
        y,
        width,
    );
    y += 12.0 * scale;
    y += text::draw_centered(
        ui,
        &contact::HEADING.to_uppercase(),
        FontId::proportional(theme.small_size * 0.8 * scale),
        Theme::with_opacity(theme.muted, progress),
        center_x,
        y,
        width,
    );
    text::draw_rule(ui, theme, center_x, y + 24.0 * scale, 120.0 * scale, progress);
    y += 52.0 * scale;

    let lines = [
        (contact::NAME, theme.body_size, theme.foreground),
        (contact::ROLE, theme.small_size, theme.sand_light),
        (contact::EMAIL, theme.small_size, theme.foreground),
        (contact::PHONE, theme.small_size, theme.foreground),
    ];
    for (line, size, color) in lines {
        y += text::draw_centered(
            ui,
            line,
            FontId::proportional(size * scale),
            Theme::with_opacity(color, progress),
            center_x,
            y,
            width,
        );
        y += 10.0 * scale;
    }

    let credit_color = Theme::with_opacity(theme.muted, progress * 0.6);
    let credit = ui.painter().layout_no_wrap(
        contact::CREDIT.to_string(),
        FontId::proportional(theme.small_size * 0.6 * scale),
        credit_color,
    );
    let pos = Pos2::new(
        rect.right() - credit.rect.width() - 32.0 * scale,
        rect.bottom() - credit.rect.height() - 24.0 * scale,
    );
    ui.painter().galley(pos, credit, credit_color);
}
