//! Heritage and bridge slides: staged paragraphs over a full-bleed photo.

use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::content::{bridge, heritage};
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::reveal::Reveal;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

fn backdrop(
    ui: &egui::Ui,
    images: &ImageCache,
    asset: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
) {
    text::draw_cover_image(ui, images, asset, theme, rect, opacity);
    text::draw_scrim(ui, rect, 0.6, opacity);
}

/// Draw `(stage, text)` paragraphs, each fading in with its stage.
#[allow(clippy::too_many_arguments)]
fn draw_paragraphs(
    ui: &egui::Ui,
    paragraphs: &[(usize, &str)],
    reveal: &Reveal,
    theme: &Theme,
    center_x: f32,
    mut y: f32,
    width: f32,
    opacity: f32,
    scale: f32,
    now: Instant,
) -> f32 {
    let font = FontId::proportional(theme.body_size * scale);
    for (stage, paragraph) in paragraphs {
        y += text::draw_revealed(
            ui,
            paragraph,
            font.clone(),
            theme.foreground,
            center_x,
            y,
            width,
            reveal.progress(*stage, now) * opacity,
            scale,
        );
        y += 28.0 * scale;
    }
    y
}

#[allow(clippy::too_many_arguments)]
pub fn render_heritage(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
    now: Instant,
) {
    backdrop(ui, images, heritage::BACKGROUND, theme, rect, opacity);

    let reveal = slide.reveal();
    let center_x = rect.center().x;
    let width = rect.width() * 0.66;
    let mut y = rect.top() + 110.0 * scale;

    y += text::draw_revealed(
        ui,
        heritage::HEADING,
        FontId::proportional(theme.heading_size * 0.8 * scale),
        theme.primary,
        center_x,
        y,
        width,
        reveal.progress(0, now) * opacity,
        scale,
    );
    y += 48.0 * scale;

    y = draw_paragraphs(
        ui,
        &heritage::PARAGRAPHS,
        reveal,
        theme,
        center_x,
        y,
        width,
        opacity,
        scale,
        now,
    );
    y += 20.0 * scale;

    text::draw_revealed(
        ui,
        heritage::OUTRO,
        FontId::proportional(theme.heading_size * 0.6 * scale),
        theme.sand_light,
        center_x,
        y,
        width,
        reveal.progress(4, now) * opacity,
        scale,
    );
}

#[allow(clippy::too_many_arguments)]
pub fn render_bridge(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
    now: Instant,
) {
    backdrop(ui, images, bridge::BACKGROUND, theme, rect, opacity);

    let reveal = slide.reveal();
    let center_x = rect.center().x;
    let width = rect.width() * 0.66;
    let y = draw_paragraphs(
        ui,
        &bridge::PARAGRAPHS,
        reveal,
        theme,
        center_x,
        rect.top() + 150.0 * scale,
        width,
        opacity,
        scale,
        now,
    ) + 32.0 * scale;

    let progress = reveal.progress(3, now) * opacity;
    if progress <= 0.0 {
        return;
    }
    draw_value_chips(ui, theme, center_x, y + text::rise_offset(progress, scale), progress, scale);
}

/// The community values as a centred row of outlined chips.
fn draw_value_chips(
    ui: &egui::Ui,
    theme: &Theme,
    center_x: f32,
    top: f32,
    opacity: f32,
    scale: f32,
) {
    let font = FontId::proportional(theme.small_size * scale);
    let pad = egui::vec2(24.0 * scale, 12.0 * scale);
    let gap = 20.0 * scale;
    let color = Theme::with_opacity(theme.primary, opacity);

    let galleys: Vec<_> = bridge::VALUES
        .iter()
        .map(|value| ui.painter().layout_no_wrap(value.to_string(), font.clone(), color))
        .collect();
    let total: f32 = galleys
        .iter()
        .map(|g| g.rect.width() + pad.x * 2.0)
        .sum::<f32>()
        + gap * (galleys.len() as f32 - 1.0);

    let mut x = center_x - total / 2.0;
    for galley in galleys {
        let size = galley.rect.size() + pad * 2.0;
        let chip = egui::Rect::from_min_size(Pos2::new(x, top), size);
        ui.painter().rect_filled(
            chip,
            size.y / 2.0,
            Theme::with_opacity(theme.background, opacity * 0.5),
        );
        ui.painter().rect_stroke(
            chip,
            size.y / 2.0,
            Stroke::new(1.5, color),
            egui::StrokeKind::Inside,
        );
        ui.painter().galley(chip.min + pad, galley, color);
        x += size.x + gap;
    }
}
