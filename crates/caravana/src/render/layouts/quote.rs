use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::quotes::QUOTES;
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// Share of a quote's period spent fading in and out.
const EDGE: f32 = 0.15;

/// Opacity of a quote at `phase` through its period.
pub fn quote_opacity(phase: f32, last: bool) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    let fade_in = (phase / EDGE).min(1.0);
    if last {
        return fade_in;
    }
    fade_in.min(((1.0 - phase) / EDGE).min(1.0))
}

/// Press quotes, one at a time, over the muted backdrop footage.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    let Some(rotation) = slide.rotation() else {
        return;
    };
    let drift = slide.reveal().elapsed(now).as_secs_f32() * 0.004;
    text::draw_dunes(ui, theme, rect, opacity, drift);
    text::draw_scrim(ui, rect, 0.65, opacity);

    let index = rotation.index(now);
    let finished = rotation.exhausted_at().is_some_and(|at| now >= at);
    let phase = if finished { 1.0 } else { rotation.phase(now) };
    let alpha = quote_opacity(phase, index + 1 == QUOTES.len()) * opacity;
    let (quote, source) = QUOTES[index];

    let width = rect.width() * 0.62;
    let center_x = rect.center().x;
    let quote_font = FontId::proportional(theme.heading_size * 0.75 * scale);
    let source_font = FontId::proportional(theme.small_size * scale);
    let body = format!("\u{201C}{quote}\u{201D}");
    let quote_h = text::measure(ui, &body, quote_font.clone(), width);
    let total = quote_h + 32.0 * scale + theme.small_size * scale;
    let mut y = rect.center().y - total / 2.0;

    if alpha > 0.0 {
        y += text::draw_centered(
            ui,
            &body,
            quote_font,
            Theme::with_opacity(theme.foreground, alpha),
            center_x,
            y,
            width,
        );
        y += 32.0 * scale;
        text::draw_centered(
            ui,
            &format!("\u{2014} {source}"),
            source_font,
            Theme::with_opacity(theme.primary, alpha),
            center_x,
            y,
            width,
        );
    }

    // Position dots along the bottom.
    let gap = 18.0 * scale;
    let first_x = center_x - gap * (QUOTES.len() as f32 - 1.0) / 2.0;
    let dot_y = rect.bottom() - 60.0 * scale;
    for i in 0..QUOTES.len() {
        let (radius, dot_alpha) = if i == index { (5.0, 1.0) } else { (3.0, 0.35) };
        ui.painter().circle_filled(
            Pos2::new(first_x + gap * i as f32, dot_y),
            radius * scale,
            Theme::with_opacity(theme.sand_light, opacity * dot_alpha),
        );
    }
}
