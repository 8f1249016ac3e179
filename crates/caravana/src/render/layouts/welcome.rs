use std::time::Instant;

use eframe::egui::{self, FontId};

use crate::deck::content::{self, welcome};
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    let drift = slide.reveal().elapsed(now).as_secs_f32() * 0.006;
    text::draw_dunes(ui, theme, rect, opacity, drift);
    text::draw_scrim(ui, rect, 0.4, opacity);

    let progress = slide.reveal().progress(0, now) * opacity;
    let center_x = rect.center().x;
    let width = rect.width() * 0.8;
    let lead_font = FontId::proportional(theme.heading_size * scale);
    let title_font = FontId::proportional(theme.display_size * scale);

    let total = text::measure(ui, welcome::LEAD, lead_font.clone(), width)
        + 32.0 * scale
        + text::measure(ui, content::TITLE, title_font.clone(), width);
    let mut y = rect.center().y - total / 2.0;

    y += text::draw_revealed(
        ui,
        welcome::LEAD,
        lead_font,
        theme.foreground,
        center_x,
        y,
        width,
        progress,
        scale,
    );
    y += 32.0 * scale;
    text::draw_revealed(
        ui,
        content::TITLE,
        title_font,
        theme.primary,
        center_x,
        y,
        width,
        progress,
        scale,
    );
}
