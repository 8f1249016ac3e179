use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::accolades::LINES;
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// One accolade per line, each with a gold marker, revealed in turn.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    ui.painter().rect_filled(rect, 0.0, Theme::with_opacity(theme.background, opacity));

    let reveal = slide.reveal();
    let font = FontId::proportional(theme.heading_size * 0.7 * scale);
    let line_gap = 40.0 * scale;
    let width = rect.width() * 0.6;
    let left = rect.center().x - width / 2.0;

    let total: f32 = LINES
        .iter()
        .map(|line| text::measure(ui, line, font.clone(), width))
        .sum::<f32>()
        + line_gap * (LINES.len() as f32 - 1.0);
    let mut y = rect.center().y - total / 2.0;

    for (i, line) in LINES.iter().enumerate() {
        let progress = reveal.progress(i, now) * opacity;
        let height = text::measure(ui, line, font.clone(), width);
        if progress > 0.0 {
            let top = y + text::rise_offset(progress, scale);
            let marker = Pos2::new(left - 28.0 * scale, top + height / 2.0);
            ui.painter().circle_filled(
                marker,
                6.0 * scale,
                Theme::with_opacity(theme.primary, progress),
            );
            text::draw_wrapped(
                ui,
                line,
                font.clone(),
                Theme::with_opacity(theme.foreground, progress),
                Pos2::new(left, top),
                width,
            );
        }
        y += height + line_gap;
    }
}
