use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::collaborations::{COLUMNS, INTRO, OUTRO};
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// Three columns of collaborators, revealed one after another between an
/// intro line and an outro paragraph.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    ui.painter().rect_filled(rect, 0.0, Theme::with_opacity(theme.surface, opacity));

    let reveal = slide.reveal();
    let padding = 96.0 * scale;
    let content = rect.shrink(padding);
    let mut y = content.top();

    y += text::draw_revealed(
        ui,
        INTRO,
        FontId::proportional(theme.heading_size * 0.8 * scale),
        theme.primary,
        content.center().x,
        y,
        content.width(),
        reveal.progress(0, now) * opacity,
        scale,
    );
    y += 64.0 * scale;

    let gap = 48.0 * scale;
    let column_width = (content.width() - gap * 2.0) / COLUMNS.len() as f32;
    let mut columns_bottom = y;

    for (i, (title, artists)) in COLUMNS.iter().enumerate() {
        let progress = reveal.progress(i + 1, now) * opacity;
        let left = content.left() + i as f32 * (column_width + gap);
        let mut cy = y + text::rise_offset(progress, scale);

        if progress > 0.0 {
            let heading = Theme::with_opacity(theme.sand_light, progress);
            cy += text::draw_wrapped(
                ui,
                &title.to_uppercase(),
                FontId::proportional(theme.small_size * scale),
                heading,
                Pos2::new(left, cy),
                column_width,
            );
            cy += 8.0 * scale;
            ui.painter().line_segment(
                [Pos2::new(left, cy), Pos2::new(left + 64.0 * scale, cy)],
                egui::Stroke::new(2.0, Theme::with_opacity(theme.primary, progress)),
            );
            cy += 20.0 * scale;

            for artist in artists.iter() {
                cy += text::draw_wrapped(
                    ui,
                    artist.name,
                    FontId::proportional(theme.body_size * scale),
                    Theme::with_opacity(theme.foreground, progress),
                    Pos2::new(left, cy),
                    column_width,
                );
                if !artist.note.is_empty() {
                    cy += text::draw_wrapped(
                        ui,
                        artist.note,
                        FontId::proportional(theme.small_size * 0.8 * scale),
                        Theme::with_opacity(theme.muted, progress),
                        Pos2::new(left, cy),
                        column_width,
                    );
                }
                cy += 16.0 * scale;
            }
        }
        columns_bottom = columns_bottom.max(cy);
    }

    let outro_top = columns_bottom.max(content.bottom() - 160.0 * scale);
    text::draw_revealed(
        ui,
        OUTRO,
        FontId::proportional(theme.body_size * 0.9 * scale),
        theme.foreground,
        content.center().x,
        outro_top,
        content.width() * 0.85,
        reveal.progress(4, now) * opacity,
        scale,
    );
}
