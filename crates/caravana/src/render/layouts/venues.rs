use std::time::{Duration, Instant};

use eframe::egui::{self, FontId};

use crate::deck::content::venues::{INTRO, KICKER, STAGGER_MS, VENUES};
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
    text::draw_dunes(ui, theme, rect, opacity * 0.6, 0.3);
    text::draw_scrim(ui, rect, 0.55, opacity);

    let reveal = slide.reveal();
    let center_x = rect.center().x;
    let width = rect.width() * 0.7;
    let mut y = rect.top() + 120.0 * scale;

    let intro = reveal.progress(0, now) * opacity;
    y += text::draw_revealed(
        ui,
        INTRO,
        FontId::proportional(theme.heading_size * 0.85 * scale),
        theme.foreground,
        center_x,
        y,
        width,
        intro,
        scale,
    );
    y += 24.0 * scale;
    y += text::draw_revealed(
        ui,
        KICKER,
        FontId::proportional(theme.small_size * scale),
        theme.primary,
        center_x,
        y,
        width,
        intro,
        scale,
    );
    y += 56.0 * scale;

    // The list appears at the second cue, one line every stagger step.
    let list_cue = slide.definition().cues.get(1).copied().unwrap_or(0);
    for (i, venue) in VENUES.iter().enumerate() {
        let offset = Duration::from_millis(list_cue + STAGGER_MS * i as u64);
        let progress = reveal.progress_after(offset, now) * opacity;
        y += text::draw_revealed(
            ui,
            venue,
            FontId::proportional(theme.body_size * scale),
            theme.sand_light,
            center_x,
            y,
            width,
            progress,
            scale,
        );
        y += 18.0 * scale;
    }
}
