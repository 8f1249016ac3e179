use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::{self, opening};
use crate::media::embed::{CLIPS, VIDEO_ID};
use crate::render::text;
use crate::slides::{SceneState, SlideRuntime};
use crate::theme::Theme;

/// Opening slide: the title over the embedded desert footage.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    let (position, clip, playing) = match slide.scene() {
        SceneState::Opening { clips, .. } => {
            (clips.position(now), clips.clip_index(), clips.is_playing())
        }
        _ => (None, 0, false),
    };

    // The backdrop drifts with the clip so paused footage reads as paused.
    let drift = position.map_or(0.0, |p| p.as_secs_f32() * 0.004);
    text::draw_dunes(ui, theme, rect, opacity, drift);
    text::draw_scrim(ui, rect, 0.35, opacity);

    let reveal = slide.reveal();
    let center_x = rect.center().x;
    let width = rect.width() * 0.8;
    let mut y = rect.top() + rect.height() * 0.28;

    y += text::draw_revealed(
        ui,
        content::TITLE,
        FontId::proportional(theme.display_size * 1.2 * scale),
        theme.primary,
        center_x,
        y,
        width,
        reveal.progress(0, now) * opacity,
        scale,
    );
    y += 36.0 * scale;

    y += text::draw_revealed(
        ui,
        opening::HEADLINE,
        FontId::proportional(theme.heading_size * scale),
        theme.foreground,
        center_x,
        y,
        width,
        reveal.progress(1, now) * opacity,
        scale,
    );
    y += 48.0 * scale;

    let india = reveal.progress(2, now) * opacity;
    if india > 0.0 {
        text::draw_rule(ui, theme, center_x, y, 160.0 * scale, india);
    }
    y += 28.0 * scale;
    text::draw_revealed(
        ui,
        opening::COUNTRY,
        FontId::proportional(theme.heading_size * 0.8 * scale),
        theme.sand_light,
        center_x,
        y,
        width,
        india,
        scale,
    );

    if let Some(position) = position {
        let secs = position.as_secs();
        let glyph = if playing { "\u{25B6}" } else { "\u{2016}" };
        let caption = format!(
            "{glyph} {VIDEO_ID} [{}/{}]  {}:{:02}",
            clip + 1,
            CLIPS.len(),
            secs / 60,
            secs % 60
        );
        let color = Theme::with_opacity(theme.muted, opacity * 0.7);
        let galley = ui.painter().layout_no_wrap(
            caption,
            FontId::monospace(theme.small_size * 0.6 * scale),
            color,
        );
        let pos = Pos2::new(
            rect.right() - galley.rect.width() - 32.0 * scale,
            rect.top() + 28.0 * scale,
        );
        ui.painter().galley(pos, galley, color);
    }
}
