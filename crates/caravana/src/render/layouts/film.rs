use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// The foreground film. Frames are not decoded; the slide shows a framed
/// screen with the elapsed running time.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    now: Instant,
) {
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(egui::Color32::BLACK, opacity));

    let screen_w = rect.width() * 0.72;
    let screen = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(screen_w, screen_w * 9.0 / 16.0),
    );
    let elapsed = slide.reveal().elapsed(now);
    text::draw_dunes(ui, theme, screen, opacity, elapsed.as_secs_f32() * 0.01);
    ui.painter().rect_stroke(
        screen,
        4.0 * scale,
        Stroke::new(2.0, Theme::with_opacity(theme.sand_dark, opacity)),
        egui::StrokeKind::Outside,
    );

    let color = Theme::with_opacity(theme.foreground, opacity * 0.85);
    let title = ui.painter().layout_no_wrap(
        slide.definition().title.to_string(),
        FontId::proportional(theme.body_size * scale),
        color,
    );
    let title_pos = Pos2::new(
        rect.center().x - title.rect.width() / 2.0,
        screen.bottom() + 32.0 * scale,
    );
    ui.painter().galley(title_pos, title, color);

    let secs = elapsed.as_secs();
    let timecode = ui.painter().layout_no_wrap(
        format!("{}:{:02}", secs / 60, secs % 60),
        FontId::monospace(theme.small_size * 0.7 * scale),
        Theme::with_opacity(theme.muted, opacity),
    );
    let pos = Pos2::new(
        screen.right() - timecode.rect.width() - 16.0 * scale,
        screen.bottom() - timecode.rect.height() - 12.0 * scale,
    );
    ui.painter()
        .galley(pos, timecode, Theme::with_opacity(theme.muted, opacity));
}
