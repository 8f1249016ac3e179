use std::time::Instant;

use eframe::egui::{self, FontId, Pos2};

use crate::deck::content::attendance::{CONCERT_HALLS, FESTIVALS, HEADING};
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

/// Two tables of venue and audience figures under a heading.
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
        .rect_filled(rect, 0.0, Theme::with_opacity(theme.background, opacity));

    let reveal = slide.reveal();
    let center_x = rect.center().x;
    let mut y = rect.top() + 80.0 * scale;
    y += text::draw_revealed(
        ui,
        HEADING,
        FontId::proportional(theme.heading_size * 0.6 * scale),
        theme.primary,
        center_x,
        y,
        rect.width() * 0.8,
        reveal.progress(0, now) * opacity,
        scale,
    );
    y += 56.0 * scale;

    let progress = reveal.progress(0, now) * opacity;
    if progress <= 0.0 {
        return;
    }
    let top = y + text::rise_offset(progress, scale);
    let column_w = rect.width() * 0.36;
    let gutter = rect.width() * 0.06;
    let left = center_x - column_w - gutter / 2.0;

    draw_table(
        ui,
        theme,
        "Concert halls",
        &CONCERT_HALLS,
        Pos2::new(left, top),
        column_w,
        progress,
        scale,
    );
    draw_table(
        ui,
        theme,
        "Festivals",
        &FESTIVALS,
        Pos2::new(center_x + gutter / 2.0, top),
        column_w,
        progress,
        scale,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_table(
    ui: &egui::Ui,
    theme: &Theme,
    title: &str,
    rows: &[(&str, &str)],
    origin: Pos2,
    width: f32,
    opacity: f32,
    scale: f32,
) {
    let painter = ui.painter();
    let title_color = Theme::with_opacity(theme.sand_light, opacity);
    let galley = painter.layout_no_wrap(
        title.to_uppercase(),
        FontId::proportional(theme.small_size * 0.9 * scale),
        title_color,
    );
    let mut y = origin.y;
    y += galley.rect.height() + 12.0 * scale;
    painter.galley(origin, galley, title_color);
    painter.hline(
        origin.x..=origin.x + width,
        y,
        egui::Stroke::new(1.0, Theme::with_opacity(theme.sand_dark, opacity)),
    );
    y += 12.0 * scale;

    let font = FontId::proportional(theme.small_size * 0.85 * scale);
    let name_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let count_color = Theme::with_opacity(theme.primary, opacity);
    for (name, count) in rows {
        let count_galley = painter.layout_no_wrap(count.to_string(), font.clone(), count_color);
        let count_w = count_galley.rect.width();
        let name_galley = painter.layout(
            name.to_string(),
            font.clone(),
            name_color,
            width - count_w - 24.0 * scale,
        );
        let row_h = name_galley.rect.height().max(count_galley.rect.height());
        painter.galley(Pos2::new(origin.x, y), name_galley, name_color);
        painter.galley(Pos2::new(origin.x + width - count_w, y), count_galley, count_color);
        y += row_h + 10.0 * scale;
    }
}
