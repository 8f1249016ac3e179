//! Drawing helpers shared by the scene renderers.

use eframe::egui::{self, Color32, FontId, Pos2, Stroke};

use crate::render::image_cache::ImageCache;
use crate::theme::Theme;

/// Distance a revealed element rises while it fades in.
const RISE: f32 = 24.0;

/// Vertical offset of an element at reveal `progress`.
pub fn rise_offset(progress: f32, scale: f32) -> f32 {
    let eased = 1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(2);
    (1.0 - eased) * RISE * scale
}

/// Draw wrapped text with its top-left at `pos`. Returns the height used.
pub fn draw_wrapped(
    ui: &egui::Ui,
    text: &str,
    font: FontId,
    color: Color32,
    pos: Pos2,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw wrapped, horizontally centred text. Returns the height used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    font: FontId,
    color: Color32,
    center_x: f32,
    top: f32,
    max_width: f32,
) -> f32 {
    let mut job = egui::text::LayoutJob::simple(text.to_string(), font, color, max_width);
    job.halign = egui::Align::Center;
    let galley = ui.painter().layout_job(job);
    let height = galley.rect.height();
    ui.painter().galley(Pos2::new(center_x, top), galley, color);
    height
}

/// Height `text` would take when wrapped at `max_width`.
pub fn measure(ui: &egui::Ui, text: &str, font: FontId, max_width: f32) -> f32 {
    ui.painter()
        .layout(text.to_string(), font, Color32::WHITE, max_width)
        .rect
        .height()
}

/// Centred text that fades in and rises with a reveal. Returns the height
/// it occupies, whether or not it is visible yet.
#[allow(clippy::too_many_arguments)]
pub fn draw_revealed(
    ui: &egui::Ui,
    text: &str,
    font: FontId,
    color: Color32,
    center_x: f32,
    top: f32,
    max_width: f32,
    progress: f32,
    scale: f32,
) -> f32 {
    if progress <= 0.0 {
        return measure(ui, text, font, max_width);
    }
    let color = Theme::with_opacity(color, progress);
    draw_centered(
        ui,
        text,
        font,
        color,
        center_x,
        top + rise_offset(progress, scale),
        max_width,
    )
}

/// Dark overlay so text stays readable on photos.
pub fn draw_scrim(ui: &egui::Ui, rect: egui::Rect, strength: f32, opacity: f32) {
    let color = Color32::from_black_alpha((strength * opacity * 255.0) as u8);
    ui.painter().rect_filled(rect, 0.0, color);
}

/// Fill `available` with a texture, keeping its aspect ratio and cropping
/// whatever overflows.
pub fn cover_uv(tex_size: egui::Vec2, available: egui::Vec2) -> egui::Rect {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || available.x <= 0.0 || available.y <= 0.0 {
        return egui::Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
    }
    let tex_aspect = tex_size.x / tex_size.y;
    let area_aspect = available.x / available.y;
    if tex_aspect > area_aspect {
        let visible = area_aspect / tex_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = tex_aspect / area_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Draw an asset image covering `rect`. Falls back to the dune backdrop
/// when the image is unavailable.
pub fn draw_cover_image(
    ui: &egui::Ui,
    images: &ImageCache,
    asset: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
) {
    if let Some(texture) = images.get_or_load(ui, asset) {
        let uv = cover_uv(texture.size_vec2(), rect.size());
        let tint = Color32::from_white_alpha((opacity.clamp(0.0, 1.0) * 255.0) as u8);
        ui.painter().image(texture.id(), rect, uv, tint);
    } else {
        draw_dunes(ui, theme, rect, opacity, 0.0);
    }
}

/// Procedural desert: a sky gradient, a low sun and layered dunes.
/// `drift` shifts the dune crests horizontally, in fractions of the width.
pub fn draw_dunes(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, opacity: f32, drift: f32) {
    let painter = ui.painter();
    let bands = 12;
    for i in 0..bands {
        let t = i as f32 / bands as f32;
        let color = lerp_color(theme.surface, theme.sand_dark, t * 0.6);
        let band = egui::Rect::from_min_size(
            egui::pos2(rect.left(), rect.top() + rect.height() * t),
            egui::vec2(rect.width(), rect.height() / bands as f32 + 1.0),
        );
        painter.rect_filled(band, 0.0, Theme::with_opacity(color, opacity));
    }

    let sun = egui::pos2(
        rect.left() + rect.width() * 0.72,
        rect.top() + rect.height() * 0.38,
    );
    painter.circle_filled(
        sun,
        rect.height() * 0.09,
        Theme::with_opacity(theme.primary, opacity * 0.55),
    );

    let layers = [
        (0.58, 0.06, theme.sand_dark, 1.3),
        (0.70, 0.05, lerp_color(theme.sand_dark, theme.sand_light, 0.45), 2.1),
        (0.82, 0.04, theme.sand_light, 2.9),
    ];
    for (level, amplitude, color, frequency) in layers {
        let points = dune_outline(rect, level, amplitude, frequency, drift);
        let fill = Theme::with_opacity(color, opacity);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let mesh_rect = egui::Rect::from_min_max(
                egui::pos2(a.x, a.y.min(b.y)),
                egui::pos2(b.x + 1.0, rect.bottom()),
            );
            painter.rect_filled(mesh_rect, 0.0, fill);
        }
        painter.add(egui::Shape::line(
            points,
            Stroke::new(1.5, Theme::with_opacity(theme.sand_light, opacity * 0.4)),
        ));
    }
}

fn dune_outline(
    rect: egui::Rect,
    level: f32,
    amplitude: f32,
    frequency: f32,
    drift: f32,
) -> Vec<Pos2> {
    let steps = 96;
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let phase = (t + drift) * std::f32::consts::TAU * frequency;
            let y = level + amplitude * (phase.sin() * 0.7 + (phase * 0.43).cos() * 0.3);
            egui::pos2(rect.left() + rect.width() * t, rect.top() + rect.height() * y)
        })
        .collect()
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// A thin gold rule, centred.
pub fn draw_rule(ui: &egui::Ui, theme: &Theme, center_x: f32, y: f32, width: f32, opacity: f32) {
    ui.painter().line_segment(
        [
            Pos2::new(center_x - width / 2.0, y),
            Pos2::new(center_x + width / 2.0, y),
        ],
        Stroke::new(2.0, Theme::with_opacity(theme.primary, opacity)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_crops_wide_texture_horizontally() {
        let uv = cover_uv(egui::vec2(400.0, 100.0), egui::vec2(200.0, 100.0));
        assert!((uv.left() - 0.25).abs() < 1e-5);
        assert!((uv.right() - 0.75).abs() < 1e-5);
        assert_eq!(uv.top(), 0.0);
        assert_eq!(uv.bottom(), 1.0);
    }

    #[test]
    fn test_cover_crops_tall_texture_vertically() {
        let uv = cover_uv(egui::vec2(100.0, 400.0), egui::vec2(100.0, 100.0));
        assert_eq!(uv.left(), 0.0);
        assert!((uv.top() - 0.375).abs() < 1e-5);
        assert!((uv.bottom() - 0.625).abs() < 1e-5);
    }

    #[test]
    fn test_cover_degenerate_sizes() {
        let uv = cover_uv(egui::Vec2::ZERO, egui::vec2(100.0, 100.0));
        assert_eq!(uv, egui::Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)));
    }

    #[test]
    fn test_rise_offset() {
        assert_eq!(rise_offset(0.0, 1.0), RISE);
        assert_eq!(rise_offset(1.0, 2.0), 0.0);
        assert!(rise_offset(0.5, 1.0) < RISE / 2.0);
    }

    #[test]
    fn test_lerp_color() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
