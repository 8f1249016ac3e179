use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::content::world_tour::{MAP, REGIONS};
use crate::render::image_cache::ImageCache;
use crate::render::text;
use crate::slides::SlideRuntime;
use crate::theme::Theme;

const MAP_ASPECT: f32 = 2.0;
const NAV_DOT_RADIUS: f32 = 8.0;
const NAV_DOT_GAP: f32 = 28.0;
const PLACE_COLUMNS: usize = 4;

/// Where the map and the region buttons sit for a given slide rect.
#[derive(Debug, Clone, PartialEq)]
pub struct TourLayout {
    pub nav_dots: Vec<Pos2>,
    pub dot_radius: f32,
    pub map: egui::Rect,
}

impl TourLayout {
    pub fn new(rect: egui::Rect, scale: f32) -> Self {
        let dot_y = rect.top() + 190.0 * scale;
        let gap = NAV_DOT_GAP * scale;
        let first_x = rect.center().x - gap * (REGIONS.len() as f32 - 1.0) / 2.0;
        let nav_dots = (0..REGIONS.len())
            .map(|i| Pos2::new(first_x + gap * i as f32, dot_y))
            .collect();

        let map_w = (rect.width() * 0.55).min(1100.0 * scale);
        let map = egui::Rect::from_min_size(
            Pos2::new(rect.center().x - map_w / 2.0, dot_y + 40.0 * scale),
            egui::vec2(map_w, map_w / MAP_ASPECT),
        );

        Self {
            nav_dots,
            dot_radius: NAV_DOT_RADIUS * scale,
            map,
        }
    }

    pub fn marker(&self, region: usize) -> Option<Pos2> {
        let (x, y) = REGIONS.get(region)?.position;
        Some(Pos2::new(
            self.map.left() + self.map.width() * x / 100.0,
            self.map.top() + self.map.height() * y / 100.0,
        ))
    }

    /// Region whose navigation dot or map marker is under `pos`.
    pub fn hit(&self, pos: Pos2) -> Option<usize> {
        // Generous target around the small dots.
        let reach = self.dot_radius * 2.0;
        self.nav_dots
            .iter()
            .position(|dot| dot.distance(pos) <= reach)
            .or_else(|| {
                (0..REGIONS.len())
                    .find(|&i| self.marker(i).is_some_and(|m| m.distance(pos) <= reach))
            })
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &SlideRuntime,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
    now: Instant,
) {
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(theme.surface, opacity));

    let opacity = slide.reveal().progress(0, now) * opacity;
    if opacity <= 0.0 {
        return;
    }
    let active = slide.rotation_index(now).unwrap_or(0);
    let region = &REGIONS[active];
    let region_color = Theme::region_color(region.color);
    let layout = TourLayout::new(rect, scale);

    let center_x = rect.center().x;
    let mut y = rect.top() + 60.0 * scale;
    y += text::draw_centered(
        ui,
        region.name,
        FontId::proportional(theme.heading_size * 0.9 * scale),
        Theme::with_opacity(region_color, opacity),
        center_x,
        y,
        rect.width(),
    );
    text::draw_centered(
        ui,
        "PERFORMANCES & TOURS",
        FontId::proportional(theme.small_size * 0.6 * scale),
        Theme::with_opacity(theme.muted, opacity * 0.6),
        center_x,
        y + 8.0 * scale,
        rect.width(),
    );

    for (i, (dot, r)) in layout.nav_dots.iter().zip(REGIONS.iter()).enumerate() {
        let alpha = if i == active { 1.0 } else { 0.4 };
        let radius = if i == active {
            layout.dot_radius * 1.1
        } else {
            layout.dot_radius
        };
        ui.painter().circle_filled(
            *dot,
            radius,
            Theme::with_opacity(Theme::region_color(r.color), opacity * alpha),
        );
    }

    text::draw_cover_image(ui, images, MAP, theme, layout.map, opacity * 0.9);

    for (i, r) in REGIONS.iter().enumerate() {
        let Some(marker) = layout.marker(i) else {
            continue;
        };
        let color = Theme::region_color(r.color);
        if i == active {
            // Pulsing ring.
            let pulse = (slide.reveal().elapsed(now).as_secs_f32() * 1.5).fract();
            ui.painter().circle_filled(
                marker,
                (12.0 + 12.0 * pulse) * scale,
                Theme::with_opacity(color, opacity * 0.4 * (1.0 - pulse)),
            );
        }
        let (radius, alpha) = if i == active { (8.0, 1.0) } else { (6.0, 0.4) };
        ui.painter().circle(
            marker,
            radius * scale,
            Theme::with_opacity(color, opacity * alpha),
            Stroke::new(2.0 * scale, Theme::with_opacity(egui::Color32::WHITE, opacity * alpha)),
        );
    }

    // Places of the active region in a grid below the map.
    let grid_w = layout.map.width();
    let gap = 10.0 * scale;
    let cell_w = (grid_w - gap * (PLACE_COLUMNS as f32 - 1.0)) / PLACE_COLUMNS as f32;
    let cell_h = 44.0 * scale;
    let top = layout.map.bottom() + 24.0 * scale;
    for (i, place) in region.places.iter().enumerate() {
        let col = i % PLACE_COLUMNS;
        let row = i / PLACE_COLUMNS;
        let cell = egui::Rect::from_min_size(
            Pos2::new(
                layout.map.left() + col as f32 * (cell_w + gap),
                top + row as f32 * (cell_h + gap),
            ),
            egui::vec2(cell_w, cell_h),
        );
        ui.painter().rect_filled(
            cell,
            4.0 * scale,
            Theme::with_opacity(region_color, opacity * 0.05),
        );
        ui.painter().rect_stroke(
            cell,
            4.0 * scale,
            Stroke::new(1.0, Theme::with_opacity(region_color, opacity * 0.25)),
            egui::StrokeKind::Inside,
        );
        let galley = ui.painter().layout_no_wrap(
            place.to_string(),
            FontId::proportional(theme.small_size * 0.75 * scale),
            Theme::with_opacity(theme.foreground, opacity * 0.85),
        );
        let pos = cell.center() - galley.rect.size() / 2.0;
        ui.painter()
            .galley(pos, galley, Theme::with_opacity(theme.foreground, opacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TourLayout {
        let rect = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        TourLayout::new(rect, 1.0)
    }

    #[test]
    fn test_nav_dots_centered() {
        let layout = layout();
        assert_eq!(layout.nav_dots.len(), REGIONS.len());
        let first = layout.nav_dots[0].x;
        let last = layout.nav_dots[REGIONS.len() - 1].x;
        assert!(((first + last) / 2.0 - 960.0).abs() < 1e-3);
    }

    #[test]
    fn test_hit_nav_dot_and_marker() {
        let layout = layout();
        assert_eq!(layout.hit(layout.nav_dots[2]), Some(2));
        let marker = layout.marker(3).unwrap();
        assert_eq!(layout.hit(marker), Some(3));
        assert_eq!(layout.hit(Pos2::new(5.0, 1070.0)), None);
        assert!(layout.marker(REGIONS.len()).is_none());
    }
}
