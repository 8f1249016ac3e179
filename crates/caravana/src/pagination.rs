//! Harmonium-key page indicator along the bottom edge.

use eframe::egui::{self, Pos2, Stroke};

use crate::deck::SlideIndex;
use crate::theme::Theme;

const WIDTH_PATTERN: [f32; 12] = [1.0, 0.7, 1.0, 0.7, 1.0, 1.0, 0.7, 1.0, 0.7, 1.0, 0.7, 1.0];
const NARROW_WIDTH: f32 = 8.0;
const WIDE_WIDTH: f32 = 14.0;
const GAP: f32 = 2.0;
const BOTTOM_OFFSET: f32 = 32.0;

pub fn is_narrow(index: SlideIndex) -> bool {
    WIDTH_PATTERN[index % WIDTH_PATTERN.len()] < 1.0
}

fn key_size(index: SlideIndex, active: bool) -> egui::Vec2 {
    let narrow = is_narrow(index);
    let width = if narrow { NARROW_WIDTH } else { WIDE_WIDTH };
    let height = match (narrow, active) {
        (true, false) => 24.0,
        (false, false) => 32.0,
        (true, true) => 32.0,
        (false, true) => 40.0,
    };
    egui::vec2(width, height)
}

/// Rects of every key, bottom-aligned and centred horizontally in `screen`.
pub fn key_rects(
    screen: egui::Rect,
    count: usize,
    current: SlideIndex,
    scale: f32,
) -> Vec<egui::Rect> {
    let sizes: Vec<_> = (0..count).map(|i| key_size(i, i == current) * scale).collect();
    let gap = GAP * scale;
    let total = sizes.iter().map(|s| s.x).sum::<f32>() + gap * count.saturating_sub(1) as f32;
    let bottom = screen.bottom() - BOTTOM_OFFSET * scale;

    let mut x = screen.center().x - total / 2.0;
    sizes
        .into_iter()
        .map(|size| {
            let rect = egui::Rect::from_min_size(Pos2::new(x, bottom - size.y), size);
            x += size.x + gap;
            rect
        })
        .collect()
}

/// Key under `pos`, if any.
pub fn hit_test(rects: &[egui::Rect], pos: Pos2) -> Option<SlideIndex> {
    rects.iter().position(|r| r.contains(pos))
}

pub fn draw(
    painter: &egui::Painter,
    theme: &Theme,
    rects: &[egui::Rect],
    current: SlideIndex,
    hover: Option<Pos2>,
    scale: f32,
) {
    let hovered = hover.and_then(|pos| hit_test(rects, pos));
    let rounding = egui::CornerRadius {
        nw: 0,
        ne: 0,
        sw: (2.0 * scale) as u8,
        se: (2.0 * scale) as u8,
    };

    for (i, rect) in rects.iter().enumerate() {
        let active = i == current;
        let narrow = is_narrow(i);
        let body = if hovered == Some(i) {
            Theme::with_opacity(theme.primary, 0.4)
        } else {
            match (active, narrow) {
                (true, true) => Theme::with_opacity(theme.primary, 0.8),
                (true, false) => Theme::with_opacity(theme.primary, 0.6),
                (false, true) => Theme::with_opacity(theme.surface, 0.8),
                (false, false) => Theme::with_opacity(theme.foreground, 0.1),
            }
        };
        painter.rect_filled(*rect, rounding, body);

        let highlight = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 4.0 * scale));
        let highlight_color = if active {
            Theme::with_opacity(theme.primary, 0.8)
        } else {
            Theme::with_opacity(theme.foreground, 0.05)
        };
        painter.rect_filled(highlight, 0.0, highlight_color);

        if active {
            painter.circle_filled(
                Pos2::new(rect.center().x, rect.bottom() + 6.0 * scale),
                2.0 * scale,
                theme.primary,
            );
            painter.rect_stroke(
                rect.expand(1.0),
                rounding,
                Stroke::new(1.0, Theme::with_opacity(theme.primary, 0.3)),
                egui::StrokeKind::Outside,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SLIDE_COUNT;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0))
    }

    #[test]
    fn test_pattern_wraps_after_twelve() {
        assert!(!is_narrow(0));
        assert!(is_narrow(1));
        assert!(!is_narrow(5));
        assert_eq!(is_narrow(12), is_narrow(0));
    }

    #[test]
    fn test_key_sizes() {
        assert_eq!(key_size(0, false), egui::vec2(14.0, 32.0));
        assert_eq!(key_size(0, true), egui::vec2(14.0, 40.0));
        assert_eq!(key_size(1, false), egui::vec2(8.0, 24.0));
        assert_eq!(key_size(1, true), egui::vec2(8.0, 32.0));
    }

    #[test]
    fn test_rects_are_centered_and_bottom_aligned() {
        let rects = key_rects(screen(), SLIDE_COUNT, 3, 1.0);
        assert_eq!(rects.len(), SLIDE_COUNT);
        let left = rects[0].left();
        let right = rects[SLIDE_COUNT - 1].right();
        assert!(((left + right) / 2.0 - 960.0).abs() < 1e-3);
        for rect in &rects {
            assert_eq!(rect.bottom(), 1080.0 - 32.0);
        }
        for pair in rects.windows(2) {
            assert!((pair[1].left() - pair[0].right() - 2.0).abs() < 1e-3);
        }
        assert_eq!(rects[3].height(), 32.0);
    }

    #[test]
    fn test_hit_test() {
        let rects = key_rects(screen(), SLIDE_COUNT, 0, 1.0);
        assert_eq!(hit_test(&rects, rects[7].center()), Some(7));
        assert_eq!(hit_test(&rects, Pos2::new(10.0, 10.0)), None);
    }
}
