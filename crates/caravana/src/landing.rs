//! Splash screen shown until the first interaction. Media only starts once
//! it has been dismissed.

use std::time::Instant;

use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::content::{TAGLINE, TITLE};
use crate::render::text;
use crate::theme::Theme;

const BUTTON_LABEL: &str = "PRESS TO DIVE IN";
const BUTTON_HINT: &str = "the soothing waves of Rajasthani classical music";
const BUTTON_SIZE: egui::Vec2 = egui::vec2(560.0, 120.0);

#[derive(Debug, Default)]
pub struct LandingGate {
    dismissed: bool,
}

impl LandingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.dismissed
    }

    /// Close the gate. Returns true only for the call that actually closed it.
    pub fn dismiss(&mut self) -> bool {
        if self.dismissed {
            return false;
        }
        self.dismissed = true;
        tracing::info!("landing gate dismissed");
        true
    }

    pub fn button_rect(screen: egui::Rect, scale: f32) -> egui::Rect {
        egui::Rect::from_center_size(
            Pos2::new(screen.center().x, screen.center().y + 90.0 * scale),
            BUTTON_SIZE * scale,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        ui: &egui::Ui,
        theme: &Theme,
        screen: egui::Rect,
        hover: Option<Pos2>,
        scale: f32,
        now: Instant,
        started: Instant,
    ) {
        let painter = ui.painter();
        painter.rect_filled(screen, 0.0, theme.background);
        // Soft glows behind the title.
        painter.circle_filled(
            Pos2::new(screen.left() + screen.width() * 0.25, screen.top() + screen.height() * 0.25),
            180.0 * scale,
            Theme::with_opacity(theme.primary, 0.04),
        );
        painter.circle_filled(
            Pos2::new(screen.left() + screen.width() * 0.75, screen.top() + screen.height() * 0.66),
            220.0 * scale,
            Theme::with_opacity(theme.sand_dark, 0.04),
        );

        let center_x = screen.center().x;
        let button = Self::button_rect(screen, scale);
        let mut y = button.top() - 300.0 * scale;
        y += text::draw_centered(
            ui,
            TITLE,
            FontId::proportional(theme.display_size * 0.9 * scale),
            theme.foreground,
            center_x,
            y,
            screen.width(),
        );
        y += 16.0 * scale;
        text::draw_centered(
            ui,
            TAGLINE,
            FontId::proportional(theme.small_size * scale),
            theme.muted,
            center_x,
            y,
            screen.width() * 0.5,
        );

        let hovered = hover.is_some_and(|pos| button.contains(pos));
        let button = if hovered {
            button.expand(4.0 * scale)
        } else {
            button
        };
        let fill = if hovered { 0.2 } else { 0.08 };
        let radius = button.height() / 2.0;
        painter.rect_filled(button, radius, Theme::with_opacity(theme.primary, fill));
        painter.rect_stroke(
            button,
            radius,
            Stroke::new(1.0, Theme::with_opacity(theme.primary, if hovered { 1.0 } else { 0.5 })),
            egui::StrokeKind::Inside,
        );
        let label_h = text::draw_centered(
            ui,
            BUTTON_LABEL,
            FontId::proportional(theme.small_size * scale),
            theme.primary,
            center_x,
            button.top() + 28.0 * scale,
            button.width(),
        );
        text::draw_centered(
            ui,
            BUTTON_HINT,
            FontId::proportional(theme.small_size * 0.6 * scale),
            Theme::with_opacity(theme.muted, if hovered { 1.0 } else { 0.7 }),
            center_x,
            button.top() + 36.0 * scale + label_h,
            button.width(),
        );

        // Bouncing arrow under the button.
        let bounce = (now.duration_since(started).as_secs_f32() * std::f32::consts::PI).sin().abs();
        let tip = Pos2::new(center_x, button.bottom() + (110.0 - 12.0 * bounce) * scale);
        let arrow = Stroke::new(1.5 * scale, Theme::with_opacity(theme.primary, 0.4));
        painter.line_segment([tip - egui::vec2(0.0, 36.0 * scale), tip], arrow);
        painter.line_segment([tip - egui::vec2(12.0 * scale, 12.0 * scale), tip], arrow);
        painter.line_segment([tip + egui::vec2(12.0 * scale, -12.0 * scale), tip], arrow);

        text::draw_rule(
            ui,
            theme,
            center_x,
            screen.bottom() - 48.0 * scale,
            96.0 * scale,
            0.4,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_only_once() {
        let mut gate = LandingGate::new();
        assert!(gate.is_open());
        assert!(gate.dismiss());
        assert!(!gate.is_open());
        assert!(!gate.dismiss());
        assert!(!gate.is_open());
    }

    #[test]
    fn test_button_is_centered_below_middle() {
        let screen = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        let button = LandingGate::button_rect(screen, 1.0);
        assert_eq!(button.center().x, 960.0);
        assert!(button.center().y > 540.0);
        assert!(button.contains(button.center()));
    }
}
