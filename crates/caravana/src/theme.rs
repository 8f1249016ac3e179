use eframe::egui::Color32;

/// Desert palette and type scale, in 1920×1080 reference pixels.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    /// Background of panels and alternate slides.
    pub surface: Color32,
    pub foreground: Color32,
    /// Gold used for headings, highlights and the active pagination key.
    pub primary: Color32,
    pub muted: Color32,
    pub sand_light: Color32,
    pub sand_dark: Color32,
    pub display_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::desert()
    }
}

impl Theme {
    pub fn desert() -> Self {
        Self {
            background: Color32::from_rgb(0x1A, 0x14, 0x10),
            surface: Color32::from_rgb(0x2A, 0x21, 0x1A),
            foreground: Color32::from_rgb(0xF3, 0xE9, 0xD8),
            primary: Color32::from_rgb(0xD4, 0xA8, 0x4B),
            muted: Color32::from_rgb(0xA8, 0x97, 0x80),
            sand_light: Color32::from_rgb(0xE2, 0xC9, 0x9A),
            sand_dark: Color32::from_rgb(0x8C, 0x63, 0x3A),
            display_size: 128.0,
            heading_size: 64.0,
            body_size: 36.0,
            small_size: 24.0,
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let opacity = opacity.clamp(0.0, 1.0);
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity * color.a() as f32) as u8,
        )
    }

    /// Marker colour of a world tour region.
    pub fn region_color(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}
