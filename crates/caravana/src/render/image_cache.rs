use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui;

/// Lazily loaded textures for the slide images, keyed by asset path.
///
/// Asset paths are written the way the slides reference them
/// (`/assets/Images/...`) and resolved against the asset root. A miss is
/// cached too, so a missing file is reported once and not retried.
pub struct ImageCache {
    root: PathBuf,
    textures: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: RefCell::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, asset: &str) -> PathBuf {
        self.root.join(asset.trim_start_matches('/'))
    }

    pub fn get_or_load(&self, ui: &egui::Ui, asset: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.borrow().get(asset) {
            return cached.clone();
        }

        let path = self.resolve(asset);
        let texture = match load_color_image(&path) {
            Ok(image) => Some(ui.ctx().load_texture(
                asset,
                image,
                egui::TextureOptions::LINEAR,
            )),
            Err(err) => {
                tracing::warn!("{err:#}");
                None
            }
        };
        self.textures
            .borrow_mut()
            .insert(asset.to_string(), texture.clone());
        texture
    }
}

pub fn load_color_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?
        .into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_leading_slash() {
        let cache = ImageCache::new("public");
        assert_eq!(
            cache.resolve("/assets/Slideshow/1.jpg"),
            PathBuf::from("public/assets/Slideshow/1.jpg")
        );
        assert_eq!(
            cache.resolve("assets/x.png"),
            PathBuf::from("public/assets/x.png")
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_color_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("here.png"));
    }

    #[test]
    fn test_loads_png() {
        let dir = std::env::temp_dir().join(format!("caravana-image-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([200, 150, 90, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_color_image(&path).unwrap();
        assert_eq!(loaded.size, [3, 2]);
        assert_eq!(loaded.pixels[0], egui::Color32::from_rgb(200, 150, 90));
        std::fs::remove_dir_all(&dir).ok();
    }
}
