//! Framebuffer presentation.
//!
//! Uploads the palette-indexed software screen as an egui texture and paints
//! it at the largest integer scale that fits, with nearest filtering so
//! pixels stay square.

use eframe::egui;
use rpixed::{color_of, Framebuffer};

/// Owns the texture the screen is uploaded into.
#[derive(Default)]
pub struct ScreenView {
    texture: Option<egui::TextureHandle>,
}

/// Largest integer scale at which `screen` fits into `available`.
pub fn integer_scale(available: egui::Vec2, screen: (i32, i32)) -> f32 {
    let sx = (available.x / screen.0 as f32).floor();
    let sy = (available.y / screen.1 as f32).floor();
    sx.min(sy).max(1.0)
}

/// Converts palette indices to an RGBA image.
pub fn to_color_image(screen: &Framebuffer) -> egui::ColorImage {
    let rgba: Vec<u8> = screen
        .pixels()
        .iter()
        .flat_map(|&index| color_of(index).to_array())
        .collect();
    egui::ColorImage::from_rgba_unmultiplied(
        [screen.width() as usize, screen.height() as usize],
        &rgba,
    )
}

impl ScreenView {
    /// Creates a view with no texture yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves space for the screen and returns `(rect, scale)`.
    ///
    /// Called before input is sampled so pointer coordinates can be mapped
    /// against the rectangle the screen will be painted into.
    pub fn allocate(&self, ui: &mut egui::Ui, screen: &Framebuffer) -> (egui::Rect, f32) {
        let scale = integer_scale(ui.available_size(), (screen.width(), screen.height()));
        let size = egui::vec2(screen.width() as f32 * scale, screen.height() as f32 * scale);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        (rect, scale)
    }

    /// Uploads the current frame and paints it into `rect`.
    pub fn paint(&mut self, ui: &egui::Ui, rect: egui::Rect, screen: &Framebuffer) {
        let image = to_color_image(screen);
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ui.ctx().load_texture("pixed-screen", image, egui::TextureOptions::NEAREST));
            }
        }
        let Some(texture) = &self.texture else {
            return;
        };

        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpixed::Canvas;

    #[test]
    fn test_integer_scale() {
        assert_eq!(integer_scale(egui::vec2(1000.0, 700.0), (240, 160)), 4.0);
        assert_eq!(integer_scale(egui::vec2(100.0, 100.0), (240, 160)), 1.0);
    }

    #[test]
    fn test_color_image_resolves_palette() {
        let mut screen = Framebuffer::new(2, 1);
        screen.pset(1, 0, 7);
        let image = to_color_image(&screen);
        assert_eq!(image.size, [2, 1]);
        assert_eq!(image.pixels[0], color_of(0));
        assert_eq!(image.pixels[1], color_of(7));
    }
}
