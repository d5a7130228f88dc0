use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::DrawingSurface;

// Surface backed by an RGB image buffer
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ImageSurface {
    img: RgbImage,
    thickness: u32,
}

impl ImageSurface {
    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }
}

impl DrawingSurface for ImageSurface {
    type Color = Rgb<u8>;

    fn create(width: u32, height: u32) -> Self {
        Self { img: RgbImage::new(width, height), thickness: 1 }
    }

    fn fill(&mut self, color: Self::Color) {
        self.img.pixels_mut().for_each(|px| *px = color);
    }

    fn set_stroke_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.max(1);
    }

    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Self::Color {
        Rgb([r, g, b])
    }

    // Thick strokes are centred on x
    fn draw_vertical_line(&mut self, x: u32, y0: u32, y1: u32, color: Self::Color) {
        let half = self.thickness / 2;
        if x.saturating_sub(half) >= self.img.width() {
            return;
        }

        let (top, bottom) = (y0.min(y1), y0.max(y1).min(self.img.height().saturating_sub(1)));
        if top > bottom {
            return;
        }

        let (Ok(left), Ok(top_i)) = (i32::try_from(x), i32::try_from(top)) else {
            return;
        };
        let rect = Rect::at(left - half as i32, top_i).of_size(self.thickness, bottom - top + 1);
        draw_filled_rect_mut(&mut self.img, rect, color);
    }
}
