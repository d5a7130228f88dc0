/// Minimal raster capability the rasterizer draws through.
///
/// Implementations are expected to clip anything drawn outside their bounds.
pub trait DrawingSurface: Sized {
    type Color: Copy;

    fn create(width: u32, height: u32) -> Self;

    fn fill(&mut self, color: Self::Color);

    fn set_stroke_thickness(&mut self, thickness: u32);

    fn allocate_color(&mut self, r: u8, g: u8, b: u8) -> Self::Color;

    /// Draws a vertical line at `x` spanning `y0..=y1`, using the current stroke thickness.
    fn draw_vertical_line(&mut self, x: u32, y0: u32, y1: u32, color: Self::Color);
}
