mod canvas;
mod raster;
mod surface;

pub use canvas::ImageSurface;
pub use raster::render;
pub use surface::DrawingSurface;
