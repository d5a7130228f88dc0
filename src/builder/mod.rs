mod barcode;

pub use barcode::Barcode;

use image::RgbImage;
use log::debug;

use crate::common::{
    codec::encode,
    metadata::Dimensions,
    utils::{BarcodeError, BarcodeResult},
};

pub const DEFAULT_DENSITY: u32 = 1;

pub struct Code128Builder<'a> {
    data: &'a str,
    density: u32,
}

impl<'a> Code128Builder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, density: DEFAULT_DENSITY }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn density(&mut self, density: u32) -> &mut Self {
        self.density = density;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Chars: {}, Density: {} }}", self.data.chars().count(), self.density)
    }
}


impl Code128Builder<'_> {
    /// Validates the configuration and encodes the data. Nothing is drawn until the barcode is
    /// rendered.
    pub fn build(&self) -> BarcodeResult<Barcode> {
        debug!("Generating Code128 {}...", self.metadata());
        if self.density == 0 {
            return Err(BarcodeError::InvalidDensity);
        }

        debug!("Encoding data...");
        let symbol = encode(self.data)?;

        debug!("Computing dimensions...");
        let dims = Dimensions::compute(symbol.data().len(), self.density)?;

        debug!("Barcode encoded: {} patterns, checksum {}, {dims}", symbol.len(), symbol.checksum());
        Ok(Barcode::new(symbol, dims, self.density))
    }
}

/// Encodes `code` and renders it to an RGB image, white background and black bars.
pub fn generate(code: &str, density: u32) -> BarcodeResult<RgbImage> {
    Code128Builder::new(code).density(density).build()?.to_image()
}
