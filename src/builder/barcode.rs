use image::RgbImage;

use crate::common::{codec::Symbol, metadata::Dimensions, utils::BarcodeResult};
use crate::render::{render, DrawingSurface, ImageSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    symbol: Symbol,
    dims: Dimensions,
    density: u32,
}

impl Barcode {
    pub(crate) fn new(symbol: Symbol, dims: Dimensions, density: u32) -> Self {
        Self { symbol, dims, density }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn checksum(&self) -> usize {
        self.symbol.checksum()
    }

    pub fn runs(&self) -> BarcodeResult<Vec<u8>> {
        self.symbol.runs()
    }

    /// One entry per module, `true` for bar.
    pub fn modules(&self) -> BarcodeResult<Vec<bool>> {
        let runs = self.runs()?;
        let mut modules = Vec::with_capacity(runs.iter().map(|&r| r as usize).sum());
        for (i, &r) in runs.iter().enumerate() {
            modules.extend(std::iter::repeat(i & 1 == 0).take(r as usize));
        }
        Ok(modules)
    }

    /// Number of vertical lines drawn when rendering.
    pub fn bar_count(&self) -> BarcodeResult<usize> {
        Ok(self.runs()?.iter().step_by(2).map(|&r| r as usize).sum())
    }
}

// Rendering
//------------------------------------------------------------------------------

impl Barcode {
    pub fn render_on<S: DrawingSurface>(&self, surface: &mut S) -> BarcodeResult<()> {
        render(&self.symbol, self.dims, self.density, surface)
    }

    pub fn to_image(&self) -> BarcodeResult<RgbImage> {
        let mut surface = ImageSurface::create(self.dims.width(), self.dims.height());
        self.render_on(&mut surface)?;
        Ok(surface.into_image())
    }

    /// Text preview using half blocks, two modules per character.
    pub fn to_str(&self) -> BarcodeResult<String> {
        let modules = self.modules()?;
        let res: String = modules
            .chunks(2)
            .map(|pair| match pair {
                [true, true] => '█',
                [true, false] | [true] => '▌',
                [false, true] => '▐',
                _ => ' ',
            })
            .collect();
        Ok(res)
    }
}
