use log::debug;

use super::DrawingSurface;
use crate::common::{
    codec::Symbol,
    metadata::{module_step, Dimensions},
    utils::{BarcodeError, BarcodeResult},
};

/// Draws `symbol` onto `surface` as full height vertical bars.
///
/// Runs are walked left to right, advancing one module step per unit of run width. Runs at
/// even positions are bars, odd positions are spaces.
pub fn render<S: DrawingSurface>(
    symbol: &Symbol,
    dims: Dimensions,
    density: u32,
    surface: &mut S,
) -> BarcodeResult<()> {
    if density == 0 {
        return Err(BarcodeError::InvalidDensity);
    }

    let runs = symbol.runs()?;
    let inc = module_step(density)?;

    let white = surface.allocate_color(255, 255, 255);
    let black = surface.allocate_color(0, 0, 0);
    surface.fill(white);
    surface.set_stroke_thickness(density);

    debug!("Drawing {} runs, step {inc}px, surface {dims}", runs.len());
    let mut x = 0u32;
    for (i, &val) in runs.iter().enumerate() {
        for _ in 0..val {
            if i & 1 == 0 {
                surface.draw_vertical_line(x, 0, dims.height(), black);
            }
            x = x.saturating_add(inc);
        }
    }

    Ok(())
}
