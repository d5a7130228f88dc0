use std::fmt::{Display, Formatter};

use super::utils::{f64_to_u32, f64_trunc_to_u32, BarcodeError, BarcodeResult};

// Reference resolution the module width is expressed against
pub const DPI: f64 = 72.0;
pub const MODULES_PER_CHAR: usize = 11;
// Start, checksum & stop
pub const OVERHEAD_MODULES: usize = 35;
pub const HEIGHT_RATIO: f64 = 0.15;
pub const MIN_HEIGHT_INCHES: f64 = 0.7;

// Dimensions
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width grows by 11 modules per character on top of a fixed 35 module overhead. Height is
    /// 15% of the width in inches, never less than 0.7 inch.
    ///
    /// Width is rounded to the nearest pixel, height is truncated.
    pub fn compute(len: usize, density: u32) -> BarcodeResult<Self> {
        if density == 0 {
            return Err(BarcodeError::InvalidDensity);
        }

        let modules = (MODULES_PER_CHAR * len + OVERHEAD_MODULES) as f64;
        let width_in = modules * (density as f64 / DPI);
        let height_in = (width_in * HEIGHT_RATIO).max(MIN_HEIGHT_INCHES);

        Ok(Self { width: f64_to_u32(width_in * DPI)?, height: f64_trunc_to_u32(height_in * DPI)? })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Horizontal advance in pixels per module.
pub fn module_step(density: u32) -> BarcodeResult<u32> {
    f64_to_u32(density as f64 / DPI * 100.0)
}

#[cfg(test)]
mod dimensions_tests {
    use test_case::test_case;

    use super::{module_step, Dimensions};
    use crate::common::utils::BarcodeError;

    #[test_case(0, 1, 35, 50; "empty")]
    #[test_case(1, 1, 46, 50; "single char")]
    #[test_case(7, 2, 224, 50; "seven chars double density")]
    #[test_case(15, 2, 400, 59; "height above floor")]
    #[test_case(0, 12, 420, 62; "empty high density")]
    #[test_case(30, 1, 365, 54; "fractional height truncated")]
    fn test_compute(len: usize, density: u32, w: u32, h: u32) {
        assert_eq!(Dimensions::compute(len, density), Ok(Dimensions::new(w, h)));
    }

    #[test]
    fn test_zero_density() {
        assert_eq!(Dimensions::compute(5, 0), Err(BarcodeError::InvalidDensity));
    }

    #[test]
    fn test_width_monotonic() {
        let widths: Vec<_> = (0..50).map(|n| Dimensions::compute(n, 3).unwrap().width()).collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test_case(1, 1)]
    #[test_case(2, 3)]
    #[test_case(3, 4)]
    #[test_case(72, 100)]
    fn test_module_step(density: u32, step: u32) {
        assert_eq!(module_step(density), Ok(step));
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimensions::new(35, 50).to_string(), "35x50");
    }
}
