use num_traits::ToPrimitive;

use super::{BarcodeError, BarcodeResult};

/// Rounds to the nearest integer, half away from zero.
pub fn f64_to_u32(num: f64) -> BarcodeResult<u32> {
    num.round().to_u32().ok_or(BarcodeError::CastingFailed)
}

/// Drops the fractional part.
pub fn f64_trunc_to_u32(num: f64) -> BarcodeResult<u32> {
    num.trunc().to_u32().ok_or(BarcodeError::CastingFailed)
}
