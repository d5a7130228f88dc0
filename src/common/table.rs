use super::utils::{BarcodeError, BarcodeResult};

pub const START_B: usize = 103;
pub const STOP: usize = 106;
pub const TABLE_LEN: usize = 107;

// Pattern
//------------------------------------------------------------------------------

/// Bar/space run widths of a single symbol character, in modules. Runs alternate starting
/// with a bar, so even positions are bars and odd positions are spaces.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pattern(&'static [u8]);

impl Pattern {
    pub fn runs(&self) -> &'static [u8] {
        self.0
    }

    /// Total width in modules.
    pub fn modules(&self) -> usize {
        self.0.iter().map(|&r| r as usize).sum()
    }

    pub fn bars(&self) -> impl Iterator<Item = u8> + 'static {
        self.0.iter().step_by(2).copied()
    }
}

pub fn lookup(index: usize) -> BarcodeResult<Pattern> {
    PATTERNS.get(index).copied().ok_or(BarcodeError::PatternIndexOutOfRange(index))
}


// Global constants
//------------------------------------------------------------------------------

pub static PATTERNS: [Pattern; TABLE_LEN] = [
    Pattern(&[2, 1, 2, 2, 2, 2]),
    Pattern(&[2, 2, 2, 1, 2, 2]),
    Pattern(&[2, 2, 2, 2, 2, 1]),
    Pattern(&[1, 2, 1, 2, 2, 3]),
    Pattern(&[1, 2, 1, 3, 2, 2]),
    Pattern(&[1, 3, 1, 2, 2, 2]),
    Pattern(&[1, 2, 2, 2, 1, 3]),
    Pattern(&[1, 2, 2, 3, 1, 2]),
    Pattern(&[1, 3, 2, 2, 1, 2]),
    Pattern(&[2, 2, 1, 2, 1, 3]),
    Pattern(&[2, 2, 1, 3, 1, 2]),
    Pattern(&[2, 3, 1, 2, 1, 2]),
    Pattern(&[1, 1, 2, 2, 3, 2]),
    Pattern(&[1, 2, 2, 1, 3, 2]),
    Pattern(&[1, 2, 2, 2, 3, 1]),
    Pattern(&[1, 1, 3, 2, 2, 2]),
    Pattern(&[1, 2, 3, 1, 2, 2]),
    Pattern(&[1, 2, 3, 2, 2, 1]),
    Pattern(&[2, 2, 3, 2, 1, 1]),
    Pattern(&[2, 2, 1, 1, 3, 2]),
    Pattern(&[2, 2, 1, 2, 3, 1]),
    Pattern(&[2, 1, 3, 2, 1, 2]),
    Pattern(&[2, 2, 3, 1, 1, 2]),
    Pattern(&[3, 1, 2, 1, 3, 1]),
    Pattern(&[3, 1, 1, 2, 2, 2]),
    Pattern(&[3, 2, 1, 1, 2, 2]),
    Pattern(&[3, 2, 1, 2, 2, 1]),
    Pattern(&[3, 1, 2, 2, 1, 2]),
    Pattern(&[3, 2, 2, 1, 1, 2]),
    Pattern(&[3, 2, 2, 2, 1, 1]),
    Pattern(&[2, 1, 2, 1, 2, 3]),
    Pattern(&[2, 1, 2, 3, 2, 1]),
    Pattern(&[2, 3, 2, 1, 2, 1]),
    Pattern(&[1, 1, 1, 3, 2, 3]),
    Pattern(&[1, 3, 1, 1, 2, 3]),
    Pattern(&[1, 3, 1, 3, 2, 1]),
    Pattern(&[1, 1, 2, 3, 1, 3]),
    Pattern(&[1, 3, 2, 1, 1, 3]),
    Pattern(&[1, 3, 2, 3, 1, 1]),
    Pattern(&[2, 1, 1, 3, 1, 3]),
    Pattern(&[2, 3, 1, 1, 1, 3]),
    Pattern(&[2, 3, 1, 3, 1, 1]),
    Pattern(&[1, 1, 2, 1, 3, 3]),
    Pattern(&[1, 1, 2, 3, 3, 1]),
    Pattern(&[1, 3, 2, 1, 3, 1]),
    Pattern(&[1, 1, 3, 1, 2, 3]),
    Pattern(&[1, 1, 3, 3, 2, 1]),
    Pattern(&[1, 3, 3, 1, 2, 1]),
    Pattern(&[3, 1, 3, 1, 2, 1]),
    Pattern(&[2, 1, 1, 3, 3, 1]),
    Pattern(&[2, 3, 1, 1, 3, 1]),
    Pattern(&[2, 1, 3, 1, 1, 3]),
    Pattern(&[2, 1, 3, 3, 1, 1]),
    Pattern(&[2, 1, 3, 1, 3, 1]),
    Pattern(&[3, 1, 1, 1, 2, 3]),
    Pattern(&[3, 1, 1, 3, 2, 1]),
    Pattern(&[3, 3, 1, 1, 2, 1]),
    Pattern(&[3, 1, 2, 1, 1, 3]),
    Pattern(&[3, 1, 2, 3, 1, 1]),
    Pattern(&[3, 3, 2, 1, 1, 1]),
    Pattern(&[3, 1, 4, 1, 1, 1]),
    Pattern(&[2, 2, 1, 4, 1, 1]),
    Pattern(&[4, 3, 1, 1, 1, 1]),
    Pattern(&[1, 1, 1, 2, 2, 4]),
    Pattern(&[1, 1, 1, 4, 2, 2]),
    Pattern(&[1, 2, 1, 1, 2, 4]),
    Pattern(&[1, 2, 1, 4, 2, 1]),
    Pattern(&[1, 4, 1, 1, 2, 2]),
    Pattern(&[1, 4, 1, 2, 2, 1]),
    Pattern(&[1, 1, 2, 2, 1, 4]),
    Pattern(&[1, 1, 2, 4, 1, 2]),
    Pattern(&[1, 2, 2, 1, 1, 4]),
    Pattern(&[1, 2, 2, 4, 1, 1]),
    Pattern(&[1, 4, 2, 1, 1, 2]),
    Pattern(&[1, 4, 2, 2, 1, 1]),
    Pattern(&[2, 4, 1, 2, 1, 1]),
    Pattern(&[2, 2, 1, 1, 1, 4]),
    Pattern(&[4, 1, 3, 1, 1, 1]),
    Pattern(&[2, 4, 1, 1, 1, 2]),
    Pattern(&[1, 3, 4, 1, 1, 1]),
    Pattern(&[1, 1, 1, 2, 4, 2]),
    Pattern(&[1, 2, 1, 1, 4, 2]),
    Pattern(&[1, 2, 1, 2, 4, 1]),
    Pattern(&[1, 1, 4, 2, 1, 2]),
    Pattern(&[1, 2, 4, 1, 1, 2]),
    Pattern(&[1, 2, 4, 2, 1, 1]),
    Pattern(&[4, 1, 1, 2, 1, 2]),
    Pattern(&[4, 2, 1, 1, 1, 2]),
    Pattern(&[4, 2, 1, 2, 1, 1]),
    Pattern(&[2, 1, 2, 1, 4, 1]),
    Pattern(&[2, 1, 4, 1, 2, 1]),
    Pattern(&[4, 1, 2, 1, 2, 1]),
    Pattern(&[1, 1, 1, 1, 4, 3]),
    Pattern(&[1, 1, 1, 3, 4, 1]),
    Pattern(&[1, 3, 1, 1, 4, 1]),
    Pattern(&[1, 1, 4, 1, 1, 3]),
    Pattern(&[1, 1, 4, 3, 1, 1]),
    Pattern(&[4, 1, 1, 1, 1, 3]),
    Pattern(&[4, 1, 1, 3, 1, 1]),
    Pattern(&[1, 1, 3, 1, 4, 1]),
    Pattern(&[1, 1, 4, 1, 3, 1]),
    Pattern(&[3, 1, 1, 1, 4, 1]),
    Pattern(&[4, 1, 1, 1, 3, 1]),
    Pattern(&[2, 1, 1, 4, 1, 2]),
    Pattern(&[2, 1, 1, 2, 1, 4]),
    Pattern(&[2, 1, 1, 2, 3, 2]),
    Pattern(&[2, 3, 3, 1, 1, 1, 2]),
];
