use log::trace;

use super::{
    table::{lookup, Pattern, START_B, STOP},
    utils::{BarcodeError, BarcodeResult},
};

const CHECKSUM_MODULUS: usize = 103;
const ASCII_OFFSET: u32 = 32;
const MAX_DATA_VALUE: u32 = 94;

// Symbol
//------------------------------------------------------------------------------

/// Ordered pattern indices of an encoded barcode: start, data, checksum and stop.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Symbol(Vec<usize>);

#[allow(clippy::len_without_is_empty)]
impl Symbol {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Start, checksum & stop are always present
    pub fn has_data(&self) -> bool {
        self.0.len() > 3
    }

    pub fn data(&self) -> &[usize] {
        &self.0[1..self.0.len() - 2]
    }

    pub fn checksum(&self) -> usize {
        self.0[self.0.len() - 2]
    }

    pub fn patterns(&self) -> impl Iterator<Item = BarcodeResult<Pattern>> + '_ {
        self.0.iter().map(|&i| lookup(i))
    }

    /// Flattened run widths of all patterns. Even positions are bars.
    pub fn runs(&self) -> BarcodeResult<Vec<u8>> {
        let mut runs = Vec::with_capacity(self.0.len() * 6 + 1);
        for p in self.patterns() {
            runs.extend_from_slice(p?.runs());
        }
        Ok(runs)
    }
}

// Encoder
//------------------------------------------------------------------------------

pub fn char_value(c: char, pos: usize) -> BarcodeResult<usize> {
    match (c as u32).checked_sub(ASCII_OFFSET) {
        Some(v) if v <= MAX_DATA_VALUE => Ok(v as usize),
        _ => Err(BarcodeError::InvalidCharacter(c, pos)),
    }
}

pub fn encode(code: &str) -> BarcodeResult<Symbol> {
    // Kept reduced so long inputs cannot overflow
    let mut checksum = START_B % CHECKSUM_MODULUS;
    let mut symbol = Vec::with_capacity(code.len() + 3);
    symbol.push(START_B);

    for (i, c) in code.chars().enumerate() {
        let v = char_value(c, i)?;
        checksum = (checksum + v * ((i + 1) % CHECKSUM_MODULUS)) % CHECKSUM_MODULUS;
        symbol.push(v);
    }

    trace!("Check character {checksum}");

    symbol.push(checksum);
    symbol.push(STOP);
    Ok(Symbol(symbol))
}
