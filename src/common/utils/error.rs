use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BarcodeError {
    // Encoder
    InvalidCharacter(char, usize),
    InvalidDensity,

    // Internal
    PatternIndexOutOfRange(usize),
    CastingFailed,
}

impl Display for BarcodeError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            // Encoder
            Self::InvalidCharacter(c, pos) => {
                write!(f, "Invalid character {c:?} at position {pos}, expected ASCII 32-126")
            }
            Self::InvalidDensity => f.write_str("Invalid density, expected a positive value"),

            // Internal
            Self::PatternIndexOutOfRange(idx) => write!(f, "Pattern index {idx} out of range"),
            Self::CastingFailed => f.write_str("Numeric cast failed"),
        }
    }
}

impl std::error::Error for BarcodeError {}

pub type BarcodeResult<T> = Result<T, BarcodeError>;

#[cfg(test)]
mod error_tests {
    use super::BarcodeError;

    #[test]
    fn test_display() {
        let err = BarcodeError::InvalidCharacter('\u{7f}', 3);
        assert_eq!(err.to_string(), "Invalid character '\\u{7f}' at position 3, expected ASCII 32-126");
        assert_eq!(BarcodeError::PatternIndexOutOfRange(107).to_string(), "Pattern index 107 out of range");
    }
}
