//! Error types for arithmetic, conversion and parsing.

use thiserror::Error;

/// Failure of a `BigInt` operation. A failing operation never modifies
/// its operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    #[error("result does not fit in {capacity} decimal digits")]
    ArithmeticOverflow { capacity: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("value is out of range for {target}")]
    ArgumentOutOfRange { target: &'static str },

    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
}

/// Failure to read a `BigInt` from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("no digits to parse")]
    Empty,

    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },

    #[error("{digits} significant digits exceed the capacity of {capacity}")]
    TooManyDigits { digits: usize, capacity: usize },
}
