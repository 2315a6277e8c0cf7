//! Dec Big Num \
//! This crate provides:
//! - [`BigInt`]: signed decimal integers held in [`CAPACITY`] decimal digit slots,
//!   with checked and wrapping arithmetic, decimal rendering and parsing.
//! - `serde` support for [`BigInt`] behind the `serde` feature.

mod big_int;
mod big_int_fmt;
mod big_num_cache;
mod big_num_constants;
#[cfg(feature = "serde")]
mod big_num_serde;
mod digit_store;
mod error;

pub use big_int::{BigInt, Sign};
pub use big_num_constants::CAPACITY;
pub use error::{BigIntError, ParseBigIntError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        assert_eq!(a.to_string(), "10000000000000");
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "-11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
