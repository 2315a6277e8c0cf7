//! # BigInt
//! Signed decimal integers held in a fixed number of digit slots.
//! Range from `-(10^CAPACITY - 1)` to `10^CAPACITY - 1`.
//!
//! The `checked_*` methods report a result that does not fit with
//! [`BigIntError::ArithmeticOverflow`]. The `wrapping_*` methods discard the
//! lost carry instead. The operators panic where `checked_*` would fail.
//! # Example
//! ```
//! use dec_big_num::BigInt;
//!
//! let a = BigInt::from(10_000_000_000_000_i64);
//! let b: BigInt = "-900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a - &b).to_string(), "10900000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "-11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! ```

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};

use tracing::{event, Level};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_store::{self, DigitStore};
use crate::error::BigIntError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    /// Zero is always positive.
    Positive,
}

impl Sign {
    pub fn signum(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }

    fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    digits: DigitStore,
}

// Construction
impl BigInt {
    pub const ZERO: BigInt = BigInt::from_parts(Sign::Positive, DigitStore::ZERO);
    pub const ONE: BigInt = BigInt::from_parts(Sign::Positive, DigitStore::ONE);
    /// `10^CAPACITY - 1`
    pub const MAX: BigInt = BigInt::from_parts(Sign::Positive, DigitStore::MAX);
    /// `-(10^CAPACITY - 1)`
    pub const MIN: BigInt = BigInt::from_parts(Sign::Negative, DigitStore::MAX);

    pub fn new() -> BigInt {
        BigInt::ZERO
    }

    /// Caller guarantees that a zero magnitude comes with `Sign::Positive`.
    pub(crate) const fn from_parts(sign: Sign, digits: DigitStore) -> BigInt {
        BigInt { sign, digits }
    }

    /// Builds a value, forcing the sign of zero to positive.
    pub(crate) fn normalized(sign: Sign, digits: DigitStore) -> BigInt {
        let sign = if digits.is_zero() { Sign::Positive } else { sign };
        BigInt { sign, digits }
    }

    fn value_of(val: u128, sign: Sign) -> BigInt {
        if val == 0 {
            BigInt::ZERO
        } else if val <= MAX_CONSTANT as u128 {
            match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            }
        } else {
            BigInt::from_parts(sign, DigitStore::from_u128(val))
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::ZERO
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

// The magnitude is taken with `unsigned_abs`, so the most negative
// value of each type converts without overflow.
macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInt::value_of(val.unsigned_abs() as u128, sign)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, usize, u128);
impl_signed_to_big_int!(i8, i16, i32, i64, isize, i128);

macro_rules! impl_big_int_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $u {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<$u, BigIntError> {
            let out_of_range = || BigIntError::ArgumentOutOfRange { target: stringify!($u) };
            if val.is_negative() {
                return Err(out_of_range());
            }
            let mag = val.digits.to_u128().ok_or_else(out_of_range)?;
            <$u>::try_from(mag).map_err(|_| out_of_range())
        }
    }

    impl TryFrom<BigInt> for $u {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<$u, BigIntError> {
            <$u>::try_from(&val)
        }
    }
    )*
    };
}

macro_rules! impl_big_int_to_signed {
    ($($i: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $i {
        type Error = BigIntError;

        fn try_from(val: &BigInt) -> Result<$i, BigIntError> {
            let out_of_range = || BigIntError::ArgumentOutOfRange { target: stringify!($i) };
            let mag = val.digits.to_u128().ok_or_else(out_of_range)?;
            if val.is_negative() {
                if mag > <$i>::MAX as u128 + 1 {
                    return Err(out_of_range());
                }
                Ok((mag as i128).wrapping_neg() as $i)
            } else {
                <$i>::try_from(mag).map_err(|_| out_of_range())
            }
        }
    }

    impl TryFrom<BigInt> for $i {
        type Error = BigIntError;

        fn try_from(val: BigInt) -> Result<$i, BigIntError> {
            <$i>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_unsigned!(u8, u16, u32, u64, usize, u128);
impl_big_int_to_signed!(i8, i16, i32, i64, isize, i128);

// Read-only access
impl BigInt {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The decimal digit at `index`, where index 0 is the least significant.
    /// Indices at or past `CAPACITY` read as 0.
    pub fn digit(&self, index: usize) -> u8 {
        self.digits.get(index)
    }

    /// Number of digits from the most significant non-zero one down to
    /// index 0. Zero has no significant digits.
    pub fn significant_digits(&self) -> usize {
        self.digits.significant_len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else {
            self.sign.signum()
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_parts(Sign::Positive, self.digits.clone())
    }
}

// Comparison
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = digit_store::compare_mag(&self.digits, &other.digits);
        match self.sign {
            Sign::Positive => ord,
            // The larger magnitude is the more negative value.
            Sign::Negative => ord.reverse(),
        }
    }
}

// Arithmetic on sign-and-magnitude records
impl BigInt {
    /// Adds two sign-and-magnitude records. The flag reports a carry lost
    /// out of the most significant slot; it can only be set when the signs
    /// agree.
    fn add_parts(l_sign: Sign, l: &DigitStore, r_sign: Sign, r: &DigitStore) -> (BigInt, bool) {
        if l_sign == r_sign {
            let (mag, carry) = digit_store::add_mag(l, r);
            return (BigInt::normalized(l_sign, mag), carry);
        }

        match digit_store::compare_mag(l, r) {
            Ordering::Less => (BigInt::normalized(r_sign, digit_store::sub_mag(r, l)), false),
            Ordering::Equal => (BigInt::ZERO, false),
            Ordering::Greater => (BigInt::normalized(l_sign, digit_store::sub_mag(l, r)), false),
        }
    }

    fn mul_parts(l_sign: Sign, l: &DigitStore, r_sign: Sign, r: &DigitStore) -> (BigInt, bool) {
        let (mag, overflow) = digit_store::mul_mag(l, r);
        (BigInt::normalized(l_sign.product(r_sign), mag), overflow)
    }

    fn overflow(operation: &'static str) -> BigIntError {
        event!(
            Level::DEBUG,
            operation,
            capacity = CAPACITY,
            "result does not fit in the digit capacity"
        );
        BigIntError::ArithmeticOverflow { capacity: CAPACITY }
    }

    fn truncated(operation: &'static str, (value, lost): (BigInt, bool)) -> BigInt {
        if lost {
            event!(
                Level::TRACE,
                operation,
                capacity = CAPACITY,
                "discarding digits beyond the capacity"
            );
        }
        value
    }
}

// Checked arithmetic
impl BigInt {
    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        match BigInt::add_parts(self.sign, &self.digits, rhs.sign, &rhs.digits) {
            (sum, false) => Ok(sum),
            (_, true) => Err(BigInt::overflow("add")),
        }
    }

    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        match BigInt::add_parts(self.sign, &self.digits, -rhs.sign, &rhs.digits) {
            (diff, false) => Ok(diff),
            (_, true) => Err(BigInt::overflow("subtract")),
        }
    }

    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        match BigInt::mul_parts(self.sign, &self.digits, rhs.sign, &rhs.digits) {
            (product, false) => Ok(product),
            (_, true) => Err(BigInt::overflow("multiply")),
        }
    }

    /// Quotient truncated toward zero and remainder with the sign of the
    /// dividend, so `self == q * rhs + r`.
    pub fn checked_div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if rhs.is_zero() {
            event!(Level::DEBUG, dividend = %self, "division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = digit_store::div_rem_mag(&self.digits, &rhs.digits);
        Ok((
            BigInt::normalized(self.sign.product(rhs.sign), q),
            BigInt::normalized(self.sign, r),
        ))
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// Square-and-multiply.
    pub fn checked_pow(&self, mut exp: u32) -> Result<BigInt, BigIntError> {
        let mut base = self.clone();
        let mut acc = BigInt::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.checked_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(acc)
    }
}

// Wrapping arithmetic, keeping the low CAPACITY digits of the magnitude
impl BigInt {
    pub fn wrapping_add(&self, rhs: &BigInt) -> BigInt {
        BigInt::truncated(
            "add",
            BigInt::add_parts(self.sign, &self.digits, rhs.sign, &rhs.digits),
        )
    }

    pub fn wrapping_sub(&self, rhs: &BigInt) -> BigInt {
        BigInt::truncated(
            "subtract",
            BigInt::add_parts(self.sign, &self.digits, -rhs.sign, &rhs.digits),
        )
    }

    pub fn wrapping_mul(&self, rhs: &BigInt) -> BigInt {
        BigInt::truncated(
            "multiply",
            BigInt::mul_parts(self.sign, &self.digits, rhs.sign, &rhs.digits),
        )
    }
}

// In-place arithmetic. On error `self` is left unchanged.
impl BigInt {
    pub fn try_add_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    pub fn try_sub_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    pub fn try_mul_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    pub fn try_div_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    pub fn try_rem_assign(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        *self = self.checked_rem(rhs)?;
        Ok(())
    }
}

macro_rules! impl_assign_op {
    ($Trait: ident, $method: ident, $try_method: ident, $what: expr) => {
        impl $Trait<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                if let Err(e) = self.$try_method(rhs) {
                    panic!("attempt to {}: {}", $what, e);
                }
            }
        }

        impl $Trait for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                <BigInt as $Trait<&BigInt>>::$method(self, &rhs);
            }
        }
    };
}

// The binary operators copy the left operand and apply the compound one.
macro_rules! impl_binary_op {
    ($Trait: ident, $method: ident, $AssignTrait: ident, $assign_method: ident) => {
        impl $Trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                let mut temp = self.clone();
                <BigInt as $AssignTrait<&BigInt>>::$assign_method(&mut temp, rhs);
                temp
            }
        }

        impl $Trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: &BigInt) -> Self::Output {
                <BigInt as $AssignTrait<&BigInt>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $Trait for BigInt {
            type Output = BigInt;

            fn $method(mut self, rhs: BigInt) -> Self::Output {
                <BigInt as $AssignTrait<&BigInt>>::$assign_method(&mut self, &rhs);
                self
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, try_add_assign, "add with overflow");
impl_assign_op!(SubAssign, sub_assign, try_sub_assign, "subtract with overflow");
impl_assign_op!(MulAssign, mul_assign, try_mul_assign, "multiply with overflow");
impl_assign_op!(DivAssign, div_assign, try_div_assign, "divide");
impl_assign_op!(RemAssign, rem_assign, try_rem_assign, "calculate the remainder");

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);
impl_binary_op!(Rem, rem, RemAssign, rem_assign);

// Negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, digits } = self;
        BigInt::normalized(-sign, digits)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(0);
    assert_eq!(big, BigInt::new());
    assert_eq!(big.sign(), Sign::Positive);
    assert_eq!(big.significant_digits(), 0);

    let big = BigInt::from(-100_i16);
    assert_eq!(big.sign(), Sign::Negative);
    assert_eq!(big.significant_digits(), 3);
    assert_eq!((big.digit(2), big.digit(1), big.digit(0)), (1, 0, 0));

    let big = BigInt::from(113132_u64);
    assert_eq!(big.digit(0), 2);
    assert_eq!(big.digit(5), 1);
    assert_eq!(big.digit(6), 0);
    assert_eq!(big.digit(CAPACITY), 0);

    // Small values come from the cache.
    assert_eq!(BigInt::from(-7_i8), NEG_CACHE[7]);
    assert_eq!(BigInt::from(16_u8), POS_CACHE[16]);
}

#[test]
fn test_from_native_extremes() {
    assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
}

#[test]
fn test_try_into_native() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(i64::try_from(&BigInt::from(i64::MAX)), Ok(i64::MAX));
    assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(u8::try_from(BigInt::from(255)), Ok(255_u8));
    assert_eq!(
        u8::try_from(BigInt::from(256)),
        Err(BigIntError::ArgumentOutOfRange { target: "u8" })
    );
    assert_eq!(
        u32::try_from(BigInt::from(-1)),
        Err(BigIntError::ArgumentOutOfRange { target: "u32" })
    );
    assert_eq!(
        i8::try_from(BigInt::from(-129)),
        Err(BigIntError::ArgumentOutOfRange { target: "i8" })
    );
    assert_eq!(
        u128::try_from(&BigInt::MAX),
        Err(BigIntError::ArgumentOutOfRange { target: "u128" })
    );
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = [-1000, -999, -10, -1, 0, 1, 9, 10, 999, 1000]
        .iter()
        .map(|&v| BigInt::from(v))
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(a == b, i == j);
        }
    }
    assert!(BigInt::MIN < BigInt::from(i128::MIN));
    assert!(BigInt::MAX > BigInt::from(u128::MAX));
    assert!(BigInt::from(-5) <= BigInt::from(-5));
    assert!(BigInt::from(-5) >= BigInt::from(-5));
    assert!(BigInt::from(-5) != BigInt::from(5));
}

#[test]
fn test_add() {
    assert_eq!(BigInt::from(123) + BigInt::from(456), BigInt::from(579));
    assert_eq!(BigInt::from(-5) + BigInt::from(-7), BigInt::from(-12));
    assert_eq!(BigInt::from(10) + BigInt::from(-3), BigInt::from(7));
    assert_eq!(BigInt::from(3) + BigInt::from(-10), BigInt::from(-7));

    let zero = BigInt::from(5) + BigInt::from(-5);
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::Positive);
    assert_eq!(zero, BigInt::ZERO);

    let a = BigInt::from(-42);
    assert_eq!(&a + &BigInt::ZERO, a);
    assert_eq!(&BigInt::ZERO + &a, a);
}

#[test]
fn test_add_overflow() {
    assert_eq!(
        BigInt::MAX.checked_add(&BigInt::ONE),
        Err(BigIntError::ArithmeticOverflow { capacity: CAPACITY })
    );
    assert_eq!(
        BigInt::MIN.checked_add(&BigInt::from(-1)),
        Err(BigIntError::ArithmeticOverflow { capacity: CAPACITY })
    );
    // Mixed signs never overflow.
    assert_eq!(BigInt::MAX.checked_add(&BigInt::MIN), Ok(BigInt::ZERO));

    assert_eq!(BigInt::MAX.wrapping_add(&BigInt::ONE), BigInt::ZERO);
    let wrapped = BigInt::MIN.wrapping_add(&BigInt::from(-1));
    assert_eq!(wrapped, BigInt::ZERO);
    assert_eq!(wrapped.sign(), Sign::Positive);
    assert_eq!(BigInt::MAX.wrapping_add(&BigInt::from(2)), BigInt::ONE);
}

#[test]
fn test_try_assign_leaves_receiver_on_error() {
    let mut a = BigInt::MAX;
    assert!(a.try_add_assign(&BigInt::ONE).is_err());
    assert_eq!(a, BigInt::MAX);

    assert!(a.try_mul_assign(&BigInt::from(2)).is_err());
    assert_eq!(a, BigInt::MAX);

    assert_eq!(a.try_div_assign(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
    assert_eq!(a.try_rem_assign(&BigInt::ZERO), Err(BigIntError::DivisionByZero));
    assert_eq!(a, BigInt::MAX);

    a.try_sub_assign(&BigInt::ONE).unwrap();
    a.try_add_assign(&BigInt::ONE).unwrap();
    assert_eq!(a, BigInt::MAX);
}

#[test]
#[should_panic(expected = "attempt to add with overflow")]
fn test_add_assign_panics_on_overflow() {
    let mut a = BigInt::MAX;
    a += BigInt::ONE;
}

#[test]
#[should_panic(expected = "attempt to divide: division by zero")]
fn test_div_panics_on_zero() {
    let _ = BigInt::from(1) / BigInt::ZERO;
}

#[test]
fn test_sub() {
    assert_eq!(BigInt::from(10) - BigInt::from(3), BigInt::from(7));
    assert_eq!(BigInt::from(3) - BigInt::from(10), BigInt::from(-7));
    assert_eq!(BigInt::from(-3) - BigInt::from(-10), BigInt::from(7));
    assert_eq!(BigInt::from(-3) - BigInt::from(10), BigInt::from(-13));
    assert_eq!(BigInt::ZERO - BigInt::ZERO, BigInt::ZERO);
    assert_eq!(BigInt::ZERO - BigInt::from(4), BigInt::from(-4));
    assert_eq!(BigInt::from(1000) - BigInt::from(1), BigInt::from(999));
    assert_eq!(
        BigInt::MIN.checked_sub(&BigInt::ONE),
        Err(BigIntError::ArithmeticOverflow { capacity: CAPACITY })
    );
    assert_eq!(BigInt::MIN.wrapping_sub(&BigInt::ONE), BigInt::ZERO);
}

#[test]
fn test_mul() {
    assert_eq!(BigInt::from(12) * BigInt::from(-34), BigInt::from(-408));
    assert_eq!(BigInt::from(-12) * BigInt::from(-34), BigInt::from(408));
    let zero = BigInt::from(-12) * BigInt::ZERO;
    assert_eq!(zero, BigInt::ZERO);
    assert_eq!(zero.sign(), Sign::Positive);

    let a = BigInt::from(u64::MAX);
    assert_eq!(&a * &a, BigInt::from(u64::MAX as u128 * u64::MAX as u128));

    assert_eq!(
        BigInt::MAX.checked_mul(&BigInt::from(2)),
        Err(BigIntError::ArithmeticOverflow { capacity: CAPACITY })
    );
    // 2 * (10^N - 1) keeps its low digits 99..98 when wrapped.
    assert_eq!(
        BigInt::MAX.wrapping_mul(&BigInt::from(2)),
        BigInt::MAX.wrapping_sub(&BigInt::ONE)
    );
}

#[test]
fn test_pow() {
    let ten = BigInt::from(10);
    let big = ten.checked_pow(CAPACITY as u32 - 1).unwrap();
    assert_eq!(big.significant_digits(), CAPACITY);
    assert_eq!(big.digit(CAPACITY - 1), 1);
    assert_eq!(
        ten.checked_pow(CAPACITY as u32),
        Err(BigIntError::ArithmeticOverflow { capacity: CAPACITY })
    );
    assert_eq!(BigInt::from(-2).checked_pow(5), Ok(BigInt::from(-32)));
    assert_eq!(BigInt::from(7).checked_pow(0), Ok(BigInt::ONE));
}

#[test]
fn test_div() {
    assert_eq!(BigInt::from(120) / BigInt::from(13), BigInt::from(9));
    assert_eq!(BigInt::from(-120) / BigInt::from(13), BigInt::from(-9));
    assert_eq!(BigInt::from(120) / BigInt::from(-13), BigInt::from(-9));
    assert_eq!(BigInt::from(-120) / BigInt::from(-13), BigInt::from(9));
    assert_eq!(BigInt::from(-5) / BigInt::from(13), BigInt::ZERO);
    assert_eq!((BigInt::from(-5) / BigInt::from(13)).sign(), Sign::Positive);
    assert_eq!(BigInt::MAX / BigInt::MAX, BigInt::ONE);

    for dividend in [-3, 0, 3] {
        assert_eq!(
            BigInt::from(dividend).checked_div(&BigInt::ZERO),
            Err(BigIntError::DivisionByZero)
        );
    }
}

#[test]
fn test_rem() {
    assert_eq!(BigInt::from(12) % BigInt::from(8), BigInt::from(4));
    assert_eq!(BigInt::from(-12) % BigInt::from(8), BigInt::from(-4));
    assert_eq!(BigInt::from(12) % BigInt::from(-8), BigInt::from(4));
    assert_eq!(BigInt::from(-16) % BigInt::from(8), BigInt::ZERO);
    assert_eq!(
        BigInt::from(10_000_000_000_000_000_i64) % BigInt::from(10),
        BigInt::ZERO
    );
    assert_eq!(
        BigInt::from(7).checked_rem(&BigInt::ZERO),
        Err(BigIntError::DivisionByZero)
    );
}

#[test]
fn test_neg_and_abs() {
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-&BigInt::from(-5), BigInt::from(5));
    assert_eq!((-BigInt::ZERO).sign(), Sign::Positive);
    assert_eq!(BigInt::from(-5).abs(), BigInt::from(5));
    assert_eq!(BigInt::from(-5).signum(), -1);
    assert_eq!(BigInt::ZERO.signum(), 0);
    assert_eq!(BigInt::from(5).signum(), 1);
    assert_eq!(-BigInt::MAX, BigInt::MIN);
}

#[test]
fn test_copies_are_independent() {
    let a = BigInt::from(41);
    let mut b = a.clone();
    b += BigInt::ONE;
    assert_eq!(a, BigInt::from(41));
    assert_eq!(b, BigInt::from(42));
}
