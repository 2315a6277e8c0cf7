//! Fixed-capacity decimal digit storage and the magnitude algorithms
//! that work on it. Nothing outside this module indexes digits directly.

use std::cmp::Ordering;
use std::fmt;

use crate::big_num_constants::*;

const _: () = assert!(CAPACITY >= MAX_NATIVE_DIGITS);

/// `CAPACITY` decimal digits, `digits[0]` is the least significant one.
/// Every slot holds a value in `0..RADIX`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct DigitStore {
    digits: [u8; CAPACITY],
}

impl DigitStore {
    pub const ZERO: DigitStore = DigitStore { digits: [0; CAPACITY] };

    pub const ONE: DigitStore = {
        let mut digits = [0; CAPACITY];
        digits[0] = 1;
        DigitStore { digits }
    };

    /// All nines, i.e. `10^CAPACITY - 1`.
    pub const MAX: DigitStore = DigitStore { digits: [RADIX - 1; CAPACITY] };

    pub fn from_u128(mut val: u128) -> DigitStore {
        let mut store = DigitStore::ZERO;
        let mut i = 0;
        while val != 0 {
            store.digits[i] = (val % RADIX as u128) as u8;
            val /= RADIX as u128;
            i += 1;
        }
        store
    }

    /// Builds a store from digits given least significant first.
    /// The caller guarantees at most `CAPACITY` digits, each below `RADIX`.
    pub fn from_le_digits<I: IntoIterator<Item = u8>>(digits: I) -> DigitStore {
        let mut store = DigitStore::ZERO;
        for (slot, d) in store.digits.iter_mut().zip(digits) {
            debug_assert!(d < RADIX);
            *slot = d;
        }
        store
    }

    /// Digit at `index`; slots past the capacity read as zero.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.digits.get(index).copied().unwrap_or(0)
    }

    /// Index of the most significant non-zero digit plus one, 0 for zero.
    pub fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |pos| pos + 1)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// The magnitude as a native integer, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        let len = self.significant_len();
        if len > MAX_NATIVE_DIGITS {
            return None;
        }
        let mut val: u128 = 0;
        for i in (0..len).rev() {
            val = val
                .checked_mul(RADIX as u128)?
                .checked_add(self.digits[i] as u128)?;
        }
        Some(val)
    }
}

impl fmt::Debug for DigitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.significant_len().max(1);
        let digits: String = (0..len)
            .rev()
            .map(|i| DIGITS[self.digits[i] as usize])
            .collect();
        f.debug_tuple("DigitStore").field(&format_args!("{}", digits)).finish()
    }
}

/// Compares two digit slices from the most significant end. Slices of
/// different length compare as if the shorter were padded with zeros.
fn compare_slices(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return x.cmp(&y);
        }
    }
    Ordering::Equal
}

/// `big -= little` with borrow propagation. Requires `big >= little`.
fn sub_in_place(big: &mut [u8], little: &[u8]) {
    let mut borrow = 0u8;
    for (i, slot) in big.iter_mut().enumerate() {
        let subtrahend = little.get(i).copied().unwrap_or(0) + borrow;
        if *slot >= subtrahend {
            *slot -= subtrahend;
            borrow = 0;
        } else {
            *slot = *slot + RADIX - subtrahend;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
}

pub(crate) fn compare_mag(a: &DigitStore, b: &DigitStore) -> Ordering {
    compare_slices(&a.digits, &b.digits)
}

/// Digit-wise sum with carry. The flag reports a carry out of the most
/// significant slot; the returned digits are the sum truncated to capacity.
pub(crate) fn add_mag(a: &DigitStore, b: &DigitStore) -> (DigitStore, bool) {
    let mut result = DigitStore::ZERO;
    let mut carry = 0u8;
    for i in 0..CAPACITY {
        let sum = a.digits[i] + b.digits[i] + carry;
        result.digits[i] = sum % RADIX;
        carry = sum / RADIX;
    }
    (result, carry != 0)
}

/// `big - little`. Requires `big >= little`.
pub(crate) fn sub_mag(big: &DigitStore, little: &DigitStore) -> DigitStore {
    debug_assert!(compare_mag(big, little).is_ge());
    let mut result = big.clone();
    sub_in_place(&mut result.digits, &little.digits);
    result
}

/// Schoolbook multiplication into a double-width buffer. The flag reports
/// that some digit beyond the capacity is non-zero; the returned digits
/// are the low `CAPACITY` digits of the product.
pub(crate) fn mul_mag(a: &DigitStore, b: &DigitStore) -> (DigitStore, bool) {
    let a_len = a.significant_len();
    let b_len = b.significant_len();
    let mut product = [0u8; 2 * CAPACITY];

    for i in 0..a_len {
        let x = a.digits[i] as u32;
        if x == 0 {
            continue;
        }
        let mut carry = 0u32;
        for j in 0..b_len {
            let t = product[i + j] as u32 + x * b.digits[j] as u32 + carry;
            product[i + j] = (t % RADIX as u32) as u8;
            carry = t / RADIX as u32;
        }
        let mut k = i + b_len;
        while carry != 0 {
            let t = product[k] as u32 + carry;
            product[k] = (t % RADIX as u32) as u8;
            carry = t / RADIX as u32;
            k += 1;
        }
    }

    let overflow = product[CAPACITY..].iter().any(|&d| d != 0);
    let mut result = DigitStore::ZERO;
    result.digits.copy_from_slice(&product[..CAPACITY]);
    (result, overflow)
}

/// Long division, one dividend digit at a time from the most significant
/// end. Returns `(quotient, remainder)`. Requires a non-zero divisor.
pub(crate) fn div_rem_mag(dividend: &DigitStore, divisor: &DigitStore) -> (DigitStore, DigitStore) {
    debug_assert!(!divisor.is_zero());
    let mut quotient = DigitStore::ZERO;
    // One extra slot: the running remainder is below the divisor, so ten
    // times it plus a digit can need CAPACITY + 1 digits.
    let mut rem = [0u8; CAPACITY + 1];

    for i in (0..dividend.significant_len()).rev() {
        rem.copy_within(0..CAPACITY, 1);
        rem[0] = dividend.digits[i];

        let mut q = 0u8;
        while compare_slices(&rem, &divisor.digits).is_ge() {
            sub_in_place(&mut rem, &divisor.digits);
            q += 1;
        }
        quotient.digits[i] = q;
    }

    debug_assert_eq!(rem[CAPACITY], 0);
    let mut remainder = DigitStore::ZERO;
    remainder.digits.copy_from_slice(&rem[..CAPACITY]);
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(val: u128) -> DigitStore {
        DigitStore::from_u128(val)
    }

    #[test]
    fn test_from_u128() {
        let s = store(9051);
        assert_eq!(s.get(0), 1);
        assert_eq!(s.get(1), 5);
        assert_eq!(s.get(2), 0);
        assert_eq!(s.get(3), 9);
        assert_eq!(s.get(4), 0);
        assert_eq!(s.get(CAPACITY + 10), 0);
        assert_eq!(s.significant_len(), 4);
        assert_eq!(store(0).significant_len(), 0);
        assert!(store(0).is_zero());
        assert_eq!(store(u128::MAX).to_u128(), Some(u128::MAX));
    }

    #[test]
    fn test_to_u128_out_of_range() {
        assert_eq!(DigitStore::MAX.to_u128(), None);
        // u128::MAX + 1 has 39 digits but does not fit.
        let (past_max, _) = add_mag(&store(u128::MAX), &DigitStore::ONE);
        assert_eq!(past_max.significant_len(), MAX_NATIVE_DIGITS);
        assert_eq!(past_max.to_u128(), None);
    }

    #[test]
    fn test_from_le_digits() {
        let s = DigitStore::from_le_digits([3, 2, 1]);
        assert_eq!(s, store(123));
    }

    #[test]
    fn test_compare_mag() {
        assert_eq!(compare_mag(&store(120), &store(99)), Ordering::Greater);
        assert_eq!(compare_mag(&store(99), &store(120)), Ordering::Less);
        assert_eq!(compare_mag(&store(120), &store(120)), Ordering::Equal);
        assert_eq!(compare_mag(&DigitStore::MAX, &store(1)), Ordering::Greater);
        assert_eq!(compare_slices(&[1, 0, 0], &[1]), Ordering::Equal);
    }

    #[test]
    fn test_add_mag() {
        assert_eq!(add_mag(&store(123), &store(456)), (store(579), false));
        assert_eq!(add_mag(&store(999), &store(1)), (store(1000), false));
        let (sum, carry) = add_mag(&DigitStore::MAX, &DigitStore::ONE);
        assert!(carry);
        assert!(sum.is_zero());
    }

    #[test]
    fn test_sub_mag() {
        assert_eq!(sub_mag(&store(1000), &store(1)), store(999));
        assert_eq!(sub_mag(&store(10), &store(3)), store(7));
        assert!(sub_mag(&store(42), &store(42)).is_zero());
        assert_eq!(sub_mag(&DigitStore::MAX, &DigitStore::MAX), DigitStore::ZERO);
    }

    #[test]
    fn test_mul_mag() {
        assert_eq!(mul_mag(&store(12), &store(34)), (store(408), false));
        assert_eq!(mul_mag(&store(0), &store(34)), (store(0), false));
        let big = 999_999_999_999_999_999u128;
        assert_eq!(mul_mag(&store(big), &store(big)), (store(big * big), false));

        let (low, overflow) = mul_mag(&DigitStore::MAX, &store(2));
        assert!(overflow);
        // 2 * (10^N - 1) = 2 * 10^N - 2, low N digits are 99..98.
        assert_eq!(low.get(0), 8);
        assert_eq!(low.get(1), 9);
        assert_eq!(low.get(CAPACITY - 1), 9);
    }

    #[test]
    fn test_div_rem_mag() {
        assert_eq!(div_rem_mag(&store(120), &store(13)), (store(9), store(3)));
        assert_eq!(div_rem_mag(&store(7), &store(13)), (store(0), store(7)));
        assert_eq!(
            div_rem_mag(&store(10_000_000_000_000_000), &store(10)),
            (store(1_000_000_000_000_000), store(0))
        );
        let (q, r) = div_rem_mag(&DigitStore::MAX, &DigitStore::MAX);
        assert_eq!((q, r), (DigitStore::ONE, DigitStore::ZERO));

        let (q, r) = div_rem_mag(&DigitStore::MAX, &store(9));
        assert_eq!(r, DigitStore::ZERO);
        assert_eq!(q.significant_len(), CAPACITY);
        assert!((0..CAPACITY).all(|i| q.get(i) == 1));
    }
}
