use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use crate::digit_store::DigitStore;

fn build_cache(sign: Sign) -> [BigInt; MAX_CONSTANT + 1] {
    std::array::from_fn(|val| {
        if val == 0 {
            BigInt::ZERO
        } else {
            BigInt::from_parts(sign, DigitStore::from_u128(val as u128))
        }
    })
}

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = build_cache(Sign::Positive);
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = build_cache(Sign::Negative);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_holds_small_values() {
        assert!(POS_CACHE[0].is_zero());
        assert!(!NEG_CACHE[0].is_negative());
        for val in 1..=MAX_CONSTANT {
            assert_eq!(POS_CACHE[val].to_string(), val.to_string());
            assert_eq!(NEG_CACHE[val].to_string(), format!("-{val}"));
        }
    }
}
