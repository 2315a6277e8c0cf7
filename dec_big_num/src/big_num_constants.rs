pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9' ,
];

/// Number of decimal digit slots held by every `BigInt`.
/// The largest representable magnitude is `10^CAPACITY - 1`.
pub const CAPACITY: usize = 256;

pub const RADIX: u8 = 10;

/// Values with a magnitude up to and including this are served from the cache.
pub const MAX_CONSTANT: usize = 16;

/// Decimal digits needed for `u128::MAX`.
pub const MAX_NATIVE_DIGITS: usize = 39;
