//! Decimal rendering and parsing of `BigInt`.

use std::fmt::{self, Debug, Display};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;
use crate::digit_store::DigitStore;
use crate::error::{BigIntError, ParseBigIntError};

impl BigInt {
    /// The significant digits, most significant first; `"0"` for zero.
    fn magnitude_string(&self) -> String {
        let len = self.significant_digits();
        if len == 0 {
            return String::from("0");
        }
        (0..len)
            .rev()
            .map(|i| DIGITS[self.digit(i) as usize])
            .collect()
    }

    /// Writes the decimal rendering to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Reads one whitespace-delimited integer from `input`, skipping
    /// leading whitespace. The delimiter following the integer is left in
    /// the input. At most `CAPACITY` digits of the token are held in memory;
    /// a longer token is still consumed in full.
    ///
    /// Fails with `UnexpectedEof` if the input ends before any digit, and
    /// with `InvalidData` wrapping a [`ParseBigIntError`] if the token is
    /// not an integer.
    pub fn read_from<R: BufRead>(input: &mut R) -> io::Result<BigInt> {
        let mut token = TokenScanner::new();
        loop {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(b);
                used += 1;
            }
            input.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input before an integer",
            ));
        }
        token
            .finish()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Accumulates one token byte by byte, applying the same rules as
/// `FromStr`. Leading zeros are not stored and no more than `CAPACITY`
/// significant digits are kept.
struct TokenScanner {
    len: usize,
    sign: Sign,
    has_sign: bool,
    /// Most significant first.
    digits: Vec<u8>,
    significant: usize,
    /// Byte position of the first bad byte, and up to 4 bytes from there
    /// so the offending character can be reported.
    invalid: Option<(usize, Vec<u8>)>,
}

impl TokenScanner {
    fn new() -> TokenScanner {
        TokenScanner {
            len: 0,
            sign: Sign::Positive,
            has_sign: false,
            digits: Vec::new(),
            significant: 0,
            invalid: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, b: u8) {
        let position = self.len;
        self.len += 1;

        if let Some((_, bytes)) = &mut self.invalid {
            if bytes.len() < 4 {
                bytes.push(b);
            }
            return;
        }

        match b {
            b'-' if position == 0 => {
                self.sign = Sign::Negative;
                self.has_sign = true;
            }
            b'+' if position == 0 => self.has_sign = true,
            b'0' if self.significant == 0 => {}
            b'0'..=b'9' => {
                self.significant += 1;
                if self.digits.len() < CAPACITY {
                    self.digits.push(b - b'0');
                }
            }
            _ => self.invalid = Some((position, vec![b])),
        }
    }

    fn finish(self) -> Result<BigInt, ParseBigIntError> {
        if let Some((position, bytes)) = self.invalid {
            return Err(ParseBigIntError::InvalidDigit {
                found: first_char(&bytes),
                position,
            });
        }
        if self.len == usize::from(self.has_sign) {
            return Err(ParseBigIntError::Empty);
        }
        if self.significant > CAPACITY {
            return Err(ParseBigIntError::TooManyDigits {
                digits: self.significant,
                capacity: CAPACITY,
            });
        }
        let digits = DigitStore::from_le_digits(self.digits.iter().rev().copied());
        Ok(BigInt::normalized(self.sign, digits))
    }
}

/// The character starting `bytes`, or U+FFFD if they do not start with
/// valid UTF-8.
fn first_char(bytes: &[u8]) -> char {
    let valid = match std::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_string())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.sign())
            .field("digits", &format_args!("{}", self.magnitude_string()))
            .finish()
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// An optional `+` or `-` followed by one or more ASCII digits. Leading
    /// zeros do not count toward the capacity.
    fn from_str(val: &str) -> Result<BigInt, ParseBigIntError> {
        let (sign, cursor) = match val.as_bytes().first() {
            None => return Err(ParseBigIntError::Empty),
            Some(b'-') => (Sign::Negative, 1),
            Some(b'+') => (Sign::Positive, 1),
            Some(_) => (Sign::Positive, 0),
        };

        let body = &val[cursor..];
        if body.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((position, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit {
                found,
                position: cursor + position,
            });
        }

        let significant = body.trim_start_matches('0');
        if significant.len() > CAPACITY {
            return Err(ParseBigIntError::TooManyDigits {
                digits: significant.len(),
                capacity: CAPACITY,
            });
        }

        let digits = DigitStore::from_le_digits(significant.bytes().rev().map(|b| b - b'0'));
        Ok(BigInt::normalized(sign, digits))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<BigInt, BigIntError> {
        Ok(val.parse::<BigInt>()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(BigInt::from(0).to_string(), "0");
        assert_eq!(BigInt::from(-0).to_string(), "0");
        assert_eq!(BigInt::from(579).to_string(), "579");
        assert_eq!(BigInt::from(-12).to_string(), "-12");
        assert_eq!(BigInt::from(1000).to_string(), "1000");
        assert_eq!(BigInt::MAX.to_string(), "9".repeat(CAPACITY));
        assert_eq!(BigInt::MIN.to_string(), format!("-{}", "9".repeat(CAPACITY)));
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
        assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
        assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
        assert_eq!(format!("{:<4}|", BigInt::ZERO), "0   |");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", BigInt::from(-42)),
            "BigInt { sign: Negative, digits: 42 }"
        );
    }

    #[test]
    fn test_write_to() {
        let mut out: Vec<u8> = Vec::new();
        BigInt::from(-1234).write_to(&mut out).unwrap();
        out.push(b' ');
        BigInt::ZERO.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1234 0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("123".parse::<BigInt>(), Ok(BigInt::from(123)));
        assert_eq!("+123".parse::<BigInt>(), Ok(BigInt::from(123)));
        assert_eq!("-123".parse::<BigInt>(), Ok(BigInt::from(-123)));
        assert_eq!("000042".parse::<BigInt>(), Ok(BigInt::from(42)));

        let zero: BigInt = "-0000".parse().unwrap();
        assert_eq!(zero, BigInt::ZERO);
        assert_eq!(zero.sign(), Sign::Positive);

        let max: BigInt = "9".repeat(CAPACITY).parse().unwrap();
        assert_eq!(max, BigInt::MAX);
        let padded = format!("-000{}", "9".repeat(CAPACITY));
        assert_eq!(padded.parse::<BigInt>(), Ok(BigInt::MIN));

        assert_eq!(
            BigInt::try_from("12345678909876523784950683472613487560983287654321")
                .unwrap()
                .to_string(),
            "12345678909876523784950683472613487560983287654321"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("+".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!(
            "12a4".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { found: 'a', position: 2 })
        );
        assert_eq!(
            "-1-2".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { found: '-', position: 2 })
        );
        assert_eq!(
            " 12".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit { found: ' ', position: 0 })
        );
        assert_eq!(
            "1".repeat(CAPACITY + 1).parse::<BigInt>(),
            Err(ParseBigIntError::TooManyDigits {
                digits: CAPACITY + 1,
                capacity: CAPACITY,
            })
        );
        assert_eq!(
            BigInt::try_from("x"),
            Err(BigIntError::Parse(ParseBigIntError::InvalidDigit {
                found: 'x',
                position: 0,
            }))
        );
    }

    #[test]
    fn test_read_from() {
        let mut input = Cursor::new("  -17\n\t42 +3 0007");
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(-17));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(42));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(3));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(7));
        let err = BigInt::read_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_from_leaves_delimiter() {
        let mut input = Cursor::new("99 rest");
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(99));
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " rest");
    }

    #[test]
    fn test_read_from_small_buffer() {
        // Tokens spanning several buffer refills.
        let text = format!("{} 5", "9".repeat(CAPACITY));
        let mut input = BufReader::with_capacity(4, text.as_bytes());
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::MAX);
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_read_from_invalid() {
        let mut input = Cursor::new("12x4");
        let err = BigInt::read_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<ParseBigIntError>())
            .cloned();
        assert_eq!(
            inner,
            Some(ParseBigIntError::InvalidDigit { found: 'x', position: 2 })
        );
    }

    fn read_parse_error(bytes: &[u8]) -> Option<ParseBigIntError> {
        let mut input = Cursor::new(bytes);
        let err = BigInt::read_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        err.get_ref()
            .and_then(|e| e.downcast_ref::<ParseBigIntError>())
            .cloned()
    }

    #[test]
    fn test_read_from_non_utf8() {
        assert_eq!(
            read_parse_error(b"12\xff4"),
            Some(ParseBigIntError::InvalidDigit {
                found: char::REPLACEMENT_CHARACTER,
                position: 2,
            })
        );
        assert_eq!(
            read_parse_error("1\u{e9}".as_bytes()),
            Some(ParseBigIntError::InvalidDigit { found: '\u{e9}', position: 1 })
        );
        assert_eq!(read_parse_error(b"-"), Some(ParseBigIntError::Empty));
        assert_eq!(
            read_parse_error(b"+-5"),
            Some(ParseBigIntError::InvalidDigit { found: '-', position: 1 })
        );
    }

    #[test]
    fn test_read_from_huge_token() {
        let len = 1_000_000;
        let mut input = BufReader::new(io::repeat(b'7').take(len as u64).chain(&b" 5"[..]));
        let err = BigInt::read_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<ParseBigIntError>())
            .cloned();
        assert_eq!(
            inner,
            Some(ParseBigIntError::TooManyDigits { digits: len, capacity: CAPACITY })
        );
        // The whole token was consumed; the next integer is intact.
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_read_from_long_leading_zeros() {
        let text = format!("-{}42", "0".repeat(100_000));
        let mut input = Cursor::new(text);
        assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(-42));
    }

    #[test]
    fn token_scanner_holds_at_most_capacity_digits() {
        let mut token = TokenScanner::new();
        for b in "0".repeat(1000).bytes().chain("9".repeat(10 * CAPACITY).bytes()) {
            token.push(b);
        }
        assert_eq!(token.digits.len(), CAPACITY);
        assert_eq!(token.significant, 10 * CAPACITY);

        let mut token = TokenScanner::new();
        for b in format!("-{}", "9".repeat(CAPACITY)).bytes() {
            token.push(b);
        }
        assert_eq!(token.finish(), Ok(BigInt::MIN));

        let mut token = TokenScanner::new();
        for b in "0000".bytes() {
            token.push(b);
        }
        assert!(token.digits.is_empty());
        assert_eq!(token.finish(), Ok(BigInt::ZERO));
    }
}
