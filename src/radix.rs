//! Exact parsing of digit strings in an arbitrary radix.
//!
//! Digits run `0-9` then letters. Up to radix 36 letters are case-insensitive;
//! above that `a..z` stand for 10..35 and `A..Z` for 36..61.

use num_bigint::{BigInt, BigUint, Sign};

/// Smallest accepted radix.
pub const MIN_RADIX: u32 = 2;
/// Largest accepted radix.
pub const MAX_RADIX: u32 = 62;

/// Parse a radix field such as `"16"`. Returns `None` for anything that is
/// not a decimal integer in `MIN_RADIX..=MAX_RADIX`.
pub fn parse_radix(field: &str) -> Option<u32> {
    let radix: u32 = field.parse().ok()?;
    (MIN_RADIX..=MAX_RADIX).contains(&radix).then_some(radix)
}

fn digit_value(c: u8, radix: u32) -> Option<u8> {
    let d = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' if radix <= 36 => c - b'A' + 10,
        b'A'..=b'Z' => c - b'A' + 36,
        _ => return None,
    };
    (u32::from(d) < radix).then_some(d)
}

fn parse_magnitude(digits: &str, radix: u32) -> Option<BigUint> {
    if digits.is_empty() {
        return None;
    }
    let values = digits
        .bytes()
        .map(|c| digit_value(c, radix))
        .collect::<Option<Vec<u8>>>()?;
    BigUint::from_radix_be(&values, radix)
}

/// Parse an optionally signed digit string in `radix`. Returns `None` when
/// `radix` is outside `MIN_RADIX..=MAX_RADIX`.
pub fn parse_bigint(s: &str, radix: u32) -> Option<BigInt> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return None;
    }
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &s[1..]),
        Some(b'+') => (Sign::Plus, &s[1..]),
        _ => (Sign::Plus, s),
    };
    let magnitude = parse_magnitude(digits, radix)?;
    Some(BigInt::from_biguint(sign, magnitude))
}

/// Parse an unsigned decimal share index; a leading `+` is accepted.
pub fn parse_index(s: &str) -> Option<BigUint> {
    parse_magnitude(s.strip_prefix('+').unwrap_or(s), 10)
}
