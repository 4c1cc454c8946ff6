//! Base-64 text seeds.
//!
//! A seed is a string over the alphabet `0-9A-Za-z+/`, read as a big-endian
//! base-64 numeral: `"10"` is 64, `"//"` is 4095. Decoding is one-way; there
//! is no canonical encoding back to text.
//!
//! The numeral is kept exactly as a 256-bit [`SeedValue`], which becomes the
//! full key of the random source. Distinct numerals therefore never share an
//! output stream. A numeral of 42 characters always fits; anything wider than
//! 256 bits is rejected with [`PseuError::SeedTooLarge`].

use std::fmt;
use std::str::FromStr;

use crate::types::{PseuError, Result};

/// The seed alphabet. A character's value is its index in this string.
pub const SEED_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Width of a decoded seed in bytes.
pub const SEED_BYTES: usize = 32;

/// Value of a single seed character.
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    SEED_ALPHABET
        .iter()
        .position(|&b| b == c as u8)
        .map(|i| i as u8)
}

/// A decoded seed: an unsigned 256-bit integer, stored big-endian.
///
/// # Examples
///
/// ```
/// use pseu_core::seed::SeedValue;
///
/// let v = SeedValue::from(4095u64);
/// assert_eq!(v.to_u64(), Some(4095));
/// assert_eq!(v.to_string(), "0xfff");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SeedValue([u8; SEED_BYTES]);

impl SeedValue {
    /// Appends one base-64 digit: `self * 64 + digit`.
    ///
    /// Returns `false`, leaving `self` unchanged, if the result would not
    /// fit in 256 bits.
    fn push_digit(&mut self, digit: u8) -> bool {
        // Shifting by six bits drops the top six bits of the leading byte.
        if self.0[0] >> 2 != 0 {
            return false;
        }
        let mut carry = u16::from(digit);
        for byte in self.0.iter_mut().rev() {
            let wide = (u16::from(*byte) << 6) | carry;
            *byte = wide as u8;
            carry = wide >> 8;
        }
        true
    }

    /// The big-endian bytes.
    #[inline]
    pub fn to_bytes(self) -> [u8; SEED_BYTES] {
        self.0
    }

    /// The value as a `u64`, or `None` if it is wider than 64 bits.
    pub fn to_u64(self) -> Option<u64> {
        let (high, low) = self.0.split_at(SEED_BYTES - 8);
        if high.iter().any(|&b| b != 0) {
            return None;
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(low);
        Some(u64::from_be_bytes(bytes))
    }
}

impl From<u64> for SeedValue {
    fn from(value: u64) -> Self {
        let mut bytes = [0u8; SEED_BYTES];
        bytes[SEED_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl fmt::Display for SeedValue {
    /// Lowercase hex with a `0x` prefix and no leading zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.0.iter().skip_while(|&&b| b == 0);
        match digits.next() {
            None => f.write_str("0x0"),
            Some(first) => {
                write!(f, "0x{:x}", first)?;
                digits.try_for_each(|b| write!(f, "{:02x}", b))
            }
        }
    }
}

/// Decodes a base-64 seed string into its exact integer value.
///
/// The empty string decodes to 0. Leading `0` characters do not change the
/// value.
///
/// # Errors
///
/// - [`PseuError::InvalidSeedCharacter`] naming the first character outside
///   [`SEED_ALPHABET`]
/// - [`PseuError::SeedTooLarge`] when the numeral exceeds 256 bits
///
/// # Examples
///
/// ```
/// use pseu_core::seed::{decode_seed, SeedValue};
///
/// assert_eq!(decode_seed("0").unwrap(), SeedValue::from(0));
/// assert_eq!(decode_seed("A").unwrap(), SeedValue::from(10));
/// assert_eq!(decode_seed("10").unwrap(), SeedValue::from(64));
/// assert!(decode_seed("a!").is_err());
/// ```
pub fn decode_seed(s: &str) -> Result<SeedValue> {
    let mut value = SeedValue::default();
    for (position, c) in s.chars().enumerate() {
        let digit = digit_value(c).ok_or(PseuError::InvalidSeedCharacter {
            character: c,
            position,
        })?;
        if !value.push_digit(digit) {
            // Keep scanning so a bad character further on is still reported.
            if let Some((position, character)) = s
                .chars()
                .enumerate()
                .skip(position + 1)
                .find(|&(_, c)| digit_value(c).is_none())
            {
                return Err(PseuError::InvalidSeedCharacter {
                    character,
                    position,
                });
            }
            return Err(PseuError::SeedTooLarge {
                length: s.chars().count(),
            });
        }
    }
    Ok(value)
}

/// A validated text seed together with its decoded value.
///
/// # Examples
///
/// ```
/// use pseu_core::seed::{Seed, SeedValue};
///
/// let seed: Seed = "//".parse().unwrap();
/// assert_eq!(seed.value(), SeedValue::from(4095));
/// assert_eq!(seed.as_str(), "//");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    text: String,
    value: SeedValue,
}

impl Seed {
    /// The decoded integer.
    #[inline]
    pub fn value(&self) -> SeedValue {
        self.value
    }

    /// The seed as given.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Seed {
    type Err = PseuError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            value: decode_seed(s)?,
            text: s.to_string(),
        })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
