//! Dice and range notation.
//!
//! Both notations are parsed by a small hand-written scanner over the token's
//! bytes. The accepted language is exactly:
//!
//! ```text
//! dice     = positive "d" positive ;
//! range    = positive
//!          | natural "-" natural [ "x" positive ] ;
//! positive = nonzero , { digit } ;
//! natural  = digit , { digit } ;
//! nonzero  = "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" ;
//! digit    = "0" | nonzero ;
//! ```
//!
//! # Bound conventions
//!
//! The two range forms use different upper-bound conventions:
//!
//! | Token    | Meaning            | Range                 |
//! |----------|--------------------|-----------------------|
//! | `n`      | half-open `[0, n)` | `Range(1, 0, n - 1)`  |
//! | `lo-hi`  | closed `[lo, hi]`  | `Range(1, lo, hi)`    |
//! | `lo-hixk`| closed, `k` draws  | `Range(k, lo, hi)`    |
//!
//! Scripts depend on this asymmetry; `10` and `0-10` are not the same request.
//!
//! # Examples
//!
//! ```
//! use pseu_core::notation::{parse_dice, parse_range};
//! use pseu_core::Range;
//!
//! assert_eq!(parse_dice("3d8").unwrap(), Range::new(3, 1, 8).unwrap());
//! assert_eq!(parse_range("10").unwrap(), Range::new(1, 0, 9).unwrap());
//! assert_eq!(parse_range("0-10").unwrap(), Range::new(1, 0, 10).unwrap());
//! assert!(parse_range("0").is_err());
//! ```

use crate::types::{PseuError, Range, Result};

/// Forward-only cursor over an ASCII token.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(token: &'a str) -> Self {
        Self {
            bytes: token.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Consumes `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `natural`: one or more digits, leading zeros allowed.
    fn natural(&mut self) -> Option<Digits> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        Some(Digits::from_ascii(&self.bytes[start..self.pos]))
    }

    /// `positive`: a nonzero digit followed by any digits.
    fn positive(&mut self) -> Option<Digits> {
        match self.peek() {
            Some(b'1'..=b'9') => self.natural(),
            _ => None,
        }
    }
}

/// A run of decimal digits, or the marker that it overflowed `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Digits {
    Value(u64),
    Overflow,
}

impl Digits {
    fn from_ascii(digits: &[u8]) -> Self {
        let mut acc: u64 = 0;
        for &d in digits {
            acc = match acc
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(d - b'0')))
            {
                Some(v) => v,
                None => return Digits::Overflow,
            };
        }
        Digits::Value(acc)
    }
}

/// Parses dice notation `{n}d{m}` into `Range(n, 1, m)`.
///
/// Both integers must be positive and written without leading zeros.
///
/// # Errors
///
/// [`PseuError::InvalidDiceFormat`] for anything outside the grammar,
/// including `d`, `1d`, `d1`, `0d6`, `1d0`, `01d6` and integers wider than
/// 64 bits.
///
/// # Examples
///
/// ```
/// use pseu_core::notation::parse_dice;
/// use pseu_core::Range;
///
/// assert_eq!(parse_dice("1d6").unwrap(), Range::new(1, 1, 6).unwrap());
/// assert!(parse_dice("1d0").is_err());
/// ```
pub fn parse_dice(token: &str) -> Result<Range> {
    let invalid = || PseuError::invalid_dice(token);
    let mut scan = Scanner::new(token);

    let times = scan.positive().ok_or_else(invalid)?;
    if !scan.eat(b'd') {
        return Err(invalid());
    }
    let sides = scan.positive().ok_or_else(invalid)?;
    if !scan.at_end() {
        return Err(invalid());
    }

    match (times, sides) {
        (Digits::Value(n), Digits::Value(m)) => Range::dice(n, m).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Parses range notation into a [`Range`].
///
/// Accepts a bare positive integer `n` (half-open `[0, n)`) or an inclusive
/// `lo-hi` with an optional repeat suffix `xk`.
///
/// # Errors
///
/// [`PseuError::InvalidRangeFormat`] when the token matches neither form
/// (`0`, `-1`, `-1-0`, `1-4x`), when `lo > hi`, when the repeat count is
/// zero, or when an integer is wider than 64 bits.
///
/// # Examples
///
/// ```
/// use pseu_core::notation::parse_range;
/// use pseu_core::Range;
///
/// assert_eq!(parse_range("2").unwrap(), Range::new(1, 0, 1).unwrap());
/// assert_eq!(parse_range("1-4x3").unwrap(), Range::new(3, 1, 4).unwrap());
/// assert!(parse_range("1-0").is_err());
/// ```
pub fn parse_range(token: &str) -> Result<Range> {
    if let Some(range) = parse_bare(token)? {
        return Ok(range);
    }
    parse_dashed(token)
}

/// Form 1: `positive` alone. `Ok(None)` when the token is not of this form.
fn parse_bare(token: &str) -> Result<Option<Range>> {
    let mut scan = Scanner::new(token);
    let n = match scan.positive() {
        Some(n) if scan.at_end() => n,
        _ => return Ok(None),
    };
    match n {
        Digits::Value(n) => Range::new(1, 0, n - 1)
            .map(Some)
            .map_err(|_| PseuError::invalid_range(token, "bound out of range")),
        Digits::Overflow => Err(PseuError::invalid_range(
            token,
            "integer does not fit in 64 bits",
        )),
    }
}

/// Form 2: `natural "-" natural [ "x" positive ]`.
fn parse_dashed(token: &str) -> Result<Range> {
    let malformed = || {
        PseuError::invalid_range(token, "expected {n}, {n}-{m} or {n}-{m}x{k}")
    };
    let mut scan = Scanner::new(token);

    let lower = scan.natural().ok_or_else(malformed)?;
    if !scan.eat(b'-') {
        return Err(malformed());
    }
    let upper = scan.natural().ok_or_else(malformed)?;
    let times = if scan.eat(b'x') {
        match scan.peek() {
            Some(b'0') => {
                return Err(PseuError::invalid_range(
                    token,
                    "repeat count must be positive",
                ))
            }
            _ => scan.positive().ok_or_else(malformed)?,
        }
    } else {
        Digits::Value(1)
    };
    if !scan.at_end() {
        return Err(malformed());
    }

    let (times, lower, upper) = match (times, lower, upper) {
        (Digits::Value(k), Digits::Value(lo), Digits::Value(hi)) => (k, lo, hi),
        _ => {
            return Err(PseuError::invalid_range(
                token,
                "integer does not fit in 64 bits",
            ))
        }
    };
    if lower > upper {
        return Err(PseuError::invalid_range(
            token,
            "lower bound must be <= upper bound",
        ));
    }
    Range::new(times, lower, upper).map_err(|_| malformed())
}
