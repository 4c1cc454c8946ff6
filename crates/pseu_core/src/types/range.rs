//! Draw requests: [`Range`] and [`GenerationRequest`].

use std::fmt;

use super::error::{PseuError, Result};
use crate::notation::{parse_dice, parse_range};

/// Sides of the die rolled when no dice are given.
pub const DEFAULT_DIE_SIDES: u64 = 6;

/// Upper bound of the range drawn from when no ranges are given.
pub const DEFAULT_RAND_UPPER: u64 = (1 << 16) - 1;

/// A request to draw `times` independent uniform integers from `[lower, upper]`.
///
/// Both bounds are inclusive. Construction through [`Range::new`] (and
/// therefore through the notation parsers) guarantees `lower <= upper` and
/// `times >= 1`. Two ranges with equal fields are interchangeable.
///
/// # Examples
///
/// ```
/// use pseu_core::Range;
///
/// let r = Range::new(3, 1, 4).unwrap();
/// assert_eq!(r.times(), 3);
/// assert!(r.contains(4));
///
/// assert!(Range::new(0, 1, 4).is_err());
/// assert!(Range::new(1, 5, 4).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range {
    times: u64,
    lower: u64,
    upper: u64,
}

impl Range {
    /// Creates a range, checking `times >= 1` and `lower <= upper`.
    pub fn new(times: u64, lower: u64, upper: u64) -> Result<Self> {
        if times == 0 {
            return Err(PseuError::Internal(format!(
                "range {}-{} requested zero draws",
                lower, upper
            )));
        }
        if lower > upper {
            return Err(PseuError::Internal(format!(
                "range lower bound {} exceeds upper bound {}",
                lower, upper
            )));
        }
        Ok(Self {
            times,
            lower,
            upper,
        })
    }

    /// `times` rolls of a die with `sides` faces, i.e. `Range(times, 1, sides)`.
    pub fn dice(times: u64, sides: u64) -> Result<Self> {
        Self::new(times, 1, sides)
    }

    /// The default dice request, `1d6`.
    pub fn default_dice() -> Self {
        Self {
            times: 1,
            lower: 1,
            upper: DEFAULT_DIE_SIDES,
        }
    }

    /// The default rand request, one draw from `[0, 2^16 - 1]`.
    pub fn default_rand() -> Self {
        Self {
            times: 1,
            lower: 0,
            upper: DEFAULT_RAND_UPPER,
        }
    }

    /// Number of draws.
    #[inline]
    pub fn times(&self) -> u64 {
        self.times
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn lower(&self) -> u64 {
        self.lower
    }

    /// Inclusive upper bound.
    #[inline]
    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Whether `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.times == 1 {
            write!(f, "{}-{}", self.lower, self.upper)
        } else {
            write!(f, "{}-{}x{}", self.lower, self.upper, self.times)
        }
    }
}

/// A non-empty, ordered sequence of [`Range`] values.
///
/// Built from raw notation tokens. An empty token list is replaced by the
/// command's default range, so a request always holds at least one range.
///
/// # Examples
///
/// ```
/// use pseu_core::{GenerationRequest, Range};
///
/// let dice = GenerationRequest::dice::<&str>(&[]).unwrap();
/// assert_eq!(dice.ranges(), &[Range::default_dice()]);
///
/// let ranges = GenerationRequest::rand(&["10", "1-4x3"]).unwrap();
/// assert_eq!(ranges.total_draws(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    ranges: Vec<Range>,
}

impl GenerationRequest {
    /// Parses dice tokens, defaulting to `1d6`.
    pub fn dice<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        Self::parse_with(tokens, parse_dice, Range::default_dice())
    }

    /// Parses range tokens, defaulting to `[0, 2^16 - 1]`.
    pub fn rand<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        Self::parse_with(tokens, parse_range, Range::default_rand())
    }

    /// Parses every token with `parse`, or yields `[default]` if there are none.
    ///
    /// The first token that fails to parse aborts the whole request.
    pub fn parse_with<S, F>(tokens: &[S], parse: F, default: Range) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Result<Range>,
    {
        if tokens.is_empty() {
            return Ok(Self {
                ranges: vec![default],
            });
        }
        let ranges = tokens
            .iter()
            .map(|t| parse(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_ranges(ranges)
    }

    /// Wraps already-built ranges. Fails if `ranges` is empty.
    pub(crate) fn from_ranges(ranges: Vec<Range>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(PseuError::Internal(
                "generation request needs at least one range".to_string(),
            ));
        }
        Ok(Self { ranges })
    }

    /// The ranges in request order.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Total number of values the request will draw.
    pub fn total_draws(&self) -> u128 {
        self.ranges.iter().map(|r| r.times() as u128).sum()
    }
}
