//! Error types for structured error handling.
//!
//! Every failure in the core is a user-input validation failure. They are
//! detected before any randomness is consumed and are never downgraded to a
//! default value.

use thiserror::Error;

/// Categorised errors from parsing, seeding and generation.
///
/// # Variants
/// - `InvalidDiceFormat`: token is not `{n}d{m}` with positive integers
/// - `InvalidRangeFormat`: token is neither `{n}` nor `{lo}-{hi}[x{k}]`
/// - `InvalidSeedCharacter`: seed contains a character outside the base-64 alphabet
/// - `SeedTooLarge`: seed numeral does not fit in 256 bits
/// - `InsufficientPopulation`: random source asked for more distinct items than exist
/// - `InvalidSampleSize`: pick count exceeds the number of items
/// - `EmptyPopulation`: choice or pick on zero items
/// - `Internal`: an invariant that construction should guarantee was violated
///
/// # Examples
/// ```
/// use pseu_core::PseuError;
///
/// let err = PseuError::InvalidDiceFormat("0d6".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid dice format: '0d6' (expected {n}d{m}, e.g. 2d6)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PseuError {
    /// Malformed dice token.
    #[error("Invalid dice format: '{0}' (expected {{n}}d{{m}}, e.g. 2d6)")]
    InvalidDiceFormat(String),

    /// Malformed range token.
    #[error("Invalid range: '{token}' ({reason})")]
    InvalidRangeFormat {
        /// The offending token
        token: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Seed character outside `0-9A-Za-z+/`.
    #[error("Invalid seed character '{character}' at position {position}")]
    InvalidSeedCharacter {
        /// The rejected character
        character: char,
        /// Zero-based character index within the seed
        position: usize,
    },

    /// Seed numeral wider than the random source's 256-bit key.
    #[error("Seed of {length} characters exceeds 256 bits")]
    SeedTooLarge {
        /// Number of characters in the seed
        length: usize,
    },

    /// Sampling without replacement asked for more items than available.
    #[error("Cannot sample {requested} distinct items from a population of {available}")]
    InsufficientPopulation {
        /// Number of items requested
        requested: usize,
        /// Number of items available
        available: usize,
    },

    /// Pick count larger than the number of items.
    #[error("n ({requested}) must not exceed the number of items ({available})")]
    InvalidSampleSize {
        /// Number of items requested
        requested: usize,
        /// Number of items available
        available: usize,
    },

    /// No items to choose from.
    #[error("Nothing to choose from: the item list is empty")]
    EmptyPopulation,

    /// Invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PseuError {
    /// Create a range format error for `token`.
    pub fn invalid_range(token: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidRangeFormat {
            token: token.into(),
            reason,
        }
    }

    /// Create a dice format error for `token`.
    pub fn invalid_dice(token: impl Into<String>) -> Self {
        Self::InvalidDiceFormat(token.into())
    }
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, PseuError>;
