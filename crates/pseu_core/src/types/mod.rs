//! Core value types.
//!
//! - [`Range`]: a normalised draw request (`times` draws from `[lower, upper]`)
//! - [`GenerationRequest`]: a non-empty sequence of ranges
//! - [`PseuError`]: the error taxonomy shared by every module

pub mod error;
pub mod range;

pub use error::{PseuError, Result};
pub use range::{GenerationRequest, Range, DEFAULT_DIE_SIDES, DEFAULT_RAND_UPPER};
