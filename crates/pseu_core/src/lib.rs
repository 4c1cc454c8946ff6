//! # pseu_core: Seeded Randomness Engine
//!
//! pseu_core is the library behind the `pseu` command-line tool. It provides:
//! - Notation parsing for dice (`2d6`) and ranges (`10`, `0-4`, `1-4x3`) (`notation`)
//! - Base-64 seed decoding (`seed`)
//! - A seedable random source with sampling and shuffling (`rng`)
//! - Generators for roll, rand, pick and shuffle with optional statistics (`generate`)
//! - Value types `Range` and `GenerationRequest`, and the `PseuError` taxonomy (`types`)
//!
//! ## Reproducibility
//!
//! Every generator takes a [`rng::PseuRng`] by mutable reference. Building two
//! sources from the same [`seed::Seed`] and issuing the same sequence of calls
//! yields identical output.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pseu_core::generate::roll;
//! use pseu_core::rng::PseuRng;
//! use pseu_core::seed::Seed;
//! use pseu_core::types::GenerationRequest;
//!
//! let seed: Seed = "dice".parse().unwrap();
//! let mut rng = PseuRng::from_seed_value(seed.value());
//!
//! let request = GenerationRequest::dice(&["2d6"]).unwrap();
//! let result = roll(&mut rng, &request, true).unwrap();
//!
//! assert_eq!(result.values.len(), 2);
//! let stats = result.stats.unwrap();
//! assert_eq!(stats.sum, result.values.iter().map(|&v| v as u128).sum::<u128>());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Range`, `Stats` and `ResultSet`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generate;
pub mod notation;
pub mod rng;
pub mod seed;
pub mod types;

pub use types::{GenerationRequest, PseuError, Range, Result};
