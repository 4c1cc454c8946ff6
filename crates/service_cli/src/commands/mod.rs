//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the given writer and never touch stdout directly.

pub mod pick;
pub mod rand;
pub mod roll;
pub mod shuffle;

use tracing::{debug, info};

use pseu_core::rng::PseuRng;
use pseu_core::seed::Seed;

use crate::Result;

/// Builds the random source, decoding `seed` when one was given.
///
/// An explicit empty seed is a present seed with value 0.
pub fn build_rng(seed: Option<&str>) -> Result<PseuRng> {
    let seed = seed.map(str::parse::<Seed>).transpose()?;
    match &seed {
        Some(seed) => info!(
            seed = seed.as_str(),
            value = %seed.value(),
            "Using seeded random source"
        ),
        None => debug!("Using entropy-seeded random source"),
    }
    Ok(PseuRng::from_optional_seed(seed.as_ref()))
}
