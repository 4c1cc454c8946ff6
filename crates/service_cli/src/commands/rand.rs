//! Rand command implementation
//!
//! Draws integers from ranges given as `{n}`, `{n}-{m}` or `{n}-{m}x{k}`.

use std::io::Write;

use tracing::{debug, info};

use pseu_core::generate;
use pseu_core::notation::parse_range;
use pseu_core::GenerationRequest;

use super::build_rng;
use crate::config::PseuConfig;
use crate::output::write_draws;
use crate::Result;

/// Run the rand command
pub fn run<W: Write>(
    ranges: &[String],
    stats: bool,
    seed: Option<&str>,
    config: &PseuConfig,
    out: &mut W,
) -> Result<()> {
    let default = parse_range(&config.default_range)?;
    let request = GenerationRequest::parse_with(ranges, parse_range, default)?;
    debug!(ranges = ?request.ranges(), "Parsed ranges");

    let mut rng = build_rng(seed)?;
    let result = generate::rand(&mut rng, &request, stats)?;
    info!(draws = result.len(), "Generated random numbers");

    write_draws(out, &result)
}
