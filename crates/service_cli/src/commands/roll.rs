//! Roll command implementation
//!
//! Rolls dice given in `{n}d{m}` notation.

use std::io::Write;

use tracing::{debug, info};

use pseu_core::generate;
use pseu_core::notation::parse_dice;
use pseu_core::GenerationRequest;

use super::build_rng;
use crate::config::PseuConfig;
use crate::output::write_draws;
use crate::Result;

/// Run the roll command
pub fn run<W: Write>(
    dice: &[String],
    stats: bool,
    seed: Option<&str>,
    config: &PseuConfig,
    out: &mut W,
) -> Result<()> {
    let default = parse_dice(&config.default_dice)?;
    let request = GenerationRequest::parse_with(dice, parse_dice, default)?;
    debug!(ranges = ?request.ranges(), "Parsed dice");

    let mut rng = build_rng(seed)?;
    let result = generate::roll(&mut rng, &request, stats)?;
    info!(draws = result.len(), "Rolled dice");

    write_draws(out, &result)
}
