//! Pick command implementation
//!
//! Picks `n` distinct words or lines from the arguments or stdin.

use std::io::{Read, Write};

use tracing::info;

use pseu_core::generate;

use super::build_rng;
use crate::input::{collect_items, InputFormat};
use crate::output::write_lines;
use crate::Result;

/// Run the pick command
pub fn run<R: Read, W: Write>(
    words: &[String],
    n: usize,
    format: InputFormat<'_>,
    seed: Option<&str>,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let items = collect_items(words, format, stdin)?;
    let mut rng = build_rng(seed)?;
    let result = generate::pick(&mut rng, &items, n)?;
    info!(picked = result.len(), from = items.len(), "Picked items");

    write_lines(out, &result.values)
}
