//! Shuffle command implementation
//!
//! Prints every word or line from the arguments or stdin in random order.

use std::io::{Read, Write};

use tracing::info;

use pseu_core::generate;

use super::build_rng;
use crate::input::{collect_items, InputFormat};
use crate::output::{write_joined, write_lines};
use crate::Result;

/// Run the shuffle command
pub fn run<R: Read, W: Write>(
    words: &[String],
    format: InputFormat<'_>,
    seed: Option<&str>,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let items = collect_items(words, format, stdin)?;
    let mut rng = build_rng(seed)?;
    let result = generate::shuffle(&mut rng, items);
    info!(count = result.len(), "Shuffled items");

    if format.lines {
        write_lines(out, &result.values)
    } else {
        write_joined(out, &result.values, format.separator)
    }
}
