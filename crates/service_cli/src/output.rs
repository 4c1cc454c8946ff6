//! Text rendering of result sets.

use std::fmt::Display;
use std::io::Write;

use pseu_core::generate::{ResultSet, Stats};

use crate::Result;

/// Writes draws on one line, followed by stats lines if present.
///
/// ```text
/// 3 5
/// sum: 8
/// max: 5
/// min: 3
/// avg: 4
/// ```
pub fn write_draws<W: Write>(out: &mut W, result: &ResultSet<u64>) -> Result<()> {
    writeln!(out, "{}", join(&result.values, " "))?;
    if let Some(stats) = &result.stats {
        write_stats(out, stats)?;
    }
    Ok(())
}

fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> Result<()> {
    writeln!(out, "sum: {}", stats.sum)?;
    writeln!(out, "max: {}", stats.max)?;
    writeln!(out, "min: {}", stats.min)?;
    if let Some(mean) = stats.mean {
        writeln!(out, "avg: {}", mean)?;
    }
    Ok(())
}

/// Writes one item per line.
pub fn write_lines<W: Write, T: Display>(out: &mut W, items: &[T]) -> Result<()> {
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Writes all items on one line, joined by `separator`.
pub fn write_joined<W: Write, T: Display>(out: &mut W, items: &[T], separator: &str) -> Result<()> {
    writeln!(out, "{}", join(items, separator))?;
    Ok(())
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
