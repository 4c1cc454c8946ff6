//! Item lists for `pick` and `shuffle`.
//!
//! Items come from the positional arguments when any are given, otherwise
//! from stdin. Splitting rules:
//!
//! - `--json`: the whole input is a JSON array of strings
//! - `--lines`: one item per line (stdin) or per argument
//! - otherwise items are separated by the separator; a single space means
//!   "any whitespace"
//!
//! Empty items are dropped.

use std::io::Read;

use tracing::debug;

use crate::Result;

/// How to turn raw input into items.
#[derive(Debug, Clone, Copy)]
pub struct InputFormat<'a> {
    /// Input is a JSON array of strings
    pub json: bool,
    /// One item per line
    pub lines: bool,
    /// Word separator
    pub separator: &'a str,
}

/// Collects items from `words`, or from `stdin` when `words` is empty.
pub fn collect_items<R: Read>(
    words: &[String],
    format: InputFormat<'_>,
    mut stdin: R,
) -> Result<Vec<String>> {
    let items = if words.is_empty() {
        let mut text = String::new();
        stdin.read_to_string(&mut text)?;
        debug!(bytes = text.len(), "read items from stdin");
        split_text(&text, format)?
    } else {
        split_args(words, format)?
    };
    debug!(count = items.len(), "collected items");
    Ok(items)
}

fn split_args(words: &[String], format: InputFormat<'_>) -> Result<Vec<String>> {
    if format.json {
        return parse_json(&words.join(" "));
    }
    if format.lines || format.separator == " " {
        return Ok(non_empty(words.iter().map(String::as_str)));
    }
    // The shell split on spaces; undo that and split on the real separator.
    Ok(non_empty(words.join(" ").split(format.separator)))
}

fn split_text(text: &str, format: InputFormat<'_>) -> Result<Vec<String>> {
    if format.json {
        return parse_json(text);
    }
    if format.lines {
        return Ok(non_empty(text.lines()));
    }
    if format.separator == " " {
        return Ok(non_empty(text.split_whitespace()));
    }
    let text = text.trim_end_matches(&['\n', '\r'][..]);
    Ok(non_empty(text.split(format.separator)))
}

fn parse_json(text: &str) -> Result<Vec<String>> {
    let items: Vec<String> = serde_json::from_str(text)?;
    Ok(items.into_iter().filter(|s| !s.is_empty()).collect())
}

fn non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
