//! Plain-text word lists: one word per line, `#` starts a comment line.

use std::fs;
use std::io;
use std::path::Path;

/// Splits word-list text into raw entries. Lines are trimmed; blank lines
/// and comment lines are skipped. No other filtering happens here.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_wordlist(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_wordlist(&text))
}
