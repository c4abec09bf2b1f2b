//! Interactive prompts.
//!
//! Each prompt prints a label, reads one line and keeps only its first
//! whitespace-delimited token. A blank line or end of input gives an empty
//! token, which validation then rejects.

use std::io::{self, BufRead, Write};

pub const DEPARTURE_PROMPT: &str = "Departure station: ";
pub const ARRIVAL_PROMPT: &str = "Arrival station: ";
pub const CRITERIA_PROMPT: &str = "Criteria: ";

/// Print `label`, then read a single token from `input`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    output.write_all(label.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(first_token(&line).to_string())
}

/// Returns `given` if present, otherwise asks for it.
pub fn ask_unless_given<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    match given {
        Some(value) => Ok(value),
        None => ask(input, output, label),
    }
}

/// First whitespace-delimited token of `line`, or `""`.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
