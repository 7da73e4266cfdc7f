//! Interactive confirmation

use std::io::{BufRead, Write};

/// Question shown before deleting.
const CONFIRM_PROMPT: &str = "Do you want to remove these branches? (y/n): ";

/// Ask for confirmation and read a single line of input.
///
/// Only an exact `y` (surrounding whitespace ignored) confirms. End of input
/// and unreadable input count as a refusal.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<bool> {
    write!(out, "\n{CONFIRM_PROMPT}")?;
    out.flush()?;

    let mut response = String::new();
    if let Err(e) = input.read_line(&mut response) {
        tracing::warn!(error = %e, "failed to read confirmation, treating as no");
        return Ok(false);
    }

    Ok(is_confirmation(&response))
}

fn is_confirmation(response: &str) -> bool {
    response.trim() == "y"
}
