//! Startup prompt for the torus size.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::types::DEFAULT_TORUS_SIZE;

pub const PROMPT: &str = "Enter the size of the donut (recommended 3 and fullscreen): ";

/// Parse a torus size the way `%d` would.
///
/// Leading whitespace is skipped, an optional sign and the leading digits are
/// taken, and anything after them is ignored. Only positive sizes are
/// accepted.
pub fn parse_torus_size(input: &str) -> Option<u32> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return None;
    }
    digits[..end].parse::<u32>().ok().filter(|n| *n > 0)
}

/// Print the prompt, read one line and fall back to the default size.
pub fn read_torus_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    // Non-UTF-8 input falls back to the default like any other bad input.
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        log::warn!("no size given, using {}", DEFAULT_TORUS_SIZE);
        return Ok(DEFAULT_TORUS_SIZE);
    }

    let line = String::from_utf8_lossy(&bytes);
    Ok(match parse_torus_size(&line) {
        Some(size) => size,
        None => {
            log::warn!(
                "invalid size {:?}, using {}",
                line.trim_end(),
                DEFAULT_TORUS_SIZE
            );
            DEFAULT_TORUS_SIZE
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_torus_size("3"), Some(3));
        assert_eq!(parse_torus_size("  7\n"), Some(7));
        assert_eq!(parse_torus_size("+5"), Some(5));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_torus_size("6 please"), Some(6));
        assert_eq!(parse_torus_size("4.9"), Some(4));
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert_eq!(parse_torus_size(""), None);
        assert_eq!(parse_torus_size("big"), None);
        assert_eq!(parse_torus_size("0"), None);
        assert_eq!(parse_torus_size("-3"), None);
        assert_eq!(parse_torus_size("+"), None);
        assert_eq!(parse_torus_size("99999999999"), None);
    }
}
