//! Interactive prompting and input parsing.
//!
//! The parsing rules are pure functions; the `read_*` wrappers own the
//! prompt/re-prompt loop over stdin. An empty numeric entry means "unknown".

use std::io::{self, Write};

/// Prompt for an optional float; an empty line means unknown.
///
/// Re-prompts until the line is empty or parses as a number.
///
/// # Errors
///
/// Returns an error when stdin is closed or unreadable.
pub fn read_float(prompt: &str) -> io::Result<Option<f64>> {
    loop {
        let line = read_line(prompt)?;
        if let Ok(value) = parse_float_entry(&line) {
            return Ok(value);
        }
        println!("Invalid input! Please enter a number or press Enter to skip.");
    }
}

/// Prompt for a menu choice within `[min, max]`.
///
/// # Errors
///
/// Returns an error when stdin is closed or unreadable.
pub fn read_choice(prompt: &str, min: u32, max: u32) -> io::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        match parse_choice(&line, min, max) {
            Ok(choice) => return Ok(choice),
            Err(message) => println!("{message}"),
        }
    }
}

/// Ask a yes/no question; only a literal `yes` (case-insensitive) confirms.
///
/// # Errors
///
/// Returns an error when stdin is closed or unreadable.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let line = read_line(prompt)?;
    Ok(is_yes(&line))
}

/// Block until the user presses Enter.
///
/// # Errors
///
/// Returns an error when stdin is closed or unreadable.
pub fn pause() -> io::Result<()> {
    read_line("Press Enter to continue...")?;
    Ok(())
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line)
}

/// Parse one line of numeric input; an empty line maps to unknown.
fn parse_float_entry(raw: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some)
}

/// Parse a bounded integer menu choice.
fn parse_choice(raw: &str, min: u32, max: u32) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| "Invalid input! Please enter a valid number.".to_string())?;
    if value < min {
        return Err(format!("Value must be at least {min}"));
    }
    if value > max {
        return Err(format!("Value must be at most {max}"));
    }
    Ok(value)
}

fn is_yes(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}
