use crate::domain::errors::PromptError;
use std::io::{BufRead, Write};

/// Writes `prompt` (if any) and reads one line without its line ending.
///
/// Input must be UTF-8; anything else surfaces as `PromptError::Io`.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: Option<&str>,
) -> Result<String, PromptError> {
    if let Some(p) = prompt {
        write!(out, "{}", p)?;
        out.flush()?;
    }
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(PromptError::Eof);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Re-prompts until the line parses as a finite number greater than zero.
pub fn read_positive_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: Option<&str>,
) -> Result<f32, PromptError> {
    loop {
        let line = read_line(input, out, prompt)?;
        match line.trim().parse::<f32>() {
            Ok(v) if v.is_finite() && v > 0.0 => return Ok(v),
            _ => tracing::debug!(input = %line, "rejected amount"),
        }
    }
}
