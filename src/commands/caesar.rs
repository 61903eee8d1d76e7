use crate::cli::CaesarCli;
use crate::commands::{prompt, Status};
use crate::domain::constants::{CAESAR_USAGE, PLAINTEXT_PROMPT};
use crate::domain::models::CipherReport;
use crate::services::cipher::{encipher, parse_key};
use crate::services::output::print_one;
use crate::services::prompt::read_line;
use std::io::{BufRead, Write};

pub fn handle_caesar<R: BufRead, W: Write>(
    cli: &CaesarCli,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Status> {
    let key = match cli.key.as_slice() {
        [raw] => parse_key(raw).ok(),
        _ => None,
    };
    let Some(key) = key else {
        writeln!(out, "{}", CAESAR_USAGE)?;
        return Ok(Status::Usage);
    };
    tracing::debug!(key = key.get(), "shift key accepted");

    let plaintext = read_line(input, out, prompt(cli.json, PLAINTEXT_PROMPT))?;
    let ciphertext = encipher(&plaintext, key);
    let report = CipherReport {
        key,
        plaintext,
        ciphertext,
    };
    print_one(out, cli.json, report, |r| format!("ciphertext: {}", r.ciphertext))?;
    Ok(Status::Success)
}
