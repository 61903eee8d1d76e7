use clap::Parser;
use drills::cli::ReadabilityCli;
use drills::commands::{bootstrap, handle_readability};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = ReadabilityCli::parse();
    bootstrap()?;

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    Ok(handle_readability(&cli, &mut input, &mut out)?.into())
}
