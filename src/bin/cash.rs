use clap::Parser;
use drills::cli::CashCli;
use drills::commands::{bootstrap, handle_cash};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = CashCli::parse();
    let config = bootstrap()?;

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    Ok(handle_cash(&cli, &config, &mut input, &mut out)?.into())
}
