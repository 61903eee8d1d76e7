use clap::error::ErrorKind;
use clap::Parser;
use drills::cli::CaesarCli;
use drills::commands::{bootstrap, handle_caesar, Status};
use drills::domain::constants::CAESAR_USAGE;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match CaesarCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            // unknown flags such as `-3` are malformed keys too
            println!("{}", CAESAR_USAGE);
            return Ok(Status::Usage.into());
        }
    };
    bootstrap()?;

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    Ok(handle_caesar(&cli, &mut input, &mut out)?.into())
}
