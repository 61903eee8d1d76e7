use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "caesar",
    version,
    about = "Encrypt a line of text with a Caesar cipher"
)]
pub struct CaesarCli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    /// Exactly one key is accepted; anything else is a usage error, so the
    /// count is checked by the handler rather than by clap.
    #[arg(value_name = "KEY", help = "Shift key (decimal digits only)")]
    pub key: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(
    name = "cash",
    version,
    about = "Fewest coins needed to give back an amount of change"
)]
pub struct CashCli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "readability",
    version,
    about = "Estimate the US grade level of a text (Coleman-Liau)"
)]
pub struct ReadabilityCli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
