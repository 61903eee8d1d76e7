use crate::cli::CashCli;
use crate::commands::{prompt, Status};
use crate::domain::constants::CHANGE_PROMPT;
use crate::domain::models::{ChangeReport, Config};
use crate::services::change::to_cents;
use crate::services::config::coin_system;
use crate::services::output::print_one;
use crate::services::prompt::read_positive_amount;
use std::io::{BufRead, Write};

pub fn handle_cash<R: BufRead, W: Write>(
    cli: &CashCli,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Status> {
    let coins = coin_system(config)?;
    let amount = read_positive_amount(input, out, prompt(cli.json, CHANGE_PROMPT))?;
    let cents = to_cents(amount);
    let (breakdown, strategy) = coins.make_change(cents);
    tracing::info!(cents, coins = breakdown.total, ?strategy, "change computed");

    let report = ChangeReport {
        amount,
        cents,
        coins: breakdown.total,
        breakdown: breakdown.coins,
        strategy,
    };
    print_one(out, cli.json, report, |r| {
        format!("You will need at least {} coins", r.coins)
    })?;
    Ok(Status::Success)
}
