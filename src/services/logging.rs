use crate::domain::constants::{DEFAULT_LOG_LEVEL, LOG_ENV};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only prompts and results.
///
/// Level comes from `DRILLS_LOG`, then the config file, then `warn`.
pub fn init_logging(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        // a second init in the same process keeps the first subscriber
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        init_logging(Some("debug"));
        init_logging(Some("not a level ["));
        init_logging(None);
        tracing::debug!("still logging");
    }
}
