//! Command handler layer.
//!
//! One handler per binary. Handlers take the parsed CLI, a reader and a
//! writer so they can be driven from tests without a terminal.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate computation to `services/*`.
//! - Keep prompts and output text stable.

pub mod caesar;
pub mod cash;
pub mod readability;

pub use caesar::handle_caesar;
pub use cash::handle_cash;
pub use readability::handle_readability;

use crate::domain::models::Config;
use crate::services::config::load_config;
use crate::services::logging::init_logging;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Usage,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Usage => ExitCode::from(1),
        }
    }
}

/// Loads config and installs the log subscriber. Shared by every binary.
pub fn bootstrap() -> anyhow::Result<Config> {
    let config = load_config()?;
    init_logging(config.log_level.as_deref());
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Prompts are suppressed in JSON mode so stdout stays parseable.
pub(crate) fn prompt(json: bool, text: &str) -> Option<&str> {
    if json {
        None
    } else {
        Some(text)
    }
}
