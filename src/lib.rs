//! Three small exercises, each shipped as its own binary:
//!
//! - `caesar` — rotate ASCII letters by a numeric key.
//! - `cash` — fewest coins for an amount of change.
//! - `readability` — Coleman-Liau grade for a block of text.
//!
//! Binaries in `src/bin/` only parse arguments and wire stdio; handlers live
//! in `commands/`, pure computations in `services/`, shared types in `domain/`.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use domain::errors::{CipherError, ConfigError, PromptError, ReadabilityError};
pub use domain::models::{
    ChangeReport, CipherReport, CoinBreakdown, CoinCount, CoinStrategy, Config, GradeBucket,
    JsonOut, ReadabilityReport, ShiftKey, Tally,
};
pub use services::change::CoinSystem;
