//! Service layer containing the computations and side-effect helpers.
//!
//! ## Service map
//! - `cipher.rs` — key validation and letter rotation.
//! - `change.rs` — coin systems, greedy and exact change.
//! - `readability.rs` — letter/word/sentence tally and Coleman-Liau grade.
//! - `prompt.rs` — line-oriented stdin prompts.
//! - `config.rs` — optional TOML config loading.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Computations are pure; handlers pass readers and writers in.
//! - Keep command handlers thin; delegate to services.

pub mod change;
pub mod cipher;
pub mod config;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod readability;
