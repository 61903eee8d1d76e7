//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — keys, tallies, grade buckets and the `--json` report structs.
//! - `errors.rs` — typed errors surfaced by services.
//! - `constants.rs` — prompts, usage text and default denominations.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no stdin/stdout or filesystem side effects.
//!
//! ## Compatibility note
//! Report structs define the `--json` output shape. Keep field renames explicit.

pub mod constants;
pub mod errors;
pub mod models;
