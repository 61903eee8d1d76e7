pub const CAESAR_USAGE: &str = "Usage: ./caesar key";
pub const PLAINTEXT_PROMPT: &str = "Plaintext: ";
pub const CHANGE_PROMPT: &str = "Change owed: ";
pub const TEXT_PROMPT: &str = "Text: ";

pub const ALPHABET_LEN: u8 = 26;

/// US coins, in cents, largest first.
pub const DEFAULT_DENOMINATIONS: [u64; 4] = [25, 10, 5, 1];

/// Largest coin a configured set may hold, in cents.
pub const MAX_DENOMINATION: u64 = 100_000;
/// Table slots the exact search may use for a non-canonical set.
pub const MAX_EXACT_WINDOW: u64 = 1_000_000;

pub const LOG_ENV: &str = "DRILLS_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
