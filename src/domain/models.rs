use crate::domain::constants::ALPHABET_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of `~/.config/drills/config.toml`. Every key is optional.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub change: ChangeConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChangeConfig {
    /// Coin values in cents. Defaults to 25/10/5/1 when absent.
    #[serde(default)]
    pub denominations: Option<Vec<u64>>,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Rotation applied to letters, already reduced modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub fn new(raw: u64) -> Self {
        Self((raw % u64::from(ALPHABET_LEN)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The key that undoes this one.
    pub fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub letters: usize,
    pub words: usize,
    pub sentences: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBucket {
    BeforeGrade1,
    Grade(u8),
    Grade16Plus,
}

impl fmt::Display for GradeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeBucket::BeforeGrade1 => write!(f, "Before Grade 1"),
            GradeBucket::Grade(n) => write!(f, "Grade {}", n),
            GradeBucket::Grade16Plus => write!(f, "Grade 16+"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinStrategy {
    Greedy,
    Optimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinCount {
    pub denomination: u64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoinBreakdown {
    pub total: u64,
    pub coins: Vec<CoinCount>,
}

#[derive(Debug, Serialize)]
pub struct CipherReport {
    pub key: ShiftKey,
    pub plaintext: String,
    pub ciphertext: String,
}

#[derive(Debug, Serialize)]
pub struct ChangeReport {
    pub amount: f32,
    pub cents: u64,
    pub coins: u64,
    pub breakdown: Vec<CoinCount>,
    pub strategy: CoinStrategy,
}

#[derive(Debug, Serialize)]
pub struct ReadabilityReport {
    #[serde(flatten)]
    pub tally: Tally,
    pub index: f64,
    pub grade: i64,
    pub label: String,
}
