//! Coin change for an amount of money.
//!
//! Greedy reduction (largest coin first) is only optimal for canonical coin
//! systems. The default US set {25, 10, 5, 1} is canonical. Configured sets
//! are checked once in [`CoinSystem::new`] and fall back to the exact search
//! when they are not.

use crate::domain::constants::{DEFAULT_DENOMINATIONS, MAX_DENOMINATION, MAX_EXACT_WINDOW};
use crate::domain::errors::ConfigError;
use crate::domain::models::{CoinBreakdown, CoinCount, CoinStrategy};

/// `round(amount * 100)`, ties away from zero, computed in single precision.
pub fn to_cents(amount: f32) -> u64 {
    (amount * 100.0).round() as u64
}

fn greedy_total(denominations: &[u64], cents: u64) -> u64 {
    let mut remaining = cents;
    denominations.iter().fold(0, |total, &d| {
        let count = remaining / d;
        remaining -= count * d;
        total + count
    })
}

/// If greedy is ever suboptimal, the smallest counterexample is below the
/// sum of the two largest coins (Kozen & Zaks). One table up to that bound
/// is compared against greedy at every index.
fn check_canonical(denominations: &[u64]) -> bool {
    let largest = denominations[0];
    let second = denominations.get(1).copied().unwrap_or(largest);
    let size = (largest + second) as usize;

    let mut best = vec![u64::MAX; size];
    best[0] = 0;
    for value in 1..size {
        for &d in denominations {
            let d = d as usize;
            if d <= value && best[value - d] != u64::MAX {
                best[value] = best[value].min(best[value - d] + 1);
            }
        }
        if best[value] != greedy_total(denominations, value as u64) {
            return false;
        }
    }
    true
}

/// Largest coin times the second largest; the exact search never needs a
/// table wider than this.
fn exact_window(denominations: &[u64]) -> u64 {
    let second = denominations.get(1).copied().unwrap_or(1);
    denominations[0].saturating_mul(second)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSystem {
    denominations: Vec<u64>,
    canonical: bool,
}

impl Default for CoinSystem {
    fn default() -> Self {
        Self {
            denominations: DEFAULT_DENOMINATIONS.to_vec(),
            canonical: true,
        }
    }
}

impl CoinSystem {
    /// Sorted largest first with duplicates removed. A 1-cent coin is
    /// required so that every amount can be paid.
    ///
    /// Coins above `MAX_DENOMINATION` are rejected, and so are non-canonical
    /// sets whose exact search would need more than `MAX_EXACT_WINDOW` slots.
    pub fn new(mut denominations: Vec<u64>) -> Result<Self, ConfigError> {
        if denominations.is_empty() {
            return Err(ConfigError::InvalidDenominations(
                "at least one denomination is required".to_string(),
            ));
        }
        if denominations.contains(&0) {
            return Err(ConfigError::InvalidDenominations(
                "denominations must be positive".to_string(),
            ));
        }
        if !denominations.contains(&1) {
            return Err(ConfigError::InvalidDenominations(
                "a 1-cent denomination is required".to_string(),
            ));
        }
        denominations.sort_unstable_by(|a, b| b.cmp(a));
        denominations.dedup();

        if denominations[0] > MAX_DENOMINATION {
            return Err(ConfigError::InvalidDenominations(format!(
                "{} exceeds the largest allowed coin of {} cents",
                denominations[0], MAX_DENOMINATION
            )));
        }
        let canonical = check_canonical(&denominations);
        if !canonical && exact_window(&denominations) > MAX_EXACT_WINDOW {
            return Err(ConfigError::InvalidDenominations(format!(
                "{:?} is not canonical and too large for exact search",
                denominations
            )));
        }
        Ok(Self {
            denominations,
            canonical,
        })
    }

    pub fn denominations(&self) -> &[u64] {
        &self.denominations
    }

    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    pub fn greedy(&self, cents: u64) -> CoinBreakdown {
        let mut remaining = cents;
        let mut total = 0;
        let coins = self
            .denominations
            .iter()
            .map(|&denomination| {
                let count = remaining / denomination;
                remaining -= count * denomination;
                total += count;
                CoinCount {
                    denomination,
                    count,
                }
            })
            .collect();
        CoinBreakdown { total, coins }
    }

    /// Exact minimum coin count.
    ///
    /// Greedy already is exact for canonical systems. Otherwise dynamic
    /// programming: some optimal solution pays everything above
    /// `largest * second` with the largest coin, so the table never grows
    /// beyond that window no matter how big `cents` is.
    pub fn optimal(&self, cents: u64) -> CoinBreakdown {
        if self.canonical {
            return self.greedy(cents);
        }
        let largest = self.denominations[0];
        let window = exact_window(&self.denominations);

        let (bulk, rest) = if cents > window {
            let rest = (cents - window) % largest + window;
            ((cents - rest) / largest, rest)
        } else {
            (0, cents)
        };

        let size = rest as usize + 1;
        let mut best = vec![u64::MAX; size];
        let mut last = vec![0u64; size];
        best[0] = 0;
        for value in 1..size {
            for &d in &self.denominations {
                let d_us = d as usize;
                if d_us <= value && best[value - d_us] != u64::MAX {
                    let candidate = best[value - d_us] + 1;
                    if candidate < best[value] {
                        best[value] = candidate;
                        last[value] = d;
                    }
                }
            }
        }

        let mut coins: Vec<CoinCount> = self
            .denominations
            .iter()
            .map(|&denomination| CoinCount {
                denomination,
                count: 0,
            })
            .collect();
        coins[0].count = bulk;
        let mut value = rest as usize;
        while value > 0 {
            let d = last[value];
            if let Some(slot) = coins.iter_mut().find(|c| c.denomination == d) {
                slot.count += 1;
            }
            value -= d as usize;
        }

        CoinBreakdown {
            total: bulk + best[rest as usize],
            coins,
        }
    }

    pub fn make_change(&self, cents: u64) -> (CoinBreakdown, CoinStrategy) {
        if self.canonical {
            (self.greedy(cents), CoinStrategy::Greedy)
        } else {
            tracing::warn!(
                denominations = ?self.denominations,
                "coin system is not canonical, using exact search"
            );
            (self.optimal(cents), CoinStrategy::Optimal)
        }
    }
}
