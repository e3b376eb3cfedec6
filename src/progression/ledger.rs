//! Currency ledger: the running balance and the yield of a single action.

use serde::Serialize;
use tracing::trace;

use super::error::{ConfigError, ProgressionError};

/// Yield of one action before any upgrade is owned.
pub const BASE_YIELD: f64 = 1.0;

/// What a single action added to the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAction {
    /// Amount credited (the yield at call time).
    pub delta: f64,
    /// Balance after the credit.
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyLedger {
    /// Current balance. Never negative.
    total: f64,
    /// Added per action. Never below [`BASE_YIELD`].
    yield_per_action: f64,
    /// Sum of every credit, unaffected by spending.
    lifetime_earned: f64,
    actions_performed: u64,
}

impl CurrencyLedger {
    pub fn new() -> Self {
        Self {
            total: 0.0,
            yield_per_action: BASE_YIELD,
            lifetime_earned: 0.0,
            actions_performed: 0,
        }
    }

    /// Ledger opening with a given balance and yield.
    pub fn with_opening(total: f64, yield_per_action: f64) -> Result<Self, ConfigError> {
        if !total.is_finite() || total < 0.0 {
            return Err(ConfigError::NegativeStartingTotal(total));
        }
        if !yield_per_action.is_finite() || yield_per_action < BASE_YIELD {
            return Err(ConfigError::StartingYieldTooLow(yield_per_action));
        }
        Ok(Self {
            total,
            yield_per_action,
            ..Self::new()
        })
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn yield_per_action(&self) -> f64 {
        self.yield_per_action
    }

    pub fn lifetime_earned(&self) -> f64 {
        self.lifetime_earned
    }

    pub fn actions_performed(&self) -> u64 {
        self.actions_performed
    }

    pub fn can_afford(&self, amount: f64) -> bool {
        self.total >= amount
    }

    /// Credit one action's yield. Always succeeds.
    pub fn apply_action(&mut self) -> AppliedAction {
        let delta = self.yield_per_action;
        self.deposit(delta);
        self.actions_performed += 1;
        trace!(delta, total = self.total, "action applied");
        AppliedAction {
            delta,
            total: self.total,
        }
    }

    /// Add `amount` to the balance. Returns the new balance.
    pub fn credit(&mut self, amount: f64) -> Result<f64, ProgressionError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ProgressionError::InvalidAmount(amount));
        }
        self.deposit(amount);
        Ok(self.total)
    }

    /// Remove `amount` from the balance. Returns the new balance.
    ///
    /// Refuses anything that would take the balance below zero, whatever the
    /// caller has already checked.
    pub fn debit(&mut self, amount: f64) -> Result<f64, ProgressionError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ProgressionError::InvalidAmount(amount));
        }
        if amount > self.total {
            return Err(ProgressionError::InsufficientFunds {
                price: amount,
                shortfall: amount - self.total,
            });
        }
        self.total -= amount;
        Ok(self.total)
    }

    /// Raise the per-action yield. Returns the new yield.
    pub fn increase_yield(&mut self, delta: f64) -> Result<f64, ProgressionError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ProgressionError::InvalidYieldDelta(delta));
        }
        self.yield_per_action += delta;
        Ok(self.yield_per_action)
    }

    fn deposit(&mut self, amount: f64) {
        self.total += amount;
        self.lifetime_earned += amount;
    }
}

impl Default for CurrencyLedger {
    fn default() -> Self {
        Self::new()
    }
}
