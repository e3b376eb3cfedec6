//! Error types for the progression core.
use thiserror::Error;

/// Failures raised by ledger and catalog operations.
///
/// Every variant leaves the engine's state exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProgressionError {
    #[error("unknown upgrade: {0}")] UnknownUpgrade(String),
    #[error("insufficient funds: price {price}, short by {shortfall}")] InsufficientFunds { price: f64, shortfall: f64 },
    #[error("invalid amount: {0}")] InvalidAmount(f64),
    #[error("yield delta must be positive, got {0}")] InvalidYieldDelta(f64),
}

impl ProgressionError {
    /// True for conditions the player can cause and recover from.
    /// Everything else is an integration bug in the caller.
    pub fn is_player_facing(&self) -> bool {
        matches!(self, ProgressionError::InsufficientFunds { .. })
    }
}

/// Rejections while building catalogs or the starting ledger.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("empty {0} id")] EmptyId(&'static str),
    #[error("duplicate upgrade id: {0}")] DuplicateUpgrade(String),
    #[error("duplicate achievement id: {0}")] DuplicateAchievement(String),
    #[error("{field} of {id} must be positive, got {value}")] NonPositive { id: String, field: &'static str, value: f64 },
    #[error("starting total must be non-negative, got {0}")] NegativeStartingTotal(f64),
    #[error("starting yield must be at least 1, got {0}")] StartingYieldTooLow(f64),
    #[error("malformed config: {0}")] Json(#[from] serde_json::Error),
}
