//! Progression core: currency accounting, upgrade purchases and achievement
//! unlocks, with no presentation concerns.

pub mod achievements;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod snapshot;

pub use achievements::{Achievement, AchievementKind, AchievementTracker};
pub use catalog::{PurchaseResult, Upgrade, UpgradeCatalog};
pub use config::GameConfig;
pub use engine::{ActionReport, ProgressionEngine, PurchaseReport};
pub use error::{ConfigError, ProgressionError};
pub use ledger::{AppliedAction, CurrencyLedger};
pub use snapshot::{AchievementView, Snapshot, UpgradeView};
