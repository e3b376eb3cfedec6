//! Upgrade catalog: definitions, owned counts, and the purchase transition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{ConfigError, ProgressionError};
use super::ledger::CurrencyLedger;

/// Price multiplier applied per unit already owned.
pub const PRICE_GROWTH: f64 = 1.15;

/// Price of the next unit of an upgrade: `floor(base_cost × 1.15^owned)`.
pub fn price_at(base_cost: f64, owned_count: u32) -> f64 {
    let exponent = owned_count.min(i32::MAX as u32) as i32;
    (base_cost * PRICE_GROWTH.powi(exponent)).floor()
}

/// Static description of a purchasable upgrade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeDef {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub base_cost: f64,
    /// Added to the per-action yield on every purchase.
    pub yield_delta: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub base_cost: f64,
    pub yield_delta: f64,
    pub owned_count: u32,
}

impl Upgrade {
    fn from_def(def: UpgradeDef) -> Self {
        Self {
            id: def.id,
            display_name: def.display_name,
            description: def.description,
            base_cost: def.base_cost,
            yield_delta: def.yield_delta,
            owned_count: 0,
        }
    }

    /// Current price, derived from the owned count.
    pub fn price(&self) -> f64 {
        price_at(self.base_cost, self.owned_count)
    }
}

/// Outcome of a successful purchase.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub upgrade_id: String,
    pub display_name: String,
    /// Owned count after the purchase.
    pub owned_count: u32,
    pub price_paid: f64,
    /// Per-action yield after the purchase.
    pub yield_per_action: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeCatalog {
    upgrades: Vec<Upgrade>,
}

impl UpgradeCatalog {
    /// Build a catalog in declaration order. Ids must be unique and non-empty,
    /// costs and deltas positive.
    pub fn new(defs: Vec<UpgradeDef>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if def.id.is_empty() {
                return Err(ConfigError::EmptyId("upgrade"));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(ConfigError::DuplicateUpgrade(def.id.clone()));
            }
            check_positive(&def.id, "base cost", def.base_cost)?;
            check_positive(&def.id, "yield delta", def.yield_delta)?;
        }
        Ok(Self {
            upgrades: defs.into_iter().map(Upgrade::from_def).collect(),
        })
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn get(&self, upgrade_id: &str) -> Result<&Upgrade, ProgressionError> {
        self.upgrades
            .iter()
            .find(|u| u.id == upgrade_id)
            .ok_or_else(|| ProgressionError::UnknownUpgrade(upgrade_id.to_string()))
    }

    pub fn price_of(&self, upgrade_id: &str) -> Result<f64, ProgressionError> {
        self.get(upgrade_id).map(Upgrade::price)
    }

    /// Sum of owned counts across every upgrade.
    pub fn total_owned(&self) -> u64 {
        self.upgrades.iter().map(|u| u.owned_count as u64).sum()
    }

    /// Buy one unit of `upgrade_id`, paying from `ledger`.
    ///
    /// All checks happen before the first write: on `Err` neither the ledger
    /// nor the catalog has changed. On `Ok` the debit, the yield increase and
    /// the owned increment have all been applied.
    pub fn purchase(
        &mut self,
        upgrade_id: &str,
        ledger: &mut CurrencyLedger,
    ) -> Result<PurchaseResult, ProgressionError> {
        let idx = self
            .upgrades
            .iter()
            .position(|u| u.id == upgrade_id)
            .ok_or_else(|| ProgressionError::UnknownUpgrade(upgrade_id.to_string()))?;

        let price = self.upgrades[idx].price();
        let yield_delta = self.upgrades[idx].yield_delta;
        if !ledger.can_afford(price) {
            let shortfall = price - ledger.total();
            debug!(upgrade = upgrade_id, price, shortfall, "purchase rejected");
            return Err(ProgressionError::InsufficientFunds { price, shortfall });
        }
        if !yield_delta.is_finite() || yield_delta <= 0.0 {
            return Err(ProgressionError::InvalidYieldDelta(yield_delta));
        }

        ledger.debit(price)?;
        let yield_per_action = ledger.increase_yield(yield_delta)?;
        let upgrade = &mut self.upgrades[idx];
        upgrade.owned_count += 1;

        info!(
            upgrade = upgrade_id,
            owned = upgrade.owned_count,
            price,
            yield_per_action,
            "upgrade purchased"
        );
        Ok(PurchaseResult {
            upgrade_id: upgrade.id.clone(),
            display_name: upgrade.display_name.clone(),
            owned_count: upgrade.owned_count,
            price_paid: price,
            yield_per_action,
        })
    }
}

fn check_positive(id: &str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            id: id.to_string(),
            field,
            value,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_price_non_decreasing_in_owned(
            base_cost in 1.0f64..100_000.0,
            owned in 0u32..150,
        ) {
            prop_assert!(price_at(base_cost, owned + 1) >= price_at(base_cost, owned));
        }

        #[test]
        fn prop_price_is_whole_number(
            base_cost in 1.0f64..100_000.0,
            owned in 0u32..150,
        ) {
            let p = price_at(base_cost, owned);
            prop_assert_eq!(p, p.floor());
        }

        #[test]
        fn prop_price_at_zero_is_floor_of_base(base_cost in 1.0f64..100_000.0) {
            prop_assert_eq!(price_at(base_cost, 0), base_cost.floor());
        }

        #[test]
        fn prop_failed_purchase_is_a_no_op(
            total in 0.0f64..9.99,
            owned_before in 0u32..3,
        ) {
            let mut c = UpgradeCatalog::new(vec![UpgradeDef {
                id: "cursor".into(),
                display_name: "Cursor".into(),
                description: String::new(),
                base_cost: 10.0,
                yield_delta: 1.0,
            }]).unwrap();
            c.upgrades[0].owned_count = owned_before;
            let price = c.price_of("cursor").unwrap();
            let mut ledger = CurrencyLedger::with_opening(total, 1.0).unwrap();

            let err = c.purchase("cursor", &mut ledger).unwrap_err();
            prop_assert_eq!(err, ProgressionError::InsufficientFunds {
                price,
                shortfall: price - total,
            });
            prop_assert_eq!(ledger.total(), total);
            prop_assert_eq!(ledger.yield_per_action(), 1.0);
            prop_assert_eq!(c.upgrades[0].owned_count, owned_before);
        }
    }
}
