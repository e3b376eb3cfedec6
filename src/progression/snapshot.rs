//! Read-only view of the engine for presentation.

use serde::Serialize;

use super::achievements::{AchievementKind, AchievementTracker, Metrics};
use super::catalog::UpgradeCatalog;
use super::ledger::CurrencyLedger;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeView {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub price_now: f64,
    pub yield_delta: f64,
    pub owned_count: u32,
    pub affordable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementView {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub threshold: f64,
    pub kind: AchievementKind,
    pub unlocked: bool,
    pub progress_ratio: f64,
}

/// Everything a renderer needs, detached from engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub total: f64,
    pub yield_per_action: f64,
    pub lifetime_earned: f64,
    pub actions_performed: u64,
    pub total_upgrades_owned: u64,
    pub unlocked_count: usize,
    pub upgrades: Vec<UpgradeView>,
    pub achievements: Vec<AchievementView>,
}

impl Snapshot {
    pub(crate) fn capture(
        ledger: &CurrencyLedger,
        catalog: &UpgradeCatalog,
        tracker: &AchievementTracker,
    ) -> Self {
        let metrics = Metrics {
            currency_total: ledger.total(),
            upgrades_owned: catalog.total_owned(),
        };
        let upgrades = catalog
            .upgrades()
            .iter()
            .map(|u| {
                let price_now = u.price();
                UpgradeView {
                    id: u.id.clone(),
                    display_name: u.display_name.clone(),
                    description: u.description.clone(),
                    price_now,
                    yield_delta: u.yield_delta,
                    owned_count: u.owned_count,
                    affordable: ledger.can_afford(price_now),
                }
            })
            .collect();
        let achievements = tracker
            .achievements()
            .iter()
            .map(|a| AchievementView {
                id: a.id.clone(),
                display_name: a.display_name.clone(),
                description: a.description.clone(),
                threshold: a.threshold,
                kind: a.kind,
                unlocked: a.unlocked,
                progress_ratio: a.progress_ratio(&metrics),
            })
            .collect();

        Self {
            total: ledger.total(),
            yield_per_action: ledger.yield_per_action(),
            lifetime_earned: ledger.lifetime_earned(),
            actions_performed: ledger.actions_performed(),
            total_upgrades_owned: metrics.upgrades_owned,
            unlocked_count: tracker.unlocked_count(),
            upgrades,
            achievements,
        }
    }

    pub fn upgrade(&self, id: &str) -> Option<&UpgradeView> {
        self.upgrades.iter().find(|u| u.id == id)
    }

    pub fn achievement(&self, id: &str) -> Option<&AchievementView> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
