//! Game configuration: starting ledger values and the two static catalogs.

use serde::{Deserialize, Serialize};

use super::achievements::{AchievementDef, AchievementKind, AchievementTracker};
use super::catalog::{UpgradeCatalog, UpgradeDef};
use super::error::ConfigError;
use super::ledger::{CurrencyLedger, BASE_YIELD};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default)]
    pub starting_total: f64,
    #[serde(default = "default_starting_yield")]
    pub starting_yield: f64,
    pub upgrades: Vec<UpgradeDef>,
    pub achievements: Vec<AchievementDef>,
}

fn default_starting_yield() -> f64 {
    BASE_YIELD
}

impl GameConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constraint the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Build the three state containers described by this config.
    pub(crate) fn build(
        &self,
    ) -> Result<(CurrencyLedger, UpgradeCatalog, AchievementTracker), ConfigError> {
        let ledger = CurrencyLedger::with_opening(self.starting_total, self.starting_yield)?;
        let catalog = UpgradeCatalog::new(self.upgrades.clone())?;
        let tracker = AchievementTracker::new(self.achievements.clone())?;
        Ok((ledger, catalog, tracker))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_total: 0.0,
            starting_yield: BASE_YIELD,
            upgrades: default_upgrades(),
            achievements: default_achievements(),
        }
    }
}

fn upgrade(id: &str, name: &str, description: &str, base_cost: f64, yield_delta: f64) -> UpgradeDef {
    UpgradeDef {
        id: id.into(),
        display_name: name.into(),
        description: description.into(),
        base_cost,
        yield_delta,
    }
}

fn default_upgrades() -> Vec<UpgradeDef> {
    vec![
        upgrade("cursor", "Cursor", "Sharper clicking, +1 per click", 10.0, 1.0),
        upgrade("hand", "Hand", "+2 per click", 50.0, 2.0),
        upgrade("robot", "Robot", "+5 per click", 200.0, 5.0),
        upgrade("factory", "Factory", "+10 per click", 500.0, 10.0),
        upgrade("rocket", "Rocket", "+25 per click", 1_500.0, 25.0),
        upgrade("galaxy", "Galaxy", "+100 per click", 10_000.0, 100.0),
    ]
}

fn achievement(
    id: &str,
    name: &str,
    description: &str,
    threshold: f64,
    kind: AchievementKind,
) -> AchievementDef {
    AchievementDef {
        id: id.into(),
        display_name: name.into(),
        description: description.into(),
        threshold,
        kind,
    }
}

fn default_achievements() -> Vec<AchievementDef> {
    use AchievementKind::*;
    vec![
        achievement("first", "First Click", "Click for the first time", 1.0, TotalCurrency),
        achievement("hundred", "Hundred", "Hold 100 cookies", 100.0, TotalCurrency),
        achievement("thousand", "Thousand", "Hold 1,000 cookies", 1_000.0, TotalCurrency),
        achievement("master", "Click Master", "Own 5 upgrades", 5.0, TotalUpgradesOwned),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upgrades.len(), 6);
        assert_eq!(config.achievements.len(), 4);
        assert_eq!(config.upgrades[0].id, "cursor");
        assert_eq!(config.upgrades[0].base_cost, 10.0);
    }

    #[test]
    fn from_json_fills_starting_defaults() {
        let json = r#"{
            "upgrades": [
                {"id": "cursor", "displayName": "Cursor", "description": "", "baseCost": 10, "yieldDelta": 1}
            ],
            "achievements": [
                {"id": "master", "displayName": "Master", "description": "", "threshold": 5, "kind": "TOTAL_UPGRADES_OWNED"}
            ]
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.starting_total, 0.0);
        assert_eq!(config.starting_yield, 1.0);
        assert_eq!(config.achievements[0].kind, AchievementKind::TotalUpgradesOwned);
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(matches!(GameConfig::from_json("{ not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        let json = r#"{
            "startingYield": 0.5,
            "upgrades": [],
            "achievements": []
        }"#;
        assert!(matches!(
            GameConfig::from_json(json),
            Err(ConfigError::StartingYieldTooLow(_))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
