//! Achievement tracker: milestone definitions and their monotonic unlock state.

use std::collections::HashSet;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Which metric an achievement's threshold is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementKind {
    /// Current currency balance.
    TotalCurrency,
    /// Sum of owned counts across the upgrade catalog.
    TotalUpgradesOwned,
}

/// Inputs to one evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub currency_total: f64,
    pub upgrades_owned: u64,
}

impl Metrics {
    pub fn value_for(&self, kind: AchievementKind) -> f64 {
        match kind {
            AchievementKind::TotalCurrency => self.currency_total,
            AchievementKind::TotalUpgradesOwned => self.upgrades_owned as f64,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDef {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub threshold: f64,
    pub kind: AchievementKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub threshold: f64,
    pub kind: AchievementKind,
    /// Once set, never cleared.
    pub unlocked: bool,
}

impl Achievement {
    fn from_def(def: AchievementDef) -> Self {
        Self {
            id: def.id,
            display_name: def.display_name,
            description: def.description,
            threshold: def.threshold,
            kind: def.kind,
            unlocked: false,
        }
    }

    pub fn is_met(&self, metrics: &Metrics) -> bool {
        metrics.value_for(self.kind) >= self.threshold
    }

    /// Fraction of the way to the threshold, in `0.0..=1.0`.
    pub fn progress_ratio(&self, metrics: &Metrics) -> f64 {
        if self.unlocked {
            return 1.0;
        }
        (metrics.value_for(self.kind) / self.threshold).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
}

impl AchievementTracker {
    pub fn new(defs: Vec<AchievementDef>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if def.id.is_empty() {
                return Err(ConfigError::EmptyId("achievement"));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(ConfigError::DuplicateAchievement(def.id.clone()));
            }
            if !def.threshold.is_finite() || def.threshold <= 0.0 {
                return Err(ConfigError::NonPositive {
                    id: def.id.clone(),
                    field: "threshold",
                    value: def.threshold,
                });
            }
        }
        Ok(Self {
            achievements: defs.into_iter().map(Achievement::from_def).collect(),
        })
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Start one evaluation pass against the given metrics.
    ///
    /// The returned iterator walks the catalog in declaration order and yields
    /// every locked achievement whose threshold is met, marking it unlocked as
    /// it is yielded. Achievements already unlocked are skipped, so a pass never
    /// re-emits one. Dropping the iterator early leaves the rest untouched for
    /// the next pass.
    pub fn evaluate(&mut self, currency_total: f64, total_upgrades_owned: u64) -> Unlocks<'_> {
        Unlocks {
            pending: self.achievements.iter_mut(),
            metrics: Metrics {
                currency_total,
                upgrades_owned: total_upgrades_owned,
            },
        }
    }
}

/// A single evaluation pass. See [`AchievementTracker::evaluate`].
pub struct Unlocks<'a> {
    pending: std::slice::IterMut<'a, Achievement>,
    metrics: Metrics,
}

impl<'a> Iterator for Unlocks<'a> {
    type Item = &'a Achievement;

    fn next(&mut self) -> Option<Self::Item> {
        for achievement in self.pending.by_ref() {
            if achievement.unlocked || !achievement.is_met(&self.metrics) {
                continue;
            }
            achievement.unlocked = true;
            let achievement: &'a Achievement = achievement;
            return Some(achievement);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pending.size_hint().1)
    }
}

impl FusedIterator for Unlocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, kind: AchievementKind, threshold: f64) -> AchievementDef {
        AchievementDef {
            id: id.into(),
            display_name: id.into(),
            description: String::new(),
            threshold,
            kind,
        }
    }

    fn tracker() -> AchievementTracker {
        AchievementTracker::new(vec![
            def("first", AchievementKind::TotalCurrency, 1.0),
            def("hundred", AchievementKind::TotalCurrency, 100.0),
            def("master", AchievementKind::TotalUpgradesOwned, 5.0),
        ])
        .unwrap()
    }

    fn ids(unlocks: Unlocks<'_>) -> Vec<String> {
        unlocks.map(|a| a.id.clone()).collect()
    }

    #[test]
    fn nothing_unlocks_below_thresholds() {
        let mut t = tracker();
        assert!(ids(t.evaluate(0.0, 0)).is_empty());
        assert_eq!(t.unlocked_count(), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut t = tracker();
        assert_eq!(ids(t.evaluate(1.0, 0)), vec!["first"]);
    }

    #[test]
    fn multiple_unlocks_in_declaration_order() {
        let mut t = tracker();
        assert_eq!(ids(t.evaluate(150.0, 5)), vec!["first", "hundred", "master"]);
    }

    #[test]
    fn second_pass_emits_nothing_new() {
        let mut t = tracker();
        assert_eq!(ids(t.evaluate(150.0, 0)), vec!["first", "hundred"]);
        assert!(ids(t.evaluate(150.0, 0)).is_empty());
    }

    #[test]
    fn unlock_survives_metric_regression() {
        let mut t = tracker();
        let _ = ids(t.evaluate(100.0, 0));
        let _ = ids(t.evaluate(0.0, 0));
        assert!(t.achievements()[1].unlocked);
    }

    #[test]
    fn dropping_pass_early_leaves_rest_locked() {
        let mut t = tracker();
        let first = t.evaluate(150.0, 0).next().map(|a| a.id.clone());
        assert_eq!(first.as_deref(), Some("first"));
        assert!(!t.achievements()[1].unlocked);
        assert_eq!(ids(t.evaluate(150.0, 0)), vec!["hundred"]);
    }

    #[test]
    fn kind_selects_metric() {
        let mut t = tracker();
        // A large balance never satisfies an ownership achievement.
        assert!(!ids(t.evaluate(1e9, 4)).contains(&"master".to_string()));
        assert_eq!(ids(t.evaluate(0.0, 5)), vec!["master"]);
    }

    #[test]
    fn progress_ratio_is_capped_and_full_once_unlocked() {
        let mut t = tracker();
        let m = Metrics { currency_total: 50.0, upgrades_owned: 0 };
        assert!((t.achievements()[1].progress_ratio(&m) - 0.5).abs() < 1e-9);
        assert_eq!(t.achievements()[0].progress_ratio(&m), 1.0);

        let _ = ids(t.evaluate(100.0, 0));
        let regressed = Metrics { currency_total: 0.0, upgrades_owned: 0 };
        assert_eq!(t.achievements()[1].progress_ratio(&regressed), 1.0);
    }

    #[test]
    fn invalid_definitions_rejected() {
        assert!(matches!(
            AchievementTracker::new(vec![def("x", AchievementKind::TotalCurrency, 0.0)]),
            Err(ConfigError::NonPositive { field: "threshold", .. })
        ));
        assert!(matches!(
            AchievementTracker::new(vec![
                def("x", AchievementKind::TotalCurrency, 1.0),
                def("x", AchievementKind::TotalUpgradesOwned, 1.0),
            ]),
            Err(ConfigError::DuplicateAchievement(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = AchievementKind> {
        prop_oneof![
            Just(AchievementKind::TotalCurrency),
            Just(AchievementKind::TotalUpgradesOwned),
        ]
    }

    proptest! {
        #[test]
        fn prop_no_id_emitted_twice(
            specs in prop::collection::vec((arb_kind(), 1.0f64..1_000.0), 1..8),
            passes in prop::collection::vec((0.0f64..2_000.0, 0u64..20), 1..10),
        ) {
            let defs = specs
                .iter()
                .enumerate()
                .map(|(i, (kind, threshold))| AchievementDef {
                    id: format!("a{}", i),
                    display_name: String::new(),
                    description: String::new(),
                    threshold: *threshold,
                    kind: *kind,
                })
                .collect();
            let mut t = AchievementTracker::new(defs).unwrap();
            let mut emitted = HashSet::new();
            for (currency, owned) in passes {
                let before: Vec<bool> = t.achievements().iter().map(|a| a.unlocked).collect();
                let ids: Vec<String> = t.evaluate(currency, owned).map(|a| a.id.clone()).collect();
                for id in ids {
                    prop_assert!(emitted.insert(id.clone()), "{} emitted twice", id);
                }
                // Unlocks are monotonic even when metrics go down.
                for (was, now) in before.iter().zip(t.achievements().iter().map(|a| a.unlocked)) {
                    prop_assert!(!*was || now);
                }
            }
            prop_assert_eq!(emitted.len(), t.unlocked_count());
        }
    }
}
