use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ValuationError;

pub const RUNS: &str = "runs";
pub const FOURS: &str = "fours";
pub const SIXES: &str = "sixes";
pub const CENTURY: &str = "century";
pub const HALF_CENTURY: &str = "halfCentury";

/// Scoring weights (per metric) and flat threshold bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub bonuses: BTreeMap<String, f64>,
}

impl ScoringConfig {
    pub fn new(weights: BTreeMap<String, f64>, bonuses: BTreeMap<String, f64>) -> Self {
        Self { weights, bonuses }
    }

    pub fn weight(&self, metric: &str) -> Result<f64, ValuationError> {
        lookup(&self.weights, metric).ok_or_else(|| ValuationError::MissingWeight(metric.to_string()))
    }

    pub fn bonus(&self, threshold: &str) -> Result<f64, ValuationError> {
        lookup(&self.bonuses, threshold)
            .ok_or_else(|| ValuationError::MissingBonus(threshold.to_string()))
    }

    /// Keys the formula reads that are absent from this config.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let weights = [RUNS, FOURS, SIXES]
            .into_iter()
            .filter(|key| !self.weights.contains_key(*key));
        let bonuses = [CENTURY, HALF_CENTURY]
            .into_iter()
            .filter(|key| !self.bonuses.contains_key(*key));
        weights.chain(bonuses).collect()
    }

    /// Entries that would let a matched player fall below base salary.
    pub fn negative_entries(&self) -> Vec<&str> {
        self.weights
            .iter()
            .chain(self.bonuses.iter())
            .filter(|(_, value)| **value < 0.0)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

fn lookup(map: &BTreeMap<String, f64>, key: &str) -> Option<f64> {
    map.get(key).copied()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = [(RUNS, 100.0), (FOURS, 50.0), (SIXES, 100.0)];
        let bonuses = [(CENTURY, 5_000.0), (HALF_CENTURY, 2_000.0)];
        Self {
            weights: weights
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            bonuses: bonuses
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_bonus_keys() {
        let config: ScoringConfig = serde_json::from_str(
            r#"{"weights":{"runs":10,"fours":5,"sixes":8},"bonuses":{"century":500,"halfCentury":200}}"#,
        )
        .expect("valid scoring json");

        assert_eq!(config.weight(RUNS).expect("runs"), 10.0);
        assert_eq!(config.bonus(HALF_CENTURY).expect("half century"), 200.0);
        assert!(config.missing_keys().is_empty());
    }

    #[test]
    fn reports_missing_and_negative_entries() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"weights":{"runs":-1}}"#).expect("partial json");

        assert_eq!(
            config.missing_keys(),
            vec![FOURS, SIXES, CENTURY, HALF_CENTURY]
        );
        assert_eq!(config.negative_entries(), vec!["runs"]);
        assert!(matches!(
            config.bonus(CENTURY),
            Err(ValuationError::MissingBonus(key)) if key == CENTURY
        ));
    }
}
