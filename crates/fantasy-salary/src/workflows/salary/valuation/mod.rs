mod config;
mod rules;

pub use config::ScoringConfig;

use std::sync::Arc;

use tracing::warn;

use super::domain::{BattingPerformance, PlayerSalary, Roster, RosterPlayer};

/// Failure confined to a single roster player's valuation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValuationError {
    #[error("scoring config has no weight for '{0}'")]
    MissingWeight(String),
    #[error("scoring config has no bonus for '{0}'")]
    MissingBonus(String),
    #[error("computed salary {0} is not a finite number")]
    NonFinite(f64),
}

/// Pure roster-to-salary evaluator over injected, read-only inputs.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    roster: Arc<Roster>,
    scoring: Arc<ScoringConfig>,
}

impl ValuationEngine {
    pub fn new(roster: Arc<Roster>, scoring: Arc<ScoringConfig>) -> Self {
        Self { roster, scoring }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// One result per roster player, in roster order. Failures are embedded
    /// per player and never cut the batch short.
    pub fn evaluate(&self, performances: &[BattingPerformance]) -> Vec<PlayerSalary> {
        self.roster
            .players()
            .iter()
            .map(|player| match self.value_player(player, performances) {
                Ok(salary) => salary,
                Err(err) => {
                    warn!(player_id = %player.id, error = %err, "player valuation failed");
                    PlayerSalary::Failed {
                        player_id: player.id.clone(),
                        player_name: player.name.clone(),
                        error: err.to_string(),
                    }
                }
            })
            .collect()
    }

    fn value_player(
        &self,
        player: &RosterPlayer,
        performances: &[BattingPerformance],
    ) -> Result<PlayerSalary, ValuationError> {
        let performance = rules::find_performance(&player.name, performances);

        let final_salary = match performance {
            Some(record) => player.base_salary + rules::performance_bonus(record, &self.scoring)?,
            None => player.base_salary,
        };

        if !final_salary.is_finite() {
            return Err(ValuationError::NonFinite(final_salary));
        }

        Ok(PlayerSalary::Valued {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            base_salary: player.base_salary,
            performance: performance.cloned(),
            final_salary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn performance(name: &str, runs: u32, fours: u32, sixes: u32) -> BattingPerformance {
        BattingPerformance {
            name: name.to_string(),
            runs,
            balls: 40,
            fours,
            sixes,
            strike_rate: 110.0,
        }
    }

    fn engine(players: Vec<RosterPlayer>, scoring: ScoringConfig) -> ValuationEngine {
        ValuationEngine::new(Arc::new(Roster::new(players)), Arc::new(scoring))
    }

    #[test]
    fn unmatched_player_keeps_base_salary() {
        let engine = engine(
            vec![RosterPlayer::new("z1", "Zeta Player", 1_000.0)],
            ScoringConfig::default(),
        );

        let results = engine.evaluate(&[performance("Virat Kohli", 80, 5, 2)]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].final_salary(), Some(1_000.0));
        assert!(results[0].performance().is_none());
    }

    #[test]
    fn matched_player_adds_weighted_bonus() {
        let engine = engine(
            vec![RosterPlayer::new("player1", "Virat Kohli", 50_000.0)],
            ScoringConfig::default(),
        );

        let results = engine.evaluate(&[performance("Kohli", 55, 4, 1)]);

        let expected = 50_000.0 + 55.0 * 100.0 + 4.0 * 50.0 + 100.0 + 2_000.0;
        assert_eq!(results[0].final_salary(), Some(expected));
        assert_eq!(
            results[0].performance().map(|p| p.name.as_str()),
            Some("Kohli")
        );
    }

    #[test]
    fn missing_weight_fails_only_matched_players() {
        let scoring = ScoringConfig::new(BTreeMap::new(), BTreeMap::new());
        let engine = engine(
            vec![
                RosterPlayer::new("p1", "Steve Smith", 42_000.0),
                RosterPlayer::new("p2", "Travis Head", 40_000.0),
                RosterPlayer::new("p3", "Pat Cummins", 46_000.0),
            ],
            scoring,
        );

        let results = engine.evaluate(&[performance("Travis Head", 10, 1, 0)]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].final_salary(), Some(42_000.0));
        assert!(results[1].is_failed());
        assert_eq!(results[1].player_id(), "p2");
        assert_eq!(results[2].final_salary(), Some(46_000.0));

        match &results[1] {
            PlayerSalary::Failed { error, .. } => assert!(error.contains("runs")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_salary_is_isolated() {
        let mut scoring = ScoringConfig::default();
        scoring.weights.insert("runs".to_string(), f64::INFINITY);
        let engine = engine(
            vec![
                RosterPlayer::new("p1", "Rohit Sharma", 48_000.0),
                RosterPlayer::new("p2", "Jasprit Bumrah", 45_000.0),
            ],
            scoring,
        );

        let results = engine.evaluate(&[
            performance("Rohit Sharma", 12, 0, 0),
            performance("Jasprit Bumrah", 0, 0, 0),
        ]);

        assert!(results[0].is_failed());
        assert!(results[1].is_failed());
    }

    #[test]
    fn produces_one_result_per_roster_player() {
        let roster = Roster::default();
        let engine = ValuationEngine::new(Arc::new(roster.clone()), Arc::new(ScoringConfig::default()));

        for performances in [
            vec![],
            vec![performance("Rohit Sharma", 40, 2, 1)],
            roster
                .players()
                .iter()
                .map(|player| performance(&player.name, 30, 3, 1))
                .collect(),
        ] {
            let results = engine.evaluate(&performances);
            assert_eq!(results.len(), roster.len());
            let ids: Vec<_> = results.iter().map(PlayerSalary::player_id).collect();
            let expected: Vec<_> = roster.players().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let engine = ValuationEngine::new(
            Arc::new(Roster::default()),
            Arc::new(ScoringConfig::default()),
        );
        let performances = vec![
            performance("Travis Head", 137, 15, 4),
            performance("Steve Smith", 4, 0, 0),
        ];

        assert_eq!(engine.evaluate(&performances), engine.evaluate(&performances));
    }
}
