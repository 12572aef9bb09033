use super::config::{ScoringConfig, CENTURY, FOURS, HALF_CENTURY, RUNS, SIXES};
use super::ValuationError;
use crate::workflows::salary::domain::BattingPerformance;

pub(crate) const CENTURY_RUNS: u32 = 100;
pub(crate) const HALF_CENTURY_RUNS: u32 = 50;

/// First record whose name contains, or is contained by, the roster name.
pub(crate) fn find_performance<'a>(
    roster_name: &str,
    performances: &'a [BattingPerformance],
) -> Option<&'a BattingPerformance> {
    performances
        .iter()
        .find(|record| roster_name.contains(&record.name) || record.name.contains(roster_name))
}

/// Weighted stat bonus plus the single highest milestone bonus reached.
pub(crate) fn performance_bonus(
    performance: &BattingPerformance,
    config: &ScoringConfig,
) -> Result<f64, ValuationError> {
    let mut bonus = f64::from(performance.runs) * config.weight(RUNS)?
        + f64::from(performance.fours) * config.weight(FOURS)?
        + f64::from(performance.sixes) * config.weight(SIXES)?;

    if performance.runs >= CENTURY_RUNS {
        bonus += config.bonus(CENTURY)?;
    } else if performance.runs >= HALF_CENTURY_RUNS {
        bonus += config.bonus(HALF_CENTURY)?;
    }

    Ok(bonus)
}
