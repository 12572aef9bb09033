use fantasy_salary::config::SalaryConfig;
use fantasy_salary::error::AppError;
use fantasy_salary::workflows::salary::{
    HttpDocumentFetcher, SalaryGenerator, ScorecardExtractor, ValuationEngine,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the roster and scoring snapshots once and wraps them in an engine.
pub(crate) fn load_engine(config: &SalaryConfig) -> Result<ValuationEngine, AppError> {
    let roster = config.load_roster()?;
    let scoring = config.load_scoring()?;

    let missing = scoring.missing_keys();
    if !missing.is_empty() {
        warn!(?missing, "scoring config is incomplete; matched players will report errors");
    }
    let negative = scoring.negative_entries();
    if !negative.is_empty() {
        warn!(?negative, "scoring config has negative entries; salaries may fall below base");
    }

    info!(players = roster.len(), "salary roster loaded");
    Ok(ValuationEngine::new(Arc::new(roster), Arc::new(scoring)))
}

pub(crate) fn build_generator(
    config: &SalaryConfig,
) -> Result<SalaryGenerator<HttpDocumentFetcher>, AppError> {
    let fetcher = HttpDocumentFetcher::from_config(config)
        .map_err(AppError::HttpClient)?;
    let engine = load_engine(config)?;
    Ok(SalaryGenerator::new(
        fetcher,
        ScorecardExtractor::default(),
        engine,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builtin_inputs_build_an_engine() {
        let engine = load_engine(&SalaryConfig::default()).expect("engine builds");
        assert_eq!(engine.roster().len(), 6);
        assert!(engine.scoring().missing_keys().is_empty());
    }

    #[test]
    fn unreadable_roster_is_a_config_error() {
        let config = SalaryConfig {
            roster_path: Some(PathBuf::from("./missing/roster.json")),
            ..SalaryConfig::default()
        };
        let err = build_generator(&config).err().expect("roster missing");
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn invalid_user_agent_is_a_client_setup_error() {
        let config = SalaryConfig {
            user_agent: "fantasy\r\nsalary".to_string(),
            ..SalaryConfig::default()
        };
        let err = build_generator(&config).err().expect("client rejected");
        assert!(matches!(err, AppError::HttpClient(_)), "got {err:?}");
        assert!(err.to_string().starts_with("http client setup failed"));
    }
}
