//! Scorecard-driven salary generation.
//!
//! A request runs fetch, extract, and evaluate strictly in sequence. Only the
//! fetch awaits; the parsed document lives inside the synchronous extraction
//! step. Roster and scoring inputs are shared read-only snapshots.

pub mod domain;
pub mod fetcher;
pub mod router;
pub mod scorecard;
pub mod valuation;

pub use domain::{BattingPerformance, PlayerSalary, Roster, RosterPlayer};
pub use fetcher::{DocumentFetcher, FetchError, HttpDocumentFetcher};
pub use router::{salary_router, validate_match_url, GenerateSalariesRequest, SalaryRouteState};
pub use scorecard::{
    RowExtractionStrategy, ScorecardExtractor, ScorecardLayout, ScorecardParseError,
    SelectorRowStrategy,
};
pub use valuation::{ScoringConfig, ValuationEngine, ValuationError};

use tracing::{info, instrument};

/// Whole-request failure: nothing is returned for any player.
#[derive(Debug, thiserror::Error)]
pub enum SalaryGenerationError {
    #[error("could not fetch scorecard: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not parse scorecard: {0}")]
    Scorecard(#[from] ScorecardParseError),
}

/// Fetch, extract, and value pipeline.
pub struct SalaryGenerator<F> {
    fetcher: F,
    extractor: ScorecardExtractor,
    engine: ValuationEngine,
}

impl<F> SalaryGenerator<F>
where
    F: DocumentFetcher,
{
    pub fn new(fetcher: F, extractor: ScorecardExtractor, engine: ValuationEngine) -> Self {
        Self {
            fetcher,
            extractor,
            engine,
        }
    }

    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }

    #[instrument(skip(self), fields(strategy = self.extractor.strategy_name()))]
    pub async fn generate(&self, match_url: &str) -> Result<Vec<PlayerSalary>, SalaryGenerationError> {
        let html = self.fetcher.fetch(match_url).await?;
        self.generate_from_html(&html)
    }

    /// Extract and value an already retrieved scorecard page.
    pub fn generate_from_html(&self, html: &str) -> Result<Vec<PlayerSalary>, SalaryGenerationError> {
        let performances = self.extractor.extract(html)?;
        let salaries = self.engine.evaluate(&performances);

        let matched = salaries
            .iter()
            .filter(|salary| salary.performance().is_some())
            .count();
        let failed = salaries.iter().filter(|salary| salary.is_failed()).count();
        info!(
            rows = performances.len(),
            players = salaries.len(),
            matched,
            failed,
            "player salaries generated"
        );

        Ok(salaries)
    }
}
