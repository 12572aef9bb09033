mod layout;
mod normalizer;

pub use layout::{ScorecardLayout, SelectorRowStrategy};

use scraper::Html;
use tracing::debug;

use super::domain::BattingPerformance;

/// Structural extraction failure. Selectors track a layout this service does
/// not control, so a mismatch surfaces here instead of as an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardParseError {
    #[error(
        "no batting rows matched the '{strategy}' layout; the scorecard structure may have changed"
    )]
    NoRows { strategy: &'static str },
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Pluggable walk over a parsed document yielding batting rows in document
/// order.
pub trait RowExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract_rows(&self, document: &Html) -> Result<Vec<BattingPerformance>, ScorecardParseError>;
}

/// Parses raw HTML and applies a row strategy, rejecting empty walks.
pub struct ScorecardExtractor {
    strategy: Box<dyn RowExtractionStrategy>,
}

impl ScorecardExtractor {
    pub fn new(strategy: impl RowExtractionStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn extract(&self, html: &str) -> Result<Vec<BattingPerformance>, ScorecardParseError> {
        let document = Html::parse_document(html);
        let rows = self.strategy.extract_rows(&document)?;

        if rows.is_empty() {
            return Err(ScorecardParseError::NoRows {
                strategy: self.strategy.name(),
            });
        }

        debug!(strategy = self.strategy.name(), rows = rows.len(), "scorecard rows extracted");
        Ok(rows)
    }
}

impl Default for ScorecardExtractor {
    fn default() -> Self {
        Self::new(SelectorRowStrategy::default())
    }
}

impl std::fmt::Debug for ScorecardExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorecardExtractor")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
