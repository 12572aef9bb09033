use scraper::{ElementRef, Html, Selector};

use super::normalizer::{clean_player_name, parse_count, parse_rate};
use super::{RowExtractionStrategy, ScorecardParseError};
use crate::workflows::salary::domain::BattingPerformance;

/// Selector strings and 1-based column positions describing one batting table
/// layout. Upstream markup changes only require a new layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardLayout {
    pub name: &'static str,
    pub row_selector: String,
    pub name_selector: String,
    pub stat_cell_selector: String,
    pub runs_column: usize,
    pub balls_column: usize,
    pub fours_column: usize,
    pub sixes_column: usize,
    pub strike_rate_column: usize,
}

impl ScorecardLayout {
    /// Batting table on an ESPNcricinfo full scorecard page.
    pub fn cricinfo() -> Self {
        Self {
            name: "cricinfo-batting",
            row_selector: "div.ds-p-0 > div > table.ds-table > tbody > tr".to_string(),
            name_selector: "td:nth-child(1) a span".to_string(),
            stat_cell_selector: "td.ds-text-right".to_string(),
            runs_column: 3,
            balls_column: 4,
            fours_column: 6,
            sixes_column: 7,
            strike_rate_column: 8,
        }
    }
}

impl Default for ScorecardLayout {
    fn default() -> Self {
        Self::cricinfo()
    }
}

struct CompiledLayout {
    rows: Selector,
    name: Selector,
    stat_cell: Selector,
    runs: Selector,
    balls: Selector,
    fours: Selector,
    sixes: Selector,
    strike_rate: Selector,
}

fn compile(selector: &str) -> Result<Selector, ScorecardParseError> {
    Selector::parse(selector).map_err(|err| ScorecardParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    })
}

fn column(index: usize) -> Result<Selector, ScorecardParseError> {
    compile(&format!("td:nth-child({index})"))
}

impl CompiledLayout {
    fn new(layout: &ScorecardLayout) -> Result<Self, ScorecardParseError> {
        Ok(Self {
            rows: compile(&layout.row_selector)?,
            name: compile(&layout.name_selector)?,
            stat_cell: compile(&layout.stat_cell_selector)?,
            runs: column(layout.runs_column)?,
            balls: column(layout.balls_column)?,
            fours: column(layout.fours_column)?,
            sixes: column(layout.sixes_column)?,
            strike_rate: column(layout.strike_rate_column)?,
        })
    }
}

/// Structural row walker driven by a [`ScorecardLayout`].
#[derive(Debug, Clone, Default)]
pub struct SelectorRowStrategy {
    layout: ScorecardLayout,
}

impl SelectorRowStrategy {
    pub fn new(layout: ScorecardLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ScorecardLayout {
        &self.layout
    }
}

impl RowExtractionStrategy for SelectorRowStrategy {
    fn name(&self) -> &'static str {
        self.layout.name
    }

    fn extract_rows(&self, document: &Html) -> Result<Vec<BattingPerformance>, ScorecardParseError> {
        let compiled = CompiledLayout::new(&self.layout)?;
        let mut rows = Vec::new();

        for row in document.select(&compiled.rows) {
            let name = clean_player_name(&cell_text(row, &compiled.name));
            if name.is_empty() || row.select(&compiled.stat_cell).next().is_none() {
                continue;
            }

            rows.push(BattingPerformance {
                name,
                runs: parse_count(&cell_text(row, &compiled.runs)),
                balls: parse_count(&cell_text(row, &compiled.balls)),
                fours: parse_count(&cell_text(row, &compiled.fours)),
                sixes: parse_count(&cell_text(row, &compiled.sixes)),
                strike_rate: parse_rate(&cell_text(row, &compiled.strike_rate)),
            });
        }

        Ok(rows)
    }
}

/// Trimmed text of the first match that carries any. Empty icon or badge
/// spans are skipped; nested spans are not read twice.
fn cell_text(row: ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}
