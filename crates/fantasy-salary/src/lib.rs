//! Fantasy cricket salary generation: scorecard scraping, roster matching, and
//! performance-weighted valuation behind a small HTTP surface.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
