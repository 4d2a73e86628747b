//! Payroll Projection - what-if growth of payroll taxes invested in the market
//!
//! This library provides:
//! - Historical S&P 500 return and Social Security wage cap tables
//! - Derivation of yearly employee + employer payroll tax contributions
//! - A year-by-year compounding projection of the invested balance
//! - Text reports (summary, chart, detailed table) and CSV export

pub mod error;
pub mod config;
pub mod assumptions;
pub mod contribution;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use config::RunConfig;
pub use assumptions::{ReturnTable, WageCapTable};
pub use contribution::{TaxParams, YearRecord, YearRecords};
pub use projection::{project, ProjectionRow, ProjectionSummary};
