//! Derive yearly contributions from Social Security wage caps
//!
//! Assumes a high earner who hits the SS cap every year:
//! - SS wages = cap, taxed at the SS rate
//! - Medicare wages = min(cap x multiple, ceiling), taxed at the Medicare rate
//! - Employer matches the employee tax, so contribution = employee tax x 2

use super::{YearRecord, YearRecords};
use crate::assumptions::WageCapTable;
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Payroll tax parameters (employee portion)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxParams {
    /// Social Security rate (0.062 = 6.2%)
    #[serde(default = "default_ss_rate")]
    pub ss_rate: f64,

    /// Medicare rate (0.0145 = 1.45%)
    #[serde(default = "default_medicare_rate")]
    pub medicare_rate: f64,

    /// Medicare wages as a multiple of the SS cap
    #[serde(default = "default_medicare_wage_multiple")]
    pub medicare_wage_multiple: f64,

    /// Upper bound on Medicare wages
    #[serde(default = "default_medicare_wage_ceiling")]
    pub medicare_wage_ceiling: f64,
}

fn default_ss_rate() -> f64 { 0.062 }
fn default_medicare_rate() -> f64 { 0.0145 }
fn default_medicare_wage_multiple() -> f64 { 1.5 }
fn default_medicare_wage_ceiling() -> f64 { 200_000.0 }

impl Default for TaxParams {
    fn default() -> Self {
        Self {
            ss_rate: 0.062,
            medicare_rate: 0.0145,
            medicare_wage_multiple: 1.5,
            medicare_wage_ceiling: 200_000.0,
        }
    }
}

impl TaxParams {
    /// Employee tax for a year at the given wage cap
    pub fn employee_tax(&self, wage_cap: f64) -> f64 {
        let ss_tax = wage_cap * self.ss_rate;
        let medicare_wages = (wage_cap * self.medicare_wage_multiple).min(self.medicare_wage_ceiling);
        let medicare_tax = medicare_wages * self.medicare_rate;
        ss_tax + medicare_tax
    }

    /// Employee tax plus an equal employer match
    pub fn total_contribution(&self, wage_cap: f64) -> f64 {
        self.employee_tax(wage_cap) * 2.0
    }
}

/// Inclusive year filter; `None` bounds are open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    #[serde(default)]
    pub start: Option<i32>,
    #[serde(default)]
    pub end: Option<i32>,
}

impl YearRange {
    pub fn new(start: Option<i32>, end: Option<i32>) -> Result<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ProjectionError::InvalidYearRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start.map_or(true, |s| year >= s) && self.end.map_or(true, |e| year <= e)
    }
}

/// Build one record per wage-cap year inside `range`
pub fn contributions_from_wage_caps(
    caps: &WageCapTable,
    params: &TaxParams,
    range: YearRange,
) -> Result<YearRecords> {
    let records: Vec<YearRecord> = caps
        .iter()
        .filter(|(year, _)| range.contains(*year))
        .map(|(year, cap)| YearRecord {
            year,
            contribution: params.total_contribution(cap),
            wage_cap: Some(cap),
        })
        .collect();

    log::debug!("Derived {} contribution years from {} wage caps", records.len(), caps.len());
    YearRecords::new(records)
}
