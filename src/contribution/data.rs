use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// One year's combined payroll tax contribution (employee + employer match)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    pub contribution: f64,
    /// Wage cap the contribution was derived from, when known
    #[serde(default)]
    pub wage_cap: Option<f64>,
}

impl YearRecord {
    pub fn new(year: i32, contribution: f64) -> Self {
        Self { year, contribution, wage_cap: None }
    }

    /// Employee half of the contribution
    pub fn employee_tax(&self) -> f64 {
        self.contribution / 2.0
    }

    /// Employer half of the contribution
    pub fn employer_match(&self) -> f64 {
        self.contribution / 2.0
    }
}

/// Records in strictly ascending year order with non-negative contributions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearRecords {
    records: Vec<YearRecord>,
}

impl YearRecords {
    pub fn new(records: Vec<YearRecord>) -> Result<Self> {
        for record in &records {
            if !record.contribution.is_finite() || record.contribution < 0.0 {
                return Err(ProjectionError::InvalidContribution {
                    year: record.year,
                    amount: record.contribution,
                });
            }
        }
        for pair in records.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(ProjectionError::YearOutOfOrder {
                    previous: pair[0].year,
                    year: pair[1].year,
                });
            }
        }
        Ok(Self { records })
    }

    pub fn as_slice(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.records.iter()
    }

    pub fn total_contribution(&self) -> f64 {
        self.records.iter().map(|r| r.contribution).sum()
    }
}

impl<'a> IntoIterator for &'a YearRecords {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
