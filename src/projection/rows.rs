use serde::Serialize;

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub year: i32,
    pub employee_tax: f64,
    pub employer_match: f64,
    pub total_contribution: f64,
    /// Fractional return applied this year (0.1588 = 15.88%)
    pub return_rate: f64,
    pub gain: f64,
    pub year_end_balance: f64,
}

impl ProjectionRow {
    pub fn return_rate_percent(&self) -> f64 {
        self.return_rate * 100.0
    }

    /// Balance the return was applied to
    pub fn balance_before_return(&self) -> f64 {
        self.year_end_balance - self.gain
    }
}

/// Headline figures over a full projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_contributed: f64,
    pub final_balance: f64,
    pub total_gain: f64,
}

impl ProjectionSummary {
    pub fn from_rows(rows: &[ProjectionRow]) -> Self {
        let total_contributed: f64 = rows.iter().map(|r| r.total_contribution).sum();
        let final_balance = rows.last().map(|r| r.year_end_balance).unwrap_or(0.0);
        Self {
            total_contributed,
            final_balance,
            total_gain: final_balance - total_contributed,
        }
    }
}
