//! Projection engine for the invested payroll tax balance

mod engine;
mod rows;

pub use engine::project;
pub use rows::{ProjectionRow, ProjectionSummary};

use crate::assumptions::Assumptions;
use crate::contribution::{contributions_from_wage_caps, TaxParams, YearRange};
use crate::error::Result;

/// Rows and headline figures for one run
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
    pub summary: ProjectionSummary,
}

/// Derive contributions from the wage caps and project them at the assumed returns
pub fn run_projection(
    assumptions: &Assumptions,
    params: &TaxParams,
    range: YearRange,
) -> Result<ProjectionResult> {
    let records = contributions_from_wage_caps(&assumptions.wage_caps, params, range)?;
    let rows = project(records.as_slice(), &assumptions.returns);
    let summary = ProjectionSummary::from_rows(&rows);

    log::info!(
        "Projected {} years: contributed {:.2}, final balance {:.2}",
        rows.len(),
        summary.total_contributed,
        summary.final_balance
    );

    Ok(ProjectionResult { rows, summary })
}
