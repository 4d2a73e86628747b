//! Year-by-year compounding of contributions at annual returns

use super::ProjectionRow;
use crate::assumptions::ReturnTable;
use crate::contribution::YearRecord;

/// Project a running balance over `records`.
///
/// Each year the contribution is added first, then that year's return is
/// applied to the whole balance. Records must be in ascending year order
/// (see [`crate::YearRecords`]). Years missing from `returns` earn 0%.
/// No rounding is applied.
pub fn project(records: &[YearRecord], returns: &ReturnTable) -> Vec<ProjectionRow> {
    let mut rows = Vec::with_capacity(records.len());
    let mut balance = 0.0;

    for record in records {
        balance += record.contribution;

        let return_rate = returns.get(record.year).unwrap_or_else(|| {
            log::debug!("No return for {}, using 0%", record.year);
            0.0
        });
        let year_end_balance = balance * (1.0 + return_rate);
        let gain = year_end_balance - balance;

        rows.push(ProjectionRow {
            year: record.year,
            employee_tax: record.employee_tax(),
            employer_match: record.employer_match(),
            total_contribution: record.contribution,
            return_rate,
            gain,
            year_end_balance,
        });

        balance = year_end_balance;
    }

    rows
}
