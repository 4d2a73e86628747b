//! Text rendering of the year-end balance over time

use super::format::{format_currency, format_millions};
use crate::projection::ProjectionRow;

pub const DEFAULT_CHART_WIDTH: usize = 50;

/// One bar per year, scaled so the largest balance spans `width` cells
pub fn render_chart(rows: &[ProjectionRow], width: usize) -> String {
    let mut out = String::new();
    out.push_str("Investment Growth Over Time\n");

    let max_balance = rows
        .iter()
        .map(|r| r.year_end_balance)
        .fold(0.0_f64, f64::max);

    for row in rows {
        let cells = if max_balance > 0.0 {
            ((row.year_end_balance.max(0.0) / max_balance) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} {:>7} |{:<width$}| {}\n",
            row.year,
            format_millions(row.year_end_balance),
            "#".repeat(cells),
            format_currency(row.year_end_balance),
        ));
    }

    out
}
