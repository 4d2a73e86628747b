//! Presentation of projection results: summary, chart, table and CSV export

pub mod format;
pub mod csv_export;
mod table;
mod chart;

pub use format::{format_currency, format_fixed2, format_millions, format_percent};
pub use csv_export::{export_csv, to_csv_string, write_csv, CSV_HEADERS, DEFAULT_CSV_FILE};
pub use table::render_table;
pub use chart::{render_chart, DEFAULT_CHART_WIDTH};

use crate::projection::{ProjectionResult, ProjectionSummary};

/// Which report sections to include
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub show_chart: bool,
    pub show_table: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { show_chart: true, show_table: false }
    }
}

pub fn render_summary(summary: &ProjectionSummary) -> String {
    let cards = [
        ("Total Contributed", summary.total_contributed, "Employee + Employer Match"),
        ("Final Balance", summary.final_balance, "With S&P 500 Returns"),
        ("Total Gain", summary.total_gain, "Investment Growth"),
    ];

    let mut out = String::new();
    for (title, value, caption) in cards {
        out.push_str(&format!("{:<18} {:>16}  ({})\n", title, format_currency(value), caption));
    }
    out
}

pub fn render_report(result: &ProjectionResult, options: ReportOptions) -> String {
    let mut out = String::new();
    out.push_str("Social Security & Medicare Tax Investment Calculator\n\n");
    out.push_str(&render_summary(&result.summary));

    if options.show_chart {
        out.push('\n');
        out.push_str(&render_chart(&result.rows, DEFAULT_CHART_WIDTH));
    }
    if options.show_table {
        out.push('\n');
        out.push_str(&render_table(&result.rows));
    }

    out.push_str(
        "\n* Assumes both employee and employer contributions were invested in the S&P 500 \
         at historical returns. Past performance does not guarantee future results.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_cards() {
        let summary = ProjectionSummary {
            total_contributed: 1056.0,
            final_balance: 894.39,
            total_gain: -161.61,
        };
        let text = render_summary(&summary);

        assert!(text.contains("Total Contributed"));
        assert!(text.contains("$1,056"));
        assert!(text.contains("$894"));
        assert!(text.contains("-$162"));
    }

    #[test]
    fn test_table_only_when_requested() {
        let result = ProjectionResult { rows: Vec::new(), summary: ProjectionSummary::default() };

        let hidden = render_report(&result, ReportOptions::default());
        assert!(!hidden.contains("Year-by-Year Breakdown"));
        assert!(hidden.contains("Investment Growth Over Time"));

        let shown = render_report(&result, ReportOptions { show_chart: false, show_table: true });
        assert!(shown.contains("Year-by-Year Breakdown"));
        assert!(!shown.contains("Investment Growth Over Time"));
    }
}
