//! Year-by-year breakdown table

use super::format::{format_currency, format_percent};
use crate::projection::ProjectionRow;

const COLUMNS: [&str; 7] = [
    "Year",
    "Employee Tax",
    "Employer Match",
    "Total Contribution",
    "Return %",
    "Investment Gain",
    "Year End Balance",
];

pub fn render_table(rows: &[ProjectionRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            [
                row.year.to_string(),
                format_currency(row.employee_tax),
                format_currency(row.employer_match),
                format_currency(row.total_contribution),
                format_percent(row.return_rate_percent()),
                format_currency(row.gain),
                format_currency(row.year_end_balance),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str("Year-by-Year Breakdown\n");

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:>w$}"))
        .collect();
    out.push_str(&format!("{}\n", header.join("  ")));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", rule.join("  ")));

    for line in &cells {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        out.push_str(&format!("{}\n", padded.join("  ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let rows = [ProjectionRow {
            year: 2008,
            employee_tax: 7224.0,
            employer_match: 7224.0,
            total_contribution: 14448.0,
            return_rate: -0.3849,
            gain: -123456.4,
            year_end_balance: 197298.6,
        }];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Year End Balance"));
        assert!(lines[3].contains("-38.49%"));
        assert!(lines[3].contains("-$123,456"));
        assert!(lines[3].contains("$197,299"));
        // columns are aligned
        assert_eq!(lines[1].len(), lines[3].len());
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 3);
    }
}
