//! CSV export of projection rows
//!
//! Amounts are written to two decimals; the return column is a percentage
//! to two decimals without a `%` sign.

use super::format::format_fixed2;
use crate::error::Result;
use crate::projection::ProjectionRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_CSV_FILE: &str = "retirement_calculation.csv";

pub const CSV_HEADERS: [&str; 7] = [
    "Year",
    "Employee Tax Paid",
    "Employer Match",
    "Total Contribution",
    "Annual Return %",
    "Investment Gain",
    "Year End Balance",
];

fn csv_record(row: &ProjectionRow) -> [String; 7] {
    [
        row.year.to_string(),
        format_fixed2(row.employee_tax),
        format_fixed2(row.employer_match),
        format_fixed2(row.total_contribution),
        format_fixed2(row.return_rate_percent()),
        format_fixed2(row.gain),
        format_fixed2(row.year_end_balance),
    ]
}

pub fn write_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.write_record(csv_record(row))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[ProjectionRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_csv<P: AsRef<Path>>(rows: &[ProjectionRow], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(rows, file)?;
    log::info!("Wrote {} rows to {}", rows.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ProjectionRow {
        ProjectionRow {
            year: 1973,
            employee_tax: 445.0,
            employer_match: 445.0,
            total_contribution: 890.0,
            return_rate: -0.1737,
            gain: -188.0059,
            year_end_balance: 894.3549,
        }
    }

    #[test]
    fn test_header_line() {
        let csv = to_csv_string(&[]).expect("Failed to write");
        assert_eq!(
            csv.lines().next(),
            Some("Year,Employee Tax Paid,Employer Match,Total Contribution,Annual Return %,Investment Gain,Year End Balance")
        );
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_data_line() {
        let csv = to_csv_string(&[sample_row()]).expect("Failed to write");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1973,445.00,445.00,890.00,-17.37,-188.01,894.35");
    }

    #[test]
    fn test_tied_amounts_round_up() {
        // 1980 employee tax at the default rates: 25900 x 6.2% + 38850 x 1.45%
        let row = ProjectionRow {
            year: 1980,
            employee_tax: 2169.125,
            employer_match: 2169.125,
            total_contribution: 4338.25,
            return_rate: 0.2585,
            gain: -0.125,
            year_end_balance: 7361.625,
        };
        let csv = to_csv_string(&[row]).expect("Failed to write");

        assert_eq!(csv.lines().nth(1), Some("1980,2169.13,2169.13,4338.25,25.85,-0.13,7361.63"));
    }

    #[test]
    fn test_export_to_file() {
        let path = std::env::temp_dir().join("payroll_projection_export_test.csv");
        export_csv(&[sample_row()], &path).expect("Failed to export");

        let written = std::fs::read_to_string(&path).expect("Failed to read back");
        assert!(written.starts_with("Year,"));
        assert!(written.contains("894.35"));
        let _ = std::fs::remove_file(&path);
    }
}
