//! Project Social Security and Medicare taxes invested at historical S&P 500 returns
//!
//! Prints summary figures and a balance chart; optionally the detailed table
//! and a CSV export.

use anyhow::{Context, Result};
use clap::Parser;
use payroll_projection::{
    assumptions::Assumptions,
    projection::run_projection,
    report::{export_csv, render_report, DEFAULT_CSV_FILE},
    RunConfig,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "payroll-projection", version)]
#[command(about = "What your payroll taxes would have grown to in the S&P 500")]
struct Cli {
    /// JSON run configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV of annual returns (`year,return`)
    #[arg(long)]
    returns: Option<PathBuf>,

    /// CSV of Social Security wage caps (`year,cap`)
    #[arg(long)]
    wage_caps: Option<PathBuf>,

    /// First year to include
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year to include
    #[arg(long)]
    end_year: Option<i32>,

    /// Show the year-by-year table
    #[arg(long)]
    table: bool,

    /// Hide the balance chart
    #[arg(long)]
    no_chart: bool,

    /// Write the CSV export (default file: retirement_calculation.csv)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if self.returns.is_some() {
            config.returns_file = self.returns;
        }
        if self.wage_caps.is_some() {
            config.wage_caps_file = self.wage_caps;
        }
        if self.start_year.is_some() {
            config.start_year = self.start_year;
        }
        if self.end_year.is_some() {
            config.end_year = self.end_year;
        }
        if self.csv.is_some() {
            config.csv_path = self.csv;
        }
        config.show_table |= self.table;
        if self.no_chart {
            config.show_chart = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let config = Cli::parse().into_config()?;

    let assumptions = Assumptions::with_overrides(
        config.returns_file.as_deref(),
        config.wage_caps_file.as_deref(),
    )
    .context("Failed to load assumptions")?;

    let range = config.year_range()?;
    let result = run_projection(&assumptions, &config.tax, range)?;

    print!("{}", render_report(&result, config.report_options()));

    if let Some(path) = &config.csv_path {
        export_csv(&result.rows, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nCSV written to {}", path.display());
    }

    log::info!("Total time: {:?}", start.elapsed());
    Ok(())
}
