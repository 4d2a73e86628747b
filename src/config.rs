//! Run configuration, optionally loaded from a JSON file

use crate::contribution::{TaxParams, YearRange};
use crate::error::Result;
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub tax: TaxParams,

    /// First year to include (inclusive)
    #[serde(default)]
    pub start_year: Option<i32>,

    /// Last year to include (inclusive)
    #[serde(default)]
    pub end_year: Option<i32>,

    /// CSV override for annual returns (`year,return`)
    #[serde(default)]
    pub returns_file: Option<PathBuf>,

    /// CSV override for wage caps (`year,cap`)
    #[serde(default)]
    pub wage_caps_file: Option<PathBuf>,

    #[serde(default)]
    pub show_table: bool,

    #[serde(default = "default_true")]
    pub show_chart: bool,

    /// Where to write the CSV export, if anywhere
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
}

fn default_true() -> bool { true }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tax: TaxParams::default(),
            start_year: None,
            end_year: None,
            returns_file: None,
            wage_caps_file: None,
            show_table: false,
            show_chart: true,
            csv_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.start_year, self.end_year)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            show_chart: self.show_chart,
            show_table: self.show_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_empty_json_is_default() {
        let config = RunConfig::from_json_str("{}").expect("parse");

        assert_eq!(config.tax, TaxParams::default());
        assert!(config.show_chart);
        assert!(!config.show_table);
        assert!(config.csv_path.is_none());
    }

    #[test]
    fn test_partial_json() {
        let config = RunConfig::from_json_str(
            r#"{"start_year": 1990, "show_table": true, "tax": {"medicare_wage_multiple": 2.0}}"#,
        )
        .expect("parse");

        assert_eq!(config.start_year, Some(1990));
        assert!(config.show_table);
        assert_eq!(config.tax.medicare_wage_multiple, 2.0);
        assert_eq!(config.tax.ss_rate, 0.062);
        assert!(config.year_range().expect("valid").contains(1990));
        assert!(!config.year_range().expect("valid").contains(1989));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(RunConfig::from_json_str("{"), Err(ProjectionError::Config(_))));
    }
}
