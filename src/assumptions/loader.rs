//! Load assumption table overrides from CSV
//!
//! Returns file: `year,return` (fractional, e.g. -0.1737)
//! Wage caps file: `year,cap`

use super::{ReturnTable, WageCapTable};
use crate::error::{ProjectionError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ReturnRow {
    year: i32,
    #[serde(rename = "return")]
    rate: f64,
}

#[derive(Debug, Deserialize)]
struct WageCapRow {
    year: i32,
    cap: f64,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader)
}

pub fn load_returns_from_reader<R: Read>(reader: R) -> Result<ReturnTable> {
    let mut rdr = csv_reader(reader);
    let mut rates = Vec::new();
    for row in rdr.deserialize() {
        let row: ReturnRow = row?;
        if !row.rate.is_finite() {
            return Err(ProjectionError::InvalidReturn { year: row.year, rate: row.rate });
        }
        rates.push((row.year, row.rate));
    }
    log::debug!("Loaded {} annual returns", rates.len());
    Ok(ReturnTable::from_loaded(&rates))
}

pub fn load_returns<P: AsRef<Path>>(path: P) -> Result<ReturnTable> {
    let file = File::open(path.as_ref())?;
    log::info!("Loading returns from {}", path.as_ref().display());
    load_returns_from_reader(file)
}

pub fn load_wage_caps_from_reader<R: Read>(reader: R) -> Result<WageCapTable> {
    let mut rdr = csv_reader(reader);
    let mut caps = Vec::new();
    for row in rdr.deserialize() {
        let row: WageCapRow = row?;
        caps.push((row.year, row.cap));
    }
    log::debug!("Loaded {} wage caps", caps.len());
    Ok(WageCapTable::from_loaded(&caps))
}

pub fn load_wage_caps<P: AsRef<Path>>(path: P) -> Result<WageCapTable> {
    let file = File::open(path.as_ref())?;
    log::info!("Loading wage caps from {}", path.as_ref().display());
    load_wage_caps_from_reader(file)
}
