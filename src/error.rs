use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Years out of order: {year} follows {previous}")]
    YearOutOfOrder { previous: i32, year: i32 },

    #[error("Invalid return for {year}: {rate}")]
    InvalidReturn { year: i32, rate: f64 },

    #[error("Invalid contribution for {year}: {amount}")]
    InvalidContribution { year: i32, amount: f64 },

    #[error("Invalid year range: {start} > {end}")]
    InvalidYearRange { start: i32, end: i32 },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
