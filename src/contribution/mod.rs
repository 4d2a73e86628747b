//! Yearly contribution records and their derivation from payroll tax rules

mod data;
pub mod generator;

pub use data::{YearRecord, YearRecords};
pub use generator::{contributions_from_wage_caps, TaxParams, YearRange};
