//! Static input tables: market returns and Social Security wage caps

mod returns;
mod wage_caps;
pub mod loader;

pub use returns::ReturnTable;
pub use wage_caps::WageCapTable;
pub use loader::{load_returns, load_returns_from_reader, load_wage_caps, load_wage_caps_from_reader};

use crate::error::Result;
use std::path::Path;

/// Combined assumption set for a projection run
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub returns: ReturnTable,
    pub wage_caps: WageCapTable,
}

impl Assumptions {
    /// Built-in historical tables
    pub fn default_historical() -> Self {
        Self::default()
    }

    /// Built-in tables with optional CSV overrides
    pub fn with_overrides(returns: Option<&Path>, wage_caps: Option<&Path>) -> Result<Self> {
        let returns = match returns {
            Some(path) => load_returns(path)?,
            None => ReturnTable::default(),
        };
        let wage_caps = match wage_caps {
            Some(path) => load_wage_caps(path)?,
            None => WageCapTable::default(),
        };
        match returns.year_span() {
            Some((first, last)) => log::debug!("Returns cover {first}-{last}"),
            None => log::warn!("Return table is empty; every year will earn 0%"),
        }
        Ok(Self { returns, wage_caps })
    }
}
