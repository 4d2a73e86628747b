//! Social Security taxable wage base by year

use std::collections::BTreeMap;

/// Social Security wage cap (taxable maximum) by calendar year
#[derive(Debug, Clone, PartialEq)]
pub struct WageCapTable {
    caps: BTreeMap<i32, f64>,
}

impl Default for WageCapTable {
    fn default() -> Self {
        Self::social_security_historical()
    }
}

impl WageCapTable {
    /// Built-in SSA contribution and benefit base, 1972 through 2024
    pub fn social_security_historical() -> Self {
        Self::from_loaded(&[
            (1972, 9000.0), (1973, 10800.0), (1974, 13200.0), (1975, 14100.0),
            (1976, 15300.0), (1977, 16500.0), (1978, 17700.0), (1979, 22900.0),
            (1980, 25900.0), (1981, 29700.0), (1982, 32400.0), (1983, 35700.0),
            (1984, 37800.0), (1985, 39600.0), (1986, 42000.0), (1987, 43800.0),
            (1988, 45000.0), (1989, 48000.0), (1990, 51300.0), (1991, 53400.0),
            (1992, 55500.0), (1993, 57600.0), (1994, 60600.0), (1995, 61200.0),
            (1996, 62700.0), (1997, 65400.0), (1998, 68400.0), (1999, 72600.0),
            (2000, 76200.0), (2001, 80400.0), (2002, 84900.0), (2003, 87000.0),
            (2004, 87900.0), (2005, 90000.0), (2006, 94200.0), (2007, 97500.0),
            (2008, 102000.0), (2009, 106800.0), (2010, 106800.0), (2011, 106800.0),
            (2012, 110100.0), (2013, 113700.0), (2014, 117000.0), (2015, 118500.0),
            (2016, 118500.0), (2017, 127200.0), (2018, 128400.0), (2019, 132900.0),
            (2020, 137700.0), (2021, 142800.0), (2022, 147000.0), (2023, 160200.0),
            (2024, 168600.0),
        ])
    }

    /// Create from loaded (year, cap) pairs; later duplicates win
    pub fn from_loaded(caps: &[(i32, f64)]) -> Self {
        Self {
            caps: caps.iter().copied().collect(),
        }
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.caps.get(&year).copied()
    }

    /// (year, cap) pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.caps.iter().map(|(year, cap)| (*year, *cap))
    }

    pub fn len(&self) -> usize {
        self.caps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}
