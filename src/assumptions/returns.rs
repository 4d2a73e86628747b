//! Annual market return assumptions
//!
//! Historical S&P 500 total returns (approximate, dividends included)

use std::collections::BTreeMap;

/// Signed fractional annual return by calendar year
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    rates: BTreeMap<i32, f64>,
}

impl Default for ReturnTable {
    fn default() -> Self {
        Self::sp500_historical()
    }
}

impl ReturnTable {
    /// Built-in S&P 500 series, 1972 through 2025
    pub fn sp500_historical() -> Self {
        Self::from_loaded(&[
            (1972, 0.1588), (1973, -0.1737), (1974, -0.2964), (1975, 0.3149), (1976, 0.1918),
            (1977, -0.1153), (1978, 0.0106), (1979, 0.1231), (1980, 0.2585), (1981, -0.0973),
            (1982, 0.1549), (1983, 0.1706), (1984, 0.0115), (1985, 0.2633), (1986, 0.1462),
            (1987, 0.0203), (1988, 0.1240), (1989, 0.2725), (1990, -0.0656), (1991, 0.2631),
            (1992, 0.0446), (1993, 0.0706), (1994, -0.0154), (1995, 0.3411), (1996, 0.2026),
            (1997, 0.3101), (1998, 0.2668), (1999, 0.1953), (2000, -0.1014), (2001, -0.1303),
            (2002, -0.2337), (2003, 0.2638), (2004, 0.0888), (2005, 0.0300), (2006, 0.1362),
            (2007, 0.0353), (2008, -0.3849), (2009, 0.2346), (2010, 0.1288), (2011, 0.0000),
            (2012, 0.1341), (2013, 0.2970), (2014, 0.1139), (2015, -0.0073), (2016, 0.0996),
            (2017, 0.1942), (2018, -0.0620), (2019, 0.2890), (2020, 0.1640), (2021, 0.2689),
            (2022, -0.1849), (2023, 0.2426), (2024, 0.2350), (2025, 0.0500),
        ])
    }

    /// Create from loaded (year, rate) pairs; later duplicates win
    pub fn from_loaded(rates: &[(i32, f64)]) -> Self {
        Self {
            rates: rates.iter().copied().collect(),
        }
    }

    /// Rate for a year, if the table has one
    pub fn get(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// Rate for a year; years outside the table earn 0%
    pub fn get_rate(&self, year: i32) -> f64 {
        self.get(year).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// First and last year covered
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.rates.keys().next()?;
        let last = self.rates.keys().next_back()?;
        Some((*first, *last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_rates() {
        let returns = ReturnTable::default();

        assert_eq!(returns.len(), 54);
        assert_eq!(returns.year_span(), Some((1972, 2025)));
        assert_eq!(returns.get_rate(1972), 0.1588);
        assert_eq!(returns.get_rate(2008), -0.3849);
        assert_eq!(returns.get_rate(1995), 0.3411);
    }

    #[test]
    fn test_missing_year_is_zero() {
        let returns = ReturnTable::default();

        assert_eq!(returns.get(1971), None);
        assert_eq!(returns.get_rate(1971), 0.0);
        assert_eq!(returns.get_rate(2030), 0.0);
        // 2011 is present with a flat return
        assert_eq!(returns.get(2011), Some(0.0));
    }

    #[test]
    fn test_empty_table() {
        let returns = ReturnTable::from_loaded(&[]);
        assert!(returns.is_empty());
        assert_eq!(returns.year_span(), None);
    }
}
