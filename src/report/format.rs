//! Display formatting for currency amounts

/// US dollars with no fractional digits, e.g. `$1,234,568` or `-$250`.
/// Negative amounts keep their sign even when they round to zero (`-$0`).
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u64);
    if value.is_sign_negative() {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Two decimals with exact ties rounded away from zero (`2169.125` -> `2169.13`).
///
/// `{:.2}` alone rounds binary ties to even.
pub fn format_fixed2(value: f64) -> String {
    // Ties at two decimals are odd multiples of 1/8
    let eighths = value * 8.0;
    if value.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let nudged = value + value.signum() * 0.001;
        return format!("{nudged:.2}");
    }
    format!("{value:.2}")
}

/// Axis label in millions with one decimal, e.g. `$2.5M`
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// Return percentage for display, e.g. `-17.37%`
pub fn format_percent(rate_percent: f64) -> String {
    format!("{rate_percent:.2}%")
}

fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(999.5), "$1,000");
        assert_eq!(format_currency(1234567.89), "$1,234,568");
        assert_eq!(format_currency(100000.0), "$100,000");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(-250.2), "-$250");
        assert_eq!(format_currency(-1234567.0), "-$1,234,567");
        assert_eq!(format_currency(-0.3), "-$0");
    }

    #[test]
    fn test_fixed2_ties_round_up() {
        assert_eq!(format_fixed2(2169.125), "2169.13");
        assert_eq!(format_fixed2(4648.125), "4648.13");
        assert_eq!(format_fixed2(7361.625), "7361.63");
        assert_eq!(format_fixed2(-0.125), "-0.13");
        assert_eq!(format_fixed2(0.375), "0.38");
    }

    #[test]
    fn test_fixed2_non_ties() {
        assert_eq!(format_fixed2(0.5), "0.50");
        assert_eq!(format_fixed2(0.25), "0.25");
        assert_eq!(format_fixed2(894.3549), "894.35");
        assert_eq!(format_fixed2(-17.37), "-17.37");
        assert_eq!(format_fixed2(1507.5), "1507.50");
        assert_eq!(format_fixed2(0.0), "0.00");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_millions(2_500_000.0), "$2.5M");
        assert_eq!(format_millions(0.0), "$0.0M");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(15.88), "15.88%");
        assert_eq!(format_percent(-17.37), "-17.37%");
    }
}
