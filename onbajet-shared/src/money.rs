//! Helpers for the dollar amounts the calculator produces.
//!
//! Amounts are carried as `f64` throughout and only rounded for display.

/// Round to the nearest cent.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as US dollars, e.g. `$2.49` or `-$0.50`.
pub fn format_usd(amount: f64) -> String {
    let cents = round_cents(amount);
    if cents < 0.0 {
        format!("-${:.2}", -cents)
    } else {
        format!("${:.2}", cents.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2.49), "$2.49");
        assert_eq!(format_usd(0.28125), "$0.28");
        assert_eq!(format_usd(3.0), "$3.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-0.5), "-$0.50");
    }

    #[test]
    fn test_round_cents() {
        assert!((round_cents(1.2285) - 1.23).abs() < 1e-9);
        assert!((round_cents(6.9615) - 6.96).abs() < 1e-9);
    }
}
