//! Price display helpers.

// Фиксированный курс только для отображения, не для расчётов
const IDR_PER_USD: u64 = 16_666;

/// Formats a rupiah amount with `id-ID` thousands grouping: `Rp2.500.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();

    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    format!("Rp{grouped}")
}

/// Rounded USD estimate at the fixed display rate.
pub fn usd_estimate(amount: u64) -> String {
    let usd = (amount + IDR_PER_USD / 2) / IDR_PER_USD;
    format!("${usd}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(0), "Rp0");
        assert_eq!(format_rupiah(950), "Rp950");
        assert_eq!(format_rupiah(2_500_000), "Rp2.500.000");
        assert_eq!(format_rupiah(12_345_678), "Rp12.345.678");
    }

    #[test]
    fn usd_estimate_rounds_at_the_fixed_rate() {
        assert_eq!(usd_estimate(0), "$0");
        assert_eq!(usd_estimate(16_666), "$1");
        assert_eq!(usd_estimate(2_500_000), "$150");
        // Rounds to nearest rather than truncating.
        assert_eq!(usd_estimate(24_999), "$2");
    }
}
