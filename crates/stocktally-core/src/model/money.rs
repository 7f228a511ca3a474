/// Money helpers — 2-decimal rounding and display formatting.
///
/// All prices and totals are `f64` rounded to two decimals at every
/// boundary where an amount is produced (line prices, subtotals, tax).

/// Round an amount to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount for display with a currency sign.
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}
