/// An immutable record of a completed sale.
use crate::model::money::round2;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed tax rate applied to every sale.
pub const TAX_RATE: f64 = 0.16;

/// One finalized sale transaction.
///
/// Created once, appended to the sales log, and never edited or deleted
/// afterwards. `items` is freeform text and may aggregate several line
/// items (one per line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Sequence number, assigned at creation by the sales log.
    pub folio: u32,
    /// Day the sale was finalized. Serialized as `dd/MM/yyyy`.
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    /// Accumulated line-item text.
    pub items: String,
    /// Count of units sold in this transaction.
    pub quantity: u32,
    /// Sum of line prices, 2-decimal.
    pub subtotal: f64,
    /// round2(subtotal × [`TAX_RATE`]).
    pub tax: f64,
    /// round2(subtotal + tax).
    pub total: f64,
}

impl SaleRecord {
    /// Build a record from a folio, date, and the accumulated sale data.
    ///
    /// Tax and total are derived here so a record can never carry amounts
    /// inconsistent with its subtotal.
    pub fn new(folio: u32, date: NaiveDate, items: String, quantity: u32, subtotal: f64) -> Self {
        let tax = round2(subtotal * TAX_RATE);
        let total = round2(subtotal + tax);
        Self {
            folio,
            date,
            items,
            quantity,
            subtotal,
            tax,
            total,
        }
    }
}

/// Serde adapter for the fixed `dd/MM/yyyy` wire format.
mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Format a sale date the way it appears on the wire and in tables.
pub fn format_date(date: NaiveDate) -> String {
    date.format(wire_date::FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tax_and_total_derived() {
        let record = SaleRecord::new(1, day(2026, 8, 7), "x".into(), 2, 100.0);
        assert_eq!(record.tax, 16.0);
        assert_eq!(record.total, 116.0);
    }

    #[test]
    fn test_tax_rounding() {
        // 33.33 × 0.16 = 5.3328 → 5.33; total 38.66.
        let record = SaleRecord::new(7, day(2026, 1, 2), String::new(), 1, 33.33);
        assert_eq!(record.tax, 5.33);
        assert_eq!(record.total, 38.66);
    }

    #[test]
    fn test_date_wire_format_round_trip() {
        let record = SaleRecord::new(3, day(2026, 8, 7), "a | pz | $1.50\n".into(), 1, 1.5);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"07/08/2026\""), "json was: {json}");
        let back: SaleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(day(2026, 8, 7)), "07/08/2026");
        assert_eq!(format_date(day(2025, 12, 31)), "31/12/2025");
    }
}
