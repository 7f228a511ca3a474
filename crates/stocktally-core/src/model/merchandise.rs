/// A single merchandise item in the catalog.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A stocked product.
///
/// The `key` is externally assigned and immutable after creation; key
/// uniqueness across the catalog is enforced by [`crate::catalog::Catalog`],
/// not here. Every other field may be edited, and `stock` is additionally
/// decremented by the sale flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchandise {
    /// Unique nonzero key, assigned by the operator.
    pub key: u32,
    /// Product name.
    pub name: CompactString,
    /// Freeform description.
    pub description: String,
    /// Unit purchase price, non-negative, 2-decimal.
    pub price: f64,
    /// Units currently in stock.
    pub stock: u32,
    /// Unit-of-measure label ("pz", "kg", ...).
    pub unit: CompactString,
}

impl Merchandise {
    pub fn new(
        key: u32,
        name: impl Into<CompactString>,
        description: impl Into<String>,
        price: f64,
        stock: u32,
        unit: impl Into<CompactString>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            description: description.into(),
            price,
            stock,
            unit: unit.into(),
        }
    }

    /// Take one unit out of stock.
    ///
    /// Returns `false` (and leaves stock untouched) when nothing is left,
    /// so stock can never go negative.
    pub fn take_one(&mut self) -> bool {
        if self.stock == 0 {
            return false;
        }
        self.stock -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_one_decrements() {
        let mut item = Merchandise::new(1, "Nails", "Box of 100", 10.0, 3, "box");
        assert!(item.take_one());
        assert_eq!(item.stock, 2);
    }

    #[test]
    fn test_take_one_at_zero_fails_without_mutation() {
        let mut item = Merchandise::new(1, "Nails", "Box of 100", 10.0, 0, "box");
        assert!(!item.take_one());
        assert_eq!(item.stock, 0);
    }
}
