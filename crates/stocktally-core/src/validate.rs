/// All-or-nothing validation of raw form input.
///
/// Forms hold the operator's text exactly as typed; validation either
/// produces a fully-formed value or a report naming *every* failed field,
/// never a partial apply.
use crate::model::Merchandise;
use compact_str::CompactString;
use thiserror::Error;

/// A form field, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Name,
    Description,
    Price,
    Stock,
    Unit,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Key => "key",
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Stock => "stock",
            Field::Unit => "unit",
        }
    }
}

/// Validation failure listing every offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub struct ValidationReport {
    pub fields: Vec<Field>,
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.label()).collect();
        write!(f, "invalid input: {}", names.join(", "))
    }
}

fn parse_key(text: &str) -> Option<u32> {
    // Keys are nonzero positive integers.
    text.trim().parse::<u32>().ok().filter(|k| *k != 0)
}

fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn parse_stock(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Raw input of the add-item form.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    pub key: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub unit: String,
}

impl ItemForm {
    /// Validate every field, producing a new item or the full failure list.
    pub fn validate(&self) -> Result<Merchandise, ValidationReport> {
        let mut failed = Vec::new();

        let key = parse_key(&self.key);
        if key.is_none() {
            failed.push(Field::Key);
        }
        let name = non_empty(&self.name);
        if name.is_none() {
            failed.push(Field::Name);
        }
        let description = non_empty(&self.description);
        if description.is_none() {
            failed.push(Field::Description);
        }
        let price = parse_price(&self.price);
        if price.is_none() {
            failed.push(Field::Price);
        }
        let stock = parse_stock(&self.stock);
        if stock.is_none() {
            failed.push(Field::Stock);
        }
        let unit = non_empty(&self.unit);
        if unit.is_none() {
            failed.push(Field::Unit);
        }

        if !failed.is_empty() {
            return Err(ValidationReport { fields: failed });
        }

        // All Somes past this point — checked above.
        Ok(Merchandise::new(
            key.unwrap(),
            name.unwrap(),
            description.unwrap(),
            price.unwrap(),
            stock.unwrap(),
            unit.unwrap(),
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw input of the edit form. The key is fixed; everything else is text.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub key: u32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub unit: String,
}

impl EditForm {
    pub fn from_item(item: &Merchandise) -> Self {
        Self {
            key: item.key,
            name: item.name.to_string(),
            description: item.description.clone(),
            price: item.price.to_string(),
            stock: item.stock.to_string(),
            unit: item.unit.to_string(),
        }
    }

    /// Validate all editable fields and apply them to `item` as a unit.
    ///
    /// The item's key is never touched. On any validation failure the item
    /// is left completely unchanged.
    pub fn apply_to(&self, item: &mut Merchandise) -> Result<(), ValidationReport> {
        let mut failed = Vec::new();

        let name = non_empty(&self.name);
        if name.is_none() {
            failed.push(Field::Name);
        }
        let description = non_empty(&self.description);
        if description.is_none() {
            failed.push(Field::Description);
        }
        let price = parse_price(&self.price);
        if price.is_none() {
            failed.push(Field::Price);
        }
        let stock = parse_stock(&self.stock);
        if stock.is_none() {
            failed.push(Field::Stock);
        }
        let unit = non_empty(&self.unit);
        if unit.is_none() {
            failed.push(Field::Unit);
        }

        if !failed.is_empty() {
            return Err(ValidationReport { fields: failed });
        }

        item.name = CompactString::from(name.unwrap());
        item.description = description.unwrap().to_string();
        item.price = price.unwrap();
        item.stock = stock.unwrap();
        item.unit = CompactString::from(unit.unwrap());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_form() -> ItemForm {
        ItemForm {
            key: "7".into(),
            name: "Rope".into(),
            description: "Nylon, 10m".into(),
            price: "12.50".into(),
            stock: "4".into(),
            unit: "m".into(),
        }
    }

    #[test]
    fn test_valid_form_builds_item() {
        let item = good_form().validate().unwrap();
        assert_eq!(item.key, 7);
        assert_eq!(item.name, "Rope");
        assert_eq!(item.price, 12.5);
        assert_eq!(item.stock, 4);
    }

    #[test]
    fn test_every_failed_field_is_reported() {
        let form = ItemForm {
            key: "abc".into(),
            name: "".into(),
            description: "ok".into(),
            price: "-1".into(),
            stock: "2.5".into(),
            unit: "  ".into(),
        };
        let report = form.validate().unwrap_err();
        assert_eq!(
            report.fields,
            vec![Field::Key, Field::Name, Field::Price, Field::Stock, Field::Unit]
        );
        assert!(report.to_string().contains("key"));
        assert!(report.to_string().contains("unit"));
    }

    #[test]
    fn test_key_must_be_nonzero_integer() {
        let mut form = good_form();
        form.key = "0".into();
        assert!(form.validate().is_err());
        form.key = "-3".into();
        assert!(form.validate().is_err());
        form.key = "3.5".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_price_must_be_non_negative() {
        let mut form = good_form();
        form.price = "-0.01".into();
        assert!(form.validate().is_err());
        form.price = "0".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_edit_applies_all_or_nothing() {
        let mut item = Merchandise::new(1, "Nails", "Box of 100", 10.0, 3, "box");
        let mut form = EditForm::from_item(&item);
        form.name = "Screws".into();
        form.price = "not a number".into();

        assert!(form.apply_to(&mut item).is_err());
        // Item untouched, including the field that would have parsed.
        assert_eq!(item.name, "Nails");
        assert_eq!(item.price, 10.0);

        form.price = "11.25".into();
        form.apply_to(&mut item).unwrap();
        assert_eq!(item.name, "Screws");
        assert_eq!(item.price, 11.25);
        assert_eq!(item.key, 1);
    }
}
