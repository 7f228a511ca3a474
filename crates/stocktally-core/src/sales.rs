/// Sales log, folio generation, in-progress drafts, and the date filter.
use crate::catalog::Catalog;
use crate::model::money::{format_money, round2};
use crate::model::SaleRecord;
use chrono::NaiveDate;
use thiserror::Error;

/// Markup applied to an item's purchase price when it is sold.
pub const SALE_MARKUP: f64 = 1.5;

/// Errors from the sale flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaleError {
    /// The key does not resolve to a catalog item.
    #[error("no item with key {0} in the catalog")]
    NotFound(u32),
    /// The item exists but has zero stock.
    #[error("item {0} is out of stock")]
    OutOfStock(u32),
}

/// Append-only log of finalized sales.
#[derive(Debug, Clone, Default)]
pub struct SalesLog {
    records: Vec<SaleRecord>,
}

impl SalesLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-loaded record list (used by the persistence layer).
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by folio. Linear scan, first match.
    pub fn find_by_folio(&self, folio: u32) -> Option<&SaleRecord> {
        self.records.iter().find(|r| r.folio == folio)
    }

    /// Next folio: 1 for an empty log, else the *last* record's folio + 1.
    ///
    /// "Last" is insertion order, not a max scan: removing or reordering
    /// records can re-issue folios. The log is append-only in every flow
    /// the application has, so this holds in practice.
    pub fn next_folio(&self) -> u32 {
        match self.records.last() {
            Some(record) => record.folio + 1,
            None => 1,
        }
    }

    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }
}

/// Date comparison operator for the sales filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCmp {
    Equal,
    After,
    Before,
}

impl DateCmp {
    /// Operator symbol as shown in the filter control.
    pub fn symbol(self) -> &'static str {
        match self {
            DateCmp::Equal => "=",
            DateCmp::After => ">",
            DateCmp::Before => "<",
        }
    }
}

/// A live filter over the sales log.
///
/// Holding one of these next to the log is enough for a filtered view:
/// `matches` is evaluated per record on render, and dropping the filter
/// restores the full log in original order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFilter {
    pub cmp: DateCmp,
    pub date: NaiveDate,
}

impl DateFilter {
    pub fn new(cmp: DateCmp, date: NaiveDate) -> Self {
        Self { cmp, date }
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        match self.cmp {
            DateCmp::Equal => record.date == self.date,
            DateCmp::After => record.date > self.date,
            DateCmp::Before => record.date < self.date,
        }
    }
}

/// A sale in progress.
///
/// Explicitly transaction-scoped: created empty when the operator starts
/// selling, threaded through each [`add_line`](SaleDraft::add_line), and
/// consumed by [`finalize`](SaleDraft::finalize) — or simply dropped to
/// abandon the sale. Nothing about an unfinished sale is ambient state.
#[derive(Debug, Default)]
pub struct SaleDraft {
    lines: u32,
    subtotal: f64,
    note: String,
}

impl SaleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Units sold so far.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Running subtotal (unrounded accumulation of rounded line prices).
    pub fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// Accumulated line-item text, one `"name | unit | $price"` per line.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Sell one unit of `key` out of the catalog.
    ///
    /// On success the item's stock is decremented by one and the draft
    /// accumulates the marked-up line price. On any error neither the
    /// catalog nor the draft is mutated.
    pub fn add_line(&mut self, catalog: &mut Catalog, key: u32) -> Result<(), SaleError> {
        let item = catalog.item_mut(key).ok_or(SaleError::NotFound(key))?;
        if !item.take_one() {
            return Err(SaleError::OutOfStock(key));
        }
        let line_price = round2(item.price * SALE_MARKUP);
        self.note.push_str(&format!(
            "{} | {} | {}\n",
            item.name,
            item.unit,
            format_money(line_price)
        ));
        self.subtotal += line_price;
        self.lines += 1;
        Ok(())
    }

    /// Finalize the draft into the sales log.
    ///
    /// With at least one line a new record is appended (fresh folio, the
    /// accumulated note/count/rounded subtotal, fixed tax rate) and its
    /// folio is returned. An empty draft produces no record. The draft is
    /// consumed either way.
    pub fn finalize(self, log: &mut SalesLog, date: NaiveDate) -> Option<u32> {
        if self.lines == 0 {
            return None;
        }
        let folio = log.next_folio();
        log.append(SaleRecord::new(
            folio,
            date,
            self.note,
            self.lines,
            round2(self.subtotal),
        ));
        Some(folio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Merchandise;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.add(Merchandise::new(1, "Nails", "Box of 100", 10.0, 2, "box"))
            .unwrap();
        c.add(Merchandise::new(2, "Tape", "Duct tape", 7.33, 0, "roll"))
            .unwrap();
        c
    }

    #[test]
    fn test_next_folio_empty_log() {
        assert_eq!(SalesLog::new().next_folio(), 1);
    }

    #[test]
    fn test_next_folio_follows_last_record() {
        let mut log = SalesLog::new();
        // Earlier records with higher folios are ignored: only the last
        // element in insertion order counts.
        log.append(SaleRecord::new(9, day(2026, 1, 1), "a".into(), 1, 1.0));
        log.append(SaleRecord::new(4, day(2026, 1, 2), "b".into(), 1, 1.0));
        assert_eq!(log.next_folio(), 5);
    }

    #[test]
    fn test_add_line_decrements_stock_and_accumulates() {
        let mut cat = catalog();
        let mut draft = SaleDraft::new();
        draft.add_line(&mut cat, 1).unwrap();

        assert_eq!(cat.find_by_key(1).unwrap().stock, 1);
        assert_eq!(draft.lines(), 1);
        // round2(10.0 × 1.5) = 15.00
        assert_eq!(draft.subtotal(), 15.0);
        assert_eq!(draft.note(), "Nails | box | $15.00\n");
    }

    #[test]
    fn test_add_line_unknown_key() {
        let mut cat = catalog();
        let mut draft = SaleDraft::new();
        assert_eq!(draft.add_line(&mut cat, 99), Err(SaleError::NotFound(99)));
        assert_eq!(draft.lines(), 0);
    }

    #[test]
    fn test_add_line_out_of_stock_leaves_state_alone() {
        let mut cat = catalog();
        let mut draft = SaleDraft::new();
        assert_eq!(draft.add_line(&mut cat, 2), Err(SaleError::OutOfStock(2)));
        assert_eq!(cat.find_by_key(2).unwrap().stock, 0);
        assert_eq!(draft.lines(), 0);
        assert!(draft.note().is_empty());
    }

    #[test]
    fn test_finalize_appends_record_with_tax() {
        let mut cat = catalog();
        let mut log = SalesLog::new();
        let mut draft = SaleDraft::new();
        draft.add_line(&mut cat, 1).unwrap();
        draft.add_line(&mut cat, 1).unwrap();

        let folio = draft.finalize(&mut log, day(2026, 8, 7)).unwrap();
        assert_eq!(folio, 1);

        let record = &log.records()[0];
        assert_eq!(record.quantity, 2);
        assert_eq!(record.subtotal, 30.0);
        assert_eq!(record.tax, 4.8);
        assert_eq!(record.total, 34.8);
        assert_eq!(record.items.lines().count(), 2);
    }

    #[test]
    fn test_finalize_empty_draft_produces_nothing() {
        let mut log = SalesLog::new();
        assert_eq!(SaleDraft::new().finalize(&mut log, day(2026, 8, 7)), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_date_filter() {
        let mk = |folio, date| SaleRecord::new(folio, date, String::new(), 1, 1.0);
        let records = vec![
            mk(1, day(2026, 8, 6)),
            mk(2, day(2026, 8, 7)),
            mk(3, day(2026, 8, 8)),
        ];

        let on = DateFilter::new(DateCmp::Equal, day(2026, 8, 7));
        let after = DateFilter::new(DateCmp::After, day(2026, 8, 7));
        let before = DateFilter::new(DateCmp::Before, day(2026, 8, 7));

        let folios = |f: DateFilter| -> Vec<u32> {
            records
                .iter()
                .filter(|r| f.matches(r))
                .map(|r| r.folio)
                .collect()
        };

        assert_eq!(folios(on), vec![2]);
        assert_eq!(folios(after), vec![3]);
        assert_eq!(folios(before), vec![1]);
    }

    #[test]
    fn test_cmp_symbols() {
        assert_eq!(DateCmp::Equal.symbol(), "=");
        assert_eq!(DateCmp::After.symbol(), ">");
        assert_eq!(DateCmp::Before.symbol(), "<");
    }
}
