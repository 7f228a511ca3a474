/// End-to-end persistence tests.
///
/// These exercise the real `Store` against a real temporary directory:
/// save/load round trips for both collections, the missing-file and
/// corrupt-file contracts, atomicity leftovers, and CSV export.
///
/// **Why a `tests/` integration test (not unit test)?**
///
/// The store's whole job is filesystem interaction; exercising it with
/// `tempfile` covers directory creation, the temp-file rename, and the
/// serde wire format with zero mocking.
use chrono::NaiveDate;
use stocktally_core::catalog::Catalog;
use stocktally_core::model::{Merchandise, SaleRecord};
use stocktally_core::sales::SalesLog;
use stocktally_core::store::{Store, StoreError, CATALOG_FILE, SALES_FILE};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add(Merchandise::new(1, "Nails", "Box of 100", 10.99, 3, "box"))
        .unwrap();
    catalog
        .add(Merchandise::new(2, "Hammer", "Claw hammer", 5.5, 0, "pz"))
        .unwrap();
    catalog
}

fn sample_sales() -> SalesLog {
    let mut log = SalesLog::new();
    log.append(SaleRecord::new(
        1,
        day(2026, 8, 6),
        "Nails | box | $16.49\n".into(),
        1,
        16.49,
    ));
    log.append(SaleRecord::new(
        2,
        day(2026, 8, 7),
        "Nails | box | $16.49\nHammer | pz | $8.25\n".into(),
        2,
        24.74,
    ));
    log
}

// ── Round trips ──────────────────────────────────────────────────────────────

/// Saving then loading the catalog yields field-for-field identical items.
#[test]
fn catalog_round_trip_is_lossless() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    let catalog = sample_catalog();
    store.save_catalog(&catalog).unwrap();
    let loaded = store.load_catalog().unwrap();

    assert_eq!(loaded.items(), catalog.items());
}

/// Saving then loading the sales log preserves every field, including the
/// 2-decimal amounts and the dd/MM/yyyy date boundary.
#[test]
fn sales_round_trip_is_lossless() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    let sales = sample_sales();
    store.save_sales(&sales).unwrap();
    let loaded = store.load_sales().unwrap();

    assert_eq!(loaded.records(), sales.records());
    assert_eq!(loaded.records()[1].date, day(2026, 8, 7));
    assert_eq!(loaded.records()[1].tax, 3.96);
    assert_eq!(loaded.records()[1].total, 28.7);
}

/// The stored files are keyed by the collection names.
#[test]
fn collections_are_stored_under_their_names() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    store.save_catalog(&sample_catalog()).unwrap();
    store.save_sales(&sample_sales()).unwrap();

    assert!(tmp.path().join(format!("{CATALOG_FILE}.json")).exists());
    assert!(tmp.path().join(format!("{SALES_FILE}.json")).exists());
    // No temp leftovers after a successful save.
    assert!(!tmp.path().join(format!("{CATALOG_FILE}.json.tmp")).exists());
}

/// The sale date is written in the fixed dd/MM/yyyy text format.
#[test]
fn sale_dates_use_fixed_wire_format() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());
    store.save_sales(&sample_sales()).unwrap();

    let json = std::fs::read_to_string(tmp.path().join(format!("{SALES_FILE}.json"))).unwrap();
    assert!(json.contains("07/08/2026"), "json was: {json}");
}

// ── Failure contracts ────────────────────────────────────────────────────────

/// A missing file loads as an empty collection, not an error.
#[test]
fn load_missing_collection_is_empty() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    assert!(store.load_catalog().unwrap().is_empty());
    assert!(store.load_sales().unwrap().is_empty());
}

/// A corrupt file is a `Malformed` error; the caller decides what to do.
#[test]
fn load_corrupt_collection_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    std::fs::write(tmp.path().join(format!("{CATALOG_FILE}.json")), "{not json").unwrap();

    match store.load_catalog() {
        Err(StoreError::Malformed { path, .. }) => {
            assert!(path.ends_with(format!("{CATALOG_FILE}.json")));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

/// Saving into a directory that does not exist yet creates it.
#[test]
fn save_creates_data_directory() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().join("nested").join("data"));

    store.save_catalog(&sample_catalog()).unwrap();
    assert_eq!(store.load_catalog().unwrap().len(), 2);
}

// ── CSV export ───────────────────────────────────────────────────────────────

/// Catalog export writes a header plus one row per item.
#[test]
fn export_catalog_csv_writes_all_rows() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    let path = store.export_catalog_csv(&sample_catalog()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("key,name,description,price,stock,unit"));
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("1,Nails,Box of 100,10.99,3,box"));
}

/// Sales export includes folio, formatted date, and 2-decimal amounts.
#[test]
fn export_sales_csv_formats_fields() {
    let tmp = TempDir::new().unwrap();
    let store = Store::new(tmp.path().to_path_buf());

    let path = store.export_sales_csv(&sample_sales()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();

    assert!(text.starts_with("folio,date,items,quantity,subtotal,tax,total"));
    assert!(text.contains("06/08/2026"));
    assert!(text.contains("16.49"));
}
