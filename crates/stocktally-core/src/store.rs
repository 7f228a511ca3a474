/// Bulk persistence of both collections, plus CSV export.
///
/// Each collection is one JSON file in the data directory, keyed by the
/// collection's historical name. Loading happens wholesale at startup and
/// saving wholesale at shutdown; there is no incremental persistence.
/// Saves go through a temp file and rename so a crash mid-write never
/// leaves a truncated collection on disk.
use crate::catalog::Catalog;
use crate::model::sale::format_date;
use crate::model::{Merchandise, SaleRecord};
use crate::sales::SalesLog;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File-name key of the merchandise catalog.
pub const CATALOG_FILE: &str = "mercaderia";
/// File-name key of the sales log.
pub const SALES_FILE: &str = "remitos";

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Handle to the on-disk data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Per-user data directory: `STOCKTALLY_DATA_DIR` if set, else
    /// `%APPDATA%\StockTally` on Windows, else `$HOME/.local/share/StockTally`,
    /// falling back to the working directory.
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("STOCKTALLY_DATA_DIR") {
            return PathBuf::from(dir);
        }
        let base = std::env::var("APPDATA")
            .map(PathBuf::from)
            .or_else(|_| {
                std::env::var("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
            })
            .unwrap_or_else(|_| PathBuf::from("."));
        base.join("StockTally")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load a named collection.
    ///
    /// A missing file is not an error: the collection simply does not exist
    /// yet and comes back empty. An unreadable or unparsable file is an
    /// error — the caller reports it and carries on with an empty
    /// collection.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let path = self.collection_path(name);
        if !path.exists() {
            info!(collection = name, "no stored collection, starting empty");
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let records: Vec<T> =
            serde_json::from_str(&json).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?;
        info!(collection = name, count = records.len(), "collection loaded");
        Ok(records)
    }

    /// Save a named collection atomically (temp file + rename).
    pub fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.collection_path(name);
        let tmp = self.dir.join(format!("{name}.json.tmp"));

        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Malformed {
            path: path.clone(),
            source,
        })?;
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!(collection = name, count = records.len(), "collection saved");
        Ok(())
    }

    pub fn load_catalog(&self) -> Result<Catalog, StoreError> {
        Ok(Catalog::from_items(self.load::<Merchandise>(CATALOG_FILE)?))
    }

    pub fn save_catalog(&self, catalog: &Catalog) -> Result<(), StoreError> {
        self.save(CATALOG_FILE, catalog.items())
    }

    pub fn load_sales(&self) -> Result<SalesLog, StoreError> {
        Ok(SalesLog::from_records(self.load::<SaleRecord>(SALES_FILE)?))
    }

    pub fn save_sales(&self, sales: &SalesLog) -> Result<(), StoreError> {
        self.save(SALES_FILE, sales.records())
    }

    /// Export the catalog as `catalog.csv` in the data directory.
    pub fn export_catalog_csv(&self, catalog: &Catalog) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join("catalog.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["key", "name", "description", "price", "stock", "unit"])?;
        for item in catalog.iter() {
            writer.write_record([
                item.key.to_string(),
                item.name.to_string(),
                item.description.clone(),
                format!("{:.2}", item.price),
                item.stock.to_string(),
                item.unit.to_string(),
            ])?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "catalog exported");
        Ok(path)
    }

    /// Export the sales log as `sales.csv` in the data directory.
    pub fn export_sales_csv(&self, sales: &SalesLog) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join("sales.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["folio", "date", "items", "quantity", "subtotal", "tax", "total"])?;
        for record in sales.iter() {
            writer.write_record([
                record.folio.to_string(),
                format_date(record.date),
                record.items.clone(),
                record.quantity.to_string(),
                format!("{:.2}", record.subtotal),
                format!("{:.2}", record.tax),
                format!("{:.2}", record.total),
            ])?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "sales exported");
        Ok(path)
    }
}
