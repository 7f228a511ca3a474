/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes: the two
/// collections, the session, the active view and form panes, the sales
/// filter, open dialogs, and the status line. Every user action is a
/// method here so it can be exercised without a window.
use chrono::NaiveDate;
use stocktally_core::catalog::{Catalog, CatalogError};
use stocktally_core::sales::{DateCmp, DateFilter, SaleDraft, SaleError, SalesLog};
use stocktally_core::store::Store;
use stocktally_core::validate::{EditForm, ItemForm};
use tracing::warn;

/// Which collection the central table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Catalog,
    Sales,
}

/// Which form pane is open on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPane {
    None,
    Add,
    Search,
    Sell,
}

/// Field selector of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Key,
    Name,
    Description,
}

impl SearchField {
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Key => "Key",
            SearchField::Name => "Name",
            SearchField::Description => "Description",
        }
    }
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Last operation outcome, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Session attributes supplied by the environment at startup.
///
/// The core exposes every operation unconditionally; this flag only
/// controls what the UI offers.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub admin: bool,
}

/// All application state.
pub struct AppState {
    pub session: Session,
    pub store: Store,

    // ── Collections ────────────────────────────────────
    pub catalog: Catalog,
    pub sales: SalesLog,

    // ── View ───────────────────────────────────────────
    pub view: ActiveView,
    pub pane: ActionPane,

    // ── Forms ──────────────────────────────────────────
    pub add_form: ItemForm,
    pub search_field: SearchField,
    pub search_query: String,
    pub sell_key: String,
    /// The in-progress sale; `Some` while the sell pane is open.
    pub draft: Option<SaleDraft>,

    // ── Sales filter ───────────────────────────────────
    pub filter_cmp: DateCmp,
    pub filter_date: NaiveDate,
    pub filter: Option<DateFilter>,

    // ── Dialogs ────────────────────────────────────────
    pub show_about: bool,
    pub show_valuation: bool,
    /// Key of the item shown in the view dialog.
    pub view_item: Option<u32>,
    /// Folio of the sale shown in the view dialog.
    pub view_sale: Option<u32>,
    pub edit_form: Option<EditForm>,
    /// Key of the item pending delete confirmation.
    pub confirm_delete: Option<u32>,

    // ── UI state ───────────────────────────────────────
    pub status: Option<StatusLine>,
    pub dark_mode: bool,
}

impl AppState {
    /// Create application state, loading both collections from `store`.
    ///
    /// Load failures are reported on the status line and the affected
    /// collection starts empty; nothing here is fatal.
    pub fn new(session: Session, store: Store) -> Self {
        let mut status = None;

        let catalog = match store.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("catalog load failed: {e}");
                status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: format!("Could not load catalog: {e}"),
                });
                Catalog::new()
            }
        };
        let sales = match store.load_sales() {
            Ok(sales) => sales,
            Err(e) => {
                warn!("sales load failed: {e}");
                status = Some(StatusLine {
                    kind: StatusKind::Error,
                    text: format!("Could not load sales: {e}"),
                });
                SalesLog::new()
            }
        };

        Self {
            session,
            store,
            catalog,
            sales,
            view: ActiveView::Catalog,
            pane: ActionPane::None,
            add_form: ItemForm::default(),
            search_field: SearchField::Key,
            search_query: String::new(),
            sell_key: String::new(),
            draft: None,
            filter_cmp: DateCmp::Equal,
            filter_date: today(),
            filter: None,
            show_about: false,
            show_valuation: false,
            view_item: None,
            view_sale: None,
            edit_form: None,
            confirm_delete: None,
            status,
            dark_mode: true,
        }
    }

    // ── Status helpers ─────────────────────────────────────────────────

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Success,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    // ── Catalog actions ────────────────────────────────────────────────

    /// Validate the add form and insert the new item.
    ///
    /// Validation failures keep the form contents for correction; a
    /// duplicate key clears only the key field, mirroring the form's
    /// long-standing behaviour.
    pub fn add_item(&mut self) {
        let item = match self.add_form.validate() {
            Ok(item) => item,
            Err(report) => {
                self.error(report.to_string());
                return;
            }
        };
        let key = item.key;
        match self.catalog.add(item) {
            Ok(()) => {
                self.add_form.clear();
                self.success(format!("Item #{key} added"));
            }
            Err(CatalogError::DuplicateKey(_)) => {
                self.add_form.key.clear();
                self.error(format!("An item with key {key} already exists"));
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    /// Run the search form against the catalog and open the view dialog
    /// on a hit.
    pub fn run_search(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            self.info("Enter a value to search for");
            return;
        }
        let found = match self.search_field {
            SearchField::Key => {
                let Ok(key) = query.parse::<u32>() else {
                    self.error("Enter a valid whole number key");
                    return;
                };
                self.catalog.find_by_key(key)
            }
            SearchField::Name => self.catalog.find_by_name(&query),
            SearchField::Description => self.catalog.find_by_description(&query),
        };
        match found {
            Some(item) => {
                self.view_item = Some(item.key);
                self.search_query.clear();
                self.status = None;
            }
            None => self.error(format!(
                "No item with that {} in the catalog",
                match self.search_field {
                    SearchField::Key => "key",
                    SearchField::Name => "name",
                    SearchField::Description => "description",
                }
            )),
        }
    }

    /// Open the edit dialog for an item.
    pub fn open_edit(&mut self, key: u32) {
        if let Some(item) = self.catalog.find_by_key(key) {
            self.edit_form = Some(EditForm::from_item(item));
        }
    }

    /// Apply the edit dialog as a unit.
    ///
    /// On validation failure the dialog stays open with the input intact.
    pub fn save_edit(&mut self) {
        let Some(form) = self.edit_form.clone() else {
            return;
        };
        let Some(item) = self.catalog.item_mut(form.key) else {
            self.edit_form = None;
            self.error(format!("Item #{} no longer exists", form.key));
            return;
        };
        match form.apply_to(item) {
            Ok(()) => {
                self.edit_form = None;
                self.success(format!("Item #{} updated", form.key));
            }
            Err(report) => self.error(report.to_string()),
        }
    }

    /// Remove an item after confirmation.
    pub fn delete_item(&mut self, key: u32) {
        self.confirm_delete = None;
        match self.catalog.remove(key) {
            Ok(item) => self.success(format!("Item #{} ({}) removed", key, item.name)),
            Err(e) => self.error(e.to_string()),
        }
    }

    // ── Sale flow ──────────────────────────────────────────────────────

    /// Open the sell pane with a fresh draft.
    pub fn start_sale(&mut self) {
        self.draft = Some(SaleDraft::new());
        self.sell_key.clear();
        self.pane = ActionPane::Sell;
    }

    /// Sell one unit of the keyed item into the current draft.
    pub fn sell_line(&mut self) {
        let Ok(key) = self.sell_key.trim().parse::<u32>() else {
            self.error("Enter a valid whole number key");
            return;
        };
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match draft.add_line(&mut self.catalog, key) {
            Ok(()) => {
                self.sell_key.clear();
                self.status = None;
            }
            Err(e @ SaleError::NotFound(_)) => self.error(e.to_string()),
            Err(e @ SaleError::OutOfStock(_)) => self.error(e.to_string()),
        }
    }

    /// Finalize (or discard, if empty) the current draft dated today.
    pub fn finish_sale(&mut self) {
        self.finish_sale_on(today());
    }

    /// Finalize the current draft with an explicit date.
    pub fn finish_sale_on(&mut self, date: NaiveDate) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        match draft.finalize(&mut self.sales, date) {
            Some(folio) => self.success(format!("Sale #{folio} recorded")),
            None => self.info("Sale discarded (nothing sold)"),
        }
        self.sell_key.clear();
        self.pane = ActionPane::None;
    }

    // ── Sales filter ───────────────────────────────────────────────────

    /// Apply the filter controls to the sales view.
    pub fn apply_filter(&mut self) {
        self.filter = Some(DateFilter::new(self.filter_cmp, self.filter_date));
    }

    /// Drop the filter, restoring the full log in original order.
    pub fn reset_filter(&mut self) {
        self.filter = None;
        self.filter_cmp = DateCmp::Equal;
        self.filter_date = today();
    }

    /// Indices into `sales.records()` that pass the active filter.
    pub fn visible_sales(&self) -> Vec<usize> {
        match self.filter {
            Some(filter) => self
                .sales
                .iter()
                .enumerate()
                .filter(|(_, r)| filter.matches(r))
                .map(|(i, _)| i)
                .collect(),
            None => (0..self.sales.len()).collect(),
        }
    }

    // ── Persistence ────────────────────────────────────────────────────

    /// Export the currently shown table to CSV in the data directory.
    pub fn export_active_view(&mut self) {
        let result = match self.view {
            ActiveView::Catalog => self.store.export_catalog_csv(&self.catalog),
            ActiveView::Sales => self.store.export_sales_csv(&self.sales),
        };
        match result {
            Ok(path) => self.success(format!("Exported to {}", path.display())),
            Err(e) => self.error(format!("Export failed: {e}")),
        }
    }

    /// Persist both collections. Called on shutdown for admin sessions.
    ///
    /// Failures are logged, never fatal; whatever is on disk stays as-is.
    pub fn save_all(&self) {
        if let Err(e) = self.store.save_catalog(&self.catalog) {
            warn!("catalog save failed: {e}");
        }
        if let Err(e) = self.store.save_sales(&self.sales) {
            warn!("sales save failed: {e}");
        }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
