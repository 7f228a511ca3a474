/// StockTally Core — catalog, sales log, and persistence.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Merchandise and sale-record value types plus money helpers.
/// - [`catalog`] — The in-memory merchandise catalog and its query operations.
/// - [`sales`] — Append-only sales log, folio generation, drafts, date filter.
/// - [`validate`] — All-or-nothing validation of raw form input.
/// - [`store`] — Bulk JSON persistence of both collections and CSV export.
pub mod catalog;
pub mod model;
pub mod sales;
pub mod store;
pub mod validate;
