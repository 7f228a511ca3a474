/// UI panels for StockTally.
pub mod actions_panel;
pub mod catalog_panel;
pub mod form_panel;
pub mod sales_panel;
