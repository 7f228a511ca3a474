/// Value types shared across the crate.
pub mod merchandise;
pub mod money;
pub mod sale;

pub use merchandise::Merchandise;
pub use sale::SaleRecord;
