//! Catalog domain module.
//!
//! Product records, the read/write seams to catalog storage, and the
//! inventory adjuster — the sole write path into a product's available count.

pub mod adjuster;
pub mod product;
pub mod store;

pub use adjuster::InventoryAdjuster;
pub use product::Product;
pub use store::{CatalogStore, InventoryWrite, InventoryWriteError};
