//! Storage seams for the catalog.
//!
//! `CatalogStore` is the read side (point and batched lookups); the cart and
//! checkout layers only ever consume these two calls. `InventoryWrite` is the
//! conditional write side: a compare-and-swap on a product's available count.

use std::sync::Arc;

use storefront_core::ProductId;

use crate::product::Product;

/// Read access to product records.
pub trait CatalogStore: Send + Sync {
    fn get(&self, id: ProductId) -> Option<Product>;

    /// Batched lookup. Missing ids are skipped; callers that need to detect
    /// absence compare against the requested id set.
    fn get_many(&self, ids: &[ProductId]) -> Vec<Product>;
}

/// Outcome of a failed conditional availability write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryWriteError {
    /// The product does not exist in the store.
    NotFound,
    /// The stored count did not match `expected`; `actual` is what was found.
    StaleRead { actual: u32 },
}

/// Conditional write access to a product's available count.
///
/// The write succeeds only when the stored count still equals `expected`
/// (optimistic concurrency). An unconditional overwrite is deliberately not
/// offered: every caller must state what it believes the current count is.
pub trait InventoryWrite: Send + Sync {
    fn set_available(
        &self,
        id: ProductId,
        expected: u32,
        updated: u32,
    ) -> Result<(), InventoryWriteError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn get_many(&self, ids: &[ProductId]) -> Vec<Product> {
        (**self).get_many(ids)
    }
}

impl<S> InventoryWrite for Arc<S>
where
    S: InventoryWrite + ?Sized,
{
    fn set_available(
        &self,
        id: ProductId,
        expected: u32,
        updated: u32,
    ) -> Result<(), InventoryWriteError> {
        (**self).set_available(id, expected, updated)
    }
}
