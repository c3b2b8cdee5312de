//! Inventory adjuster: the only component allowed to move stock counts.

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::store::{CatalogStore, InventoryWrite, InventoryWriteError};

/// Bounded retries for a conditional write that keeps losing the race.
const CAS_RETRY_LIMIT: usize = 8;

/// Applies quantity deltas to a product's available count.
///
/// Every write is a compare-and-swap against a previously observed count, so
/// two concurrent decrements of the same product cannot both subtract from
/// the same value. A decrement that would take the count below zero fails
/// with `InsufficientStock` instead of writing.
#[derive(Debug, Clone)]
pub struct InventoryAdjuster<S> {
    store: S,
}

impl<S> InventoryAdjuster<S>
where
    S: CatalogStore + InventoryWrite,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decrement `quantity` from the current available count.
    ///
    /// Reads the count first; prefer [`decrement_from`](Self::decrement_from)
    /// when the caller already holds a freshly read value.
    pub fn decrement(&self, id: ProductId, quantity: u32) -> DomainResult<u32> {
        let seen = self
            .store
            .get(id)
            .map(|p| p.available)
            .ok_or(DomainError::NotFound)?;
        self.decrement_from(id, seen, quantity)
    }

    /// Decrement `quantity` starting from an already observed count `seen`.
    ///
    /// On a stale read the count is refreshed from the write conflict and the
    /// swap retried, up to `CAS_RETRY_LIMIT` times.
    pub fn decrement_from(&self, id: ProductId, seen: u32, quantity: u32) -> DomainResult<u32> {
        let mut current = seen;
        for _ in 0..CAS_RETRY_LIMIT {
            if current < quantity {
                return Err(DomainError::insufficient_stock(format!(
                    "product {id}: requested {quantity}, available {current}"
                )));
            }
            let updated = current - quantity;
            match self.store.set_available(id, current, updated) {
                Ok(()) => return Ok(updated),
                Err(InventoryWriteError::NotFound) => return Err(DomainError::NotFound),
                Err(InventoryWriteError::StaleRead { actual }) => {
                    tracing::debug!(product_id = %id, expected = current, actual, "stock write lost race, retrying");
                    current = actual;
                }
            }
        }
        Err(DomainError::conflict(format!(
            "product {id}: inventory contention, retries exhausted"
        )))
    }

    /// Add `quantity` back to the available count (compensation path).
    pub fn increment(&self, id: ProductId, quantity: u32) -> DomainResult<u32> {
        let mut current = self
            .store
            .get(id)
            .map(|p| p.available)
            .ok_or(DomainError::NotFound)?;
        for _ in 0..CAS_RETRY_LIMIT {
            let updated = current.checked_add(quantity).ok_or_else(|| {
                DomainError::invariant(format!("product {id}: stock counter overflow"))
            })?;
            match self.store.set_available(id, current, updated) {
                Ok(()) => return Ok(updated),
                Err(InventoryWriteError::NotFound) => return Err(DomainError::NotFound),
                Err(InventoryWriteError::StaleRead { actual }) => current = actual,
            }
        }
        Err(DomainError::conflict(format!(
            "product {id}: inventory contention, retries exhausted"
        )))
    }
}
