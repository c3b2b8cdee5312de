use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_catalog::{CatalogStore, InventoryWrite, InventoryWriteError, Product};
use storefront_core::ProductId;

/// In-memory catalog store.
///
/// Intended for tests/dev. Not optimized for performance. Availability
/// writes are conditional: the whole-map write lock makes the
/// compare-and-set atomic. A poisoned lock is recovered, not surfaced as a
/// domain outcome.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_map(&self) -> RwLockReadGuard<'_, HashMap<ProductId, Product>> {
        match self.products.read() {
            Ok(map) => map,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, Product>> {
        match self.products.write() {
            Ok(map) => map,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Insert or replace a product record (seeding/admin surface).
    pub fn insert(&self, product: Product) {
        self.write_map().insert(product.id, product);
    }

    /// All products, for the browse surface. Order is unspecified.
    pub fn list(&self) -> Vec<Product> {
        self.read_map().values().cloned().collect()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn get(&self, id: ProductId) -> Option<Product> {
        self.read_map().get(&id).cloned()
    }

    fn get_many(&self, ids: &[ProductId]) -> Vec<Product> {
        let map = self.read_map();
        ids.iter().filter_map(|id| map.get(id).cloned()).collect()
    }
}

impl InventoryWrite for InMemoryCatalog {
    fn set_available(
        &self,
        id: ProductId,
        expected: u32,
        updated: u32,
    ) -> Result<(), InventoryWriteError> {
        let mut map = self.write_map();
        let product = map.get_mut(&id).ok_or(InventoryWriteError::NotFound)?;
        if product.available != expected {
            return Err(InventoryWriteError::StaleRead {
                actual: product.available,
            });
        }
        product.available = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use storefront_core::Money;

    use super::*;

    fn widget(available: u32) -> Product {
        Product::new(ProductId::new(), "Widget", available, Money::from_cents(999)).unwrap()
    }

    #[test]
    fn get_many_skips_missing_ids() {
        let catalog = InMemoryCatalog::new();
        let p = widget(4);
        let id = p.id;
        catalog.insert(p);

        let found = catalog.get_many(&[id, ProductId::new()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
    }

    #[test]
    fn conditional_write_applies_when_count_matches() {
        let catalog = InMemoryCatalog::new();
        let p = widget(4);
        let id = p.id;
        catalog.insert(p);

        catalog.set_available(id, 4, 1).unwrap();
        assert_eq!(catalog.get(id).unwrap().available, 1);
    }

    #[test]
    fn conditional_write_reports_stale_read() {
        let catalog = InMemoryCatalog::new();
        let p = widget(4);
        let id = p.id;
        catalog.insert(p);

        let err = catalog.set_available(id, 9, 1).unwrap_err();
        assert_eq!(err, InventoryWriteError::StaleRead { actual: 4 });
        assert_eq!(catalog.get(id).unwrap().available, 4);
    }

    #[test]
    fn conditional_write_on_missing_product_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.set_available(ProductId::new(), 1, 0).unwrap_err();
        assert_eq!(err, InventoryWriteError::NotFound);
    }

    #[test]
    fn poisoned_lock_is_recovered_not_reported_as_missing() {
        let catalog = std::sync::Arc::new(InMemoryCatalog::new());
        let p = widget(4);
        let id = p.id;
        catalog.insert(p);

        // Panic while holding the write lock to poison it.
        let poisoner = std::sync::Arc::clone(&catalog);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.products.write().unwrap();
            panic!("poisoning the catalog lock");
        })
        .join();

        catalog.set_available(id, 4, 2).unwrap();
        assert_eq!(catalog.get(id).unwrap().available, 2);
    }
}
