use std::sync::Arc;
use std::time::Duration;

use storefront_cart::CartService;
use storefront_checkout::CheckoutEngine;
use storefront_infra::{InMemoryCatalog, InMemoryOrderLedger, SessionCartStore};

/// Shared application services.
///
/// In-memory wiring only: the catalog, ledger, and session store all live
/// behind `Arc` so the cart service and checkout engine share one catalog.
pub struct AppServices {
    catalog: Arc<InMemoryCatalog>,
    ledger: Arc<InMemoryOrderLedger>,
    carts: SessionCartStore,
    cart_service: CartService<Arc<InMemoryCatalog>>,
    checkout: CheckoutEngine<Arc<InMemoryCatalog>, Arc<InMemoryOrderLedger>>,
}

pub fn build_services(session_ttl: Duration) -> AppServices {
    let catalog = Arc::new(InMemoryCatalog::new());
    let ledger = Arc::new(InMemoryOrderLedger::new());

    AppServices {
        cart_service: CartService::new(catalog.clone()),
        checkout: CheckoutEngine::new(catalog.clone(), ledger.clone()),
        carts: SessionCartStore::new(session_ttl),
        catalog,
        ledger,
    }
}

impl AppServices {
    pub fn catalog(&self) -> &Arc<InMemoryCatalog> {
        &self.catalog
    }

    pub fn ledger(&self) -> &Arc<InMemoryOrderLedger> {
        &self.ledger
    }

    pub fn carts(&self) -> &SessionCartStore {
        &self.carts
    }

    pub fn cart_service(&self) -> &CartService<Arc<InMemoryCatalog>> {
        &self.cart_service
    }

    pub fn checkout(&self) -> &CheckoutEngine<Arc<InMemoryCatalog>, Arc<InMemoryOrderLedger>> {
        &self.checkout
    }
}
