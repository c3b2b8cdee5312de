use std::sync::RwLock;

use storefront_checkout::{Order, OrderLedger};
use storefront_core::{DomainError, DomainResult, Money};

/// In-memory append-only order ledger.
///
/// Intended for tests/dev. Orders are never updated or removed.
#[derive(Debug, Default)]
pub struct InMemoryOrderLedger {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderLedger for InMemoryOrderLedger {
    fn create(&self, total: Money) -> DomainResult<Order> {
        let order = Order::confirmed(total);
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::invariant("order ledger lock poisoned"))?;
        orders.push(order.clone());
        Ok(order)
    }

    fn list(&self) -> Vec<Order> {
        match self.orders.read() {
            Ok(orders) => orders.clone(),
            Err(_) => vec![],
        }
    }
}
