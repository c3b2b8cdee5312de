//! Checkout orchestration.
//!
//! Reads the cart, re-reads current availability for every referenced product
//! in one batched lookup, decrements inventory per line through conditional
//! writes, and appends an order. A failure after the first decrement triggers
//! compensating increments for everything already applied, so a checkout
//! either moves all of the cart's stock or none of it.

use std::collections::HashMap;

use storefront_cart::Cart;
use storefront_catalog::{CatalogStore, InventoryAdjuster, InventoryWrite};
use storefront_core::{DomainError, DomainResult, ProductId};

use crate::order::{Order, OrderLedger};

/// What a checkout call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to process: the session had no cart or no lines. Not a failure.
    EmptyCart,
    Completed(Order),
}

pub struct CheckoutEngine<S, L> {
    adjuster: InventoryAdjuster<S>,
    ledger: L,
}

impl<S, L> CheckoutEngine<S, L>
where
    S: CatalogStore + InventoryWrite,
    L: OrderLedger,
{
    pub fn new(store: S, ledger: L) -> Self {
        Self {
            adjuster: InventoryAdjuster::new(store),
            ledger,
        }
    }

    /// Convert the cart into an order, decrementing inventory per line.
    ///
    /// The order total comes from the cart's cached subtotals: price changes
    /// between cart mutation and checkout do not affect it. Availability,
    /// however, is re-read here and each decrement is conditioned on it.
    pub fn checkout(&self, cart: &Cart) -> DomainResult<CheckoutOutcome> {
        if cart.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let total = cart.total()?;

        // One batched re-read of current stock for every referenced product.
        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product_id).collect();
        let current: HashMap<ProductId, u32> = self
            .adjuster
            .store()
            .get_many(&ids)
            .into_iter()
            .map(|p| (p.id, p.available))
            .collect();

        let mut applied: Vec<(ProductId, u32)> = Vec::with_capacity(cart.lines().len());
        for line in cart.lines() {
            let seen = match current.get(&line.product_id) {
                Some(v) => *v,
                None => {
                    self.compensate(&applied);
                    return Err(DomainError::NotFound);
                }
            };
            if let Err(e) = self
                .adjuster
                .decrement_from(line.product_id, seen, line.quantity)
            {
                tracing::warn!(
                    product_id = %line.product_id,
                    quantity = line.quantity,
                    error = %e,
                    "checkout line failed, rolling back prior decrements"
                );
                self.compensate(&applied);
                return Err(e);
            }
            applied.push((line.product_id, line.quantity));
        }

        let order = match self.ledger.create(total) {
            Ok(o) => o,
            Err(e) => {
                self.compensate(&applied);
                return Err(e);
            }
        };

        tracing::info!(order_id = %order.id, total = %order.total, lines = applied.len(), "checkout completed");
        Ok(CheckoutOutcome::Completed(order))
    }

    /// Undo already-applied decrements after a mid-checkout failure.
    fn compensate(&self, applied: &[(ProductId, u32)]) {
        for (product_id, quantity) in applied {
            if let Err(e) = self.adjuster.increment(*product_id, *quantity) {
                // Nothing left to do but record it; the count is now short.
                tracing::error!(
                    product_id = %product_id,
                    quantity,
                    error = %e,
                    "compensating increment failed"
                );
            }
        }
    }
}
