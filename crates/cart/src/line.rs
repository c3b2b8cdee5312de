use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money, ProductId};

/// One product entry in a cart.
///
/// `title` and `subtotal` are snapshots computed when the line was validated;
/// they are never recomputed from the live product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub subtotal: Money,
}

/// Result of a successful cart validation: the product's current title and
/// price together with the requested quantity, ready to become a line.
///
/// Producing this value has no side effects; inventory is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: Money,
    pub quantity: u32,
}

impl ValidatedLine {
    /// Freeze the snapshot into a cart line, caching the subtotal.
    pub fn into_line(self) -> DomainResult<CartLine> {
        let subtotal = self.price.times(self.quantity)?;
        Ok(CartLine {
            product_id: self.product_id,
            title: self.title,
            quantity: self.quantity,
            subtotal,
        })
    }
}
