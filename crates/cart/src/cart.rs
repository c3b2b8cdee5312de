use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money, ProductId};

use crate::line::CartLine;

/// Session-scoped ordered collection of line items pending checkout.
///
/// Invariant: at most one line per `product_id`. `put` keeps insertion order
/// when replacing an existing line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently carried for a product, if present.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
    }

    /// Insert a line, replacing in place any existing line for the same
    /// product. Returns a clone of the stored line.
    pub fn put(&mut self, line: CartLine) -> CartLine {
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            Some(existing) => {
                *existing = line.clone();
            }
            None => self.lines.push(line.clone()),
        }
        line
    }

    /// Remove the line for `product_id`, if any. Idempotent; returns the
    /// remaining sequence.
    pub fn remove(&mut self, product_id: ProductId) -> &[CartLine] {
        self.lines.retain(|l| l.product_id != product_id);
        &self.lines
    }

    /// Sum of the cached line subtotals.
    pub fn total(&self) -> DomainResult<Money> {
        self.lines
            .iter()
            .try_fold(Money::ZERO, |acc, l| acc.plus(l.subtotal))
    }
}
