use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId};

/// A catalog product record.
///
/// Owned by catalog storage; `available` is mutated only through the
/// conditional write path (`InventoryWrite`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub available: u32,
    pub price: Money,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        available: u32,
        price: Money,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(Self {
            id,
            title,
            available,
            price,
        })
    }
}
