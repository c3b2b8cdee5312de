use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money, OrderId};

/// Order lifecycle status.
///
/// Only the initial state is modeled; no further transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

/// A completed order. Created exactly once per checkout; immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_date: DateTime<Utc>,
    pub total: Money,
    pub status: OrderStatus,
}

impl Order {
    pub fn confirmed(total: Money) -> Self {
        Self {
            id: OrderId::new(),
            order_date: Utc::now(),
            total,
            status: OrderStatus::Confirmed,
        }
    }
}

/// Append-only store of completed orders.
pub trait OrderLedger: Send + Sync {
    /// Persist a new confirmed order with the given total and return it.
    fn create(&self, total: Money) -> DomainResult<Order>;

    fn list(&self) -> Vec<Order>;
}

impl<L> OrderLedger for Arc<L>
where
    L: OrderLedger + ?Sized,
{
    fn create(&self, total: Money) -> DomainResult<Order> {
        (**self).create(total)
    }

    fn list(&self) -> Vec<Order> {
        (**self).list()
    }
}
