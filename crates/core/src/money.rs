//! Monetary amounts.
//!
//! Amounts are carried in the smallest currency unit (cents) as unsigned
//! integers. All arithmetic is checked; overflow surfaces as a domain error
//! at the call site rather than wrapping silently.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An amount in the smallest currency unit (e.g. cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Multiply a unit price by a quantity (subtotal computation).
    pub fn times(self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Money)
            .ok_or_else(|| DomainError::invariant("money overflow in multiplication"))
    }

    pub fn plus(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("money overflow in addition"))
    }
}

impl core::fmt::Display for Money {
    /// Render as a decimal amount, e.g. `1250` cents -> `12.50`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
