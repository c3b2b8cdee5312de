//! Infrastructure layer: in-memory adapters behind the domain seams.
//!
//! Persistence technology is deliberately out of scope; these adapters back
//! the catalog, order ledger, and session store for dev and tests.

pub mod catalog;
pub mod orders;
pub mod sessions;

pub use catalog::InMemoryCatalog;
pub use orders::InMemoryOrderLedger;
pub use sessions::{CartEntry, SessionCartStore};
