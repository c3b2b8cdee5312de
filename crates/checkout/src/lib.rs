//! Checkout domain module.
//!
//! Converts a cart into a durable order while adjusting inventory. The engine
//! is the orchestrator; order persistence sits behind the `OrderLedger` seam.

pub mod engine;
pub mod order;

pub use engine::{CheckoutEngine, CheckoutOutcome};
pub use order::{Order, OrderLedger, OrderStatus};
