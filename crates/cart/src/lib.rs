//! Cart domain module.
//!
//! A cart is an ordered collection of line items scoped to one visitor
//! session. Lines carry a title/price *snapshot* taken at validation time:
//! later catalog changes do not reach into an existing cart.

pub mod cart;
pub mod line;
pub mod service;

pub use cart::Cart;
pub use line::{CartLine, ValidatedLine};
pub use service::CartService;
