use axum::Router;

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod system;

/// Router for all session-scoped store endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .merge(checkout::router())
}
