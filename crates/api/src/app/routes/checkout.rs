//! Checkout endpoint.
//!
//! The session's cart lock is held across the whole checkout so a second
//! request for the same session observes either the pre- or post-checkout
//! cart, never a partial one. Cross-session races over the same stock are
//! resolved by the engine's compare-and-swap inventory writes.

use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};

use storefront_checkout::CheckoutOutcome;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/checkout", post(checkout))
}

pub async fn checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let Some(entry) = services.carts().get(session.session_id()) else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let guard = match entry.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };

    match services.checkout().checkout(&guard.cart) {
        Ok(CheckoutOutcome::EmptyCart) => StatusCode::NO_CONTENT.into_response(),
        Ok(CheckoutOutcome::Completed(order)) => {
            (StatusCode::CREATED, Json(dto::order_to_json(&order))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
