//! Session cart endpoints.
//!
//! Every handler resolves the caller's session from the request context,
//! loads the session's cart entry, and holds its lock for the whole
//! operation so concurrent requests against one cart are serialized.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};

use storefront_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", delete(clear_cart))
        .route("/items", get(list_items).post(add_item))
        .route("/items/:id", put(update_item).delete(remove_item))
}

/// Discard the session's cart entirely.
pub async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    services.carts().clear(session.session_id());
    StatusCode::NO_CONTENT.into_response()
}

fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::AddCartLineRequest>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&body.product_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let entry = services.carts().get_or_create(session.session_id());
    let mut guard = match entry.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };

    match services
        .cart_service()
        .add_line(&mut guard.cart, product_id, body.quantity)
    {
        Ok(line) => {
            tracing::debug!(
                session_id = %session.session_id(),
                product_id = %product_id,
                quantity = line.quantity,
                "cart line added"
            );
            (StatusCode::OK, Json(dto::cart_line_to_json(&line))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let items = match services.carts().get(session.session_id()) {
        Some(entry) => {
            let guard = match entry.lock() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.cart.lines().iter().map(dto::cart_line_to_json).collect()
        }
        None => Vec::new(),
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCartLineRequest>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let entry = services.carts().get_or_create(session.session_id());
    let mut guard = match entry.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };

    match services
        .cart_service()
        .upsert_line(&mut guard.cart, product_id, body.quantity)
    {
        Ok(line) => (StatusCode::OK, Json(dto::cart_line_to_json(&line))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Remove a line from the cart. Idempotent: removing an absent product
/// still returns the current lines.
pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match parse_product_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let items: Vec<serde_json::Value> = match services.carts().get(session.session_id()) {
        Some(entry) => {
            let mut guard = match entry.lock() {
                Ok(g) => g,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard
                .cart
                .remove(product_id)
                .iter()
                .map(dto::cart_line_to_json)
                .collect()
        }
        None => Vec::new(),
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
