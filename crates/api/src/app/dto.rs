use serde::Deserialize;

use storefront_cart::CartLine;
use storefront_catalog::Product;
use storefront_checkout::Order;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub available: u32,
    /// Unit price in the smallest currency unit (cents).
    pub price: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddCartLineRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartLineRequest {
    pub quantity: u32,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "title": p.title,
        "available": p.available,
        "price": p.price.cents(),
    })
}

pub fn cart_line_to_json(line: &CartLine) -> serde_json::Value {
    serde_json::json!({
        "product_id": line.product_id.to_string(),
        "title": line.title,
        "quantity": line.quantity,
        "subtotal": line.subtotal.cents(),
    })
}

pub fn order_to_json(order: &Order) -> serde_json::Value {
    serde_json::json!({
        "id": order.id.to_string(),
        "order_date": order.order_date.to_rfc3339(),
        "total": order.total.cents(),
        "status": match order.status {
            storefront_checkout::OrderStatus::Confirmed => "confirmed",
        },
    })
}
