//! Static order, product and notification catalogues.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub product: String,
    pub quantity: u32,
    pub status: String,
}

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub in_stock: bool,
}

/// A customer notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub read: bool,
}

/// Creates the catalogue router, mounted under `/api`.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/orders", get(list_orders))
        .route("/products", get(list_products))
        .route("/notifications", get(list_notifications))
}

/// List orders.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "catalog",
    responses((status = 200, description = "All orders", body = [Order]))
)]
pub async fn list_orders() -> Json<Vec<Order>> {
    Json(vec![
        Order {
            id: 1,
            product: "Widget".to_string(),
            quantity: 2,
            status: "PENDING".to_string(),
        },
        Order {
            id: 2,
            product: "Gadget".to_string(),
            quantity: 1,
            status: "SHIPPED".to_string(),
        },
    ])
}

/// List products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    responses((status = 200, description = "All products", body = [Product]))
)]
pub async fn list_products() -> Json<Vec<Product>> {
    Json(vec![
        Product {
            id: 1,
            name: "Widget".to_string(),
            price: 29.99,
            in_stock: true,
        },
        Product {
            id: 2,
            name: "Gadget".to_string(),
            price: 49.99,
            in_stock: false,
        },
    ])
}

/// List notifications.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "catalog",
    responses((status = 200, description = "All notifications", body = [Notification]))
)]
pub async fn list_notifications() -> Json<Vec<Notification>> {
    Json(vec![
        Notification {
            id: 1,
            kind: "EMAIL".to_string(),
            message: "Order confirmed".to_string(),
            read: true,
        },
        Notification {
            id: 2,
            kind: "SMS".to_string(),
            message: "Order shipped".to_string(),
            read: false,
        },
    ])
}
