//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness (plain text)
//! GET    /health/ready         - Database + migration readiness
//!
//! # Products
//! GET    /products             - List (or one via ?product_id=)
//! POST   /products             - Create
//! GET    /products/{id}        - Detail
//! PATCH  /products/{id}        - Partial update
//! PUT    /products/{id}        - Partial update
//! DELETE /products/{id}        - Hard delete
//!
//! # Orders
//! GET    /orders               - List (or one via ?order_id=)
//! POST   /orders               - Place order (decrements stock)
//! GET    /orders/summary       - Dashboard figures
//! GET    /orders/{id}          - Detail with product
//! PATCH  /orders/{id}          - Status update
//! DELETE /orders/{id}          - Hard delete (stock untouched)
//! ```

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod orders;
pub mod products;

/// All routes, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Products
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // Orders
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/summary", get(orders::order_summary))
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .patch(orders::update_order_status)
                .delete(orders::delete_order),
        )
}
