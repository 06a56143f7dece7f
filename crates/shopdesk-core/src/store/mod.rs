//! # Record Store Traits
//!
//! The boundary between business rules and persistence.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Implementations                              │
//! │                                                                         │
//! │   CatalogService / OrderService                                        │
//! │        │  Arc<dyn ProductStore>, Arc<dyn OrderStore>                   │
//! │        ▼                                                                │
//! │   ┌──────────────────────────┐     ┌──────────────────────────┐       │
//! │   │ shopdesk_db::Database    │     │ memory::MemoryStore      │       │
//! │   │ SQLite, one transaction  │     │ one mutex, used by the   │       │
//! │   │ per place_order          │     │ service tests            │       │
//! │   └──────────────────────────┘     └──────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Rule
//! `OrderStore::place_order` is the only write that lowers
//! `available_quantity`. It must check, decrement and insert as one unit so
//! that concurrent orders can never drive stock below zero.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{NewProduct, Order, OrderStatus, Product, ProductPatch};

pub mod memory;

/// Shared handle to a product store.
pub type DynProductStore = Arc<dyn ProductStore>;

/// Shared handle to an order store.
pub type DynOrderStore = Arc<dyn OrderStore>;

/// Product persistence.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches one product. `Ok(None)` when the id is unknown.
    async fn get_product(&self, id: &str) -> CoreResult<Option<Product>>;

    /// Lists every product in insertion order.
    async fn list_products(&self) -> CoreResult<Vec<Product>>;

    /// Inserts a product, assigning its id and timestamps.
    ///
    /// `available_quantity: None` stores [`crate::DEFAULT_AVAILABLE_QUANTITY`].
    async fn insert_product(&self, product: NewProduct) -> CoreResult<Product>;

    /// Applies a patch. `Ok(None)` when the id is unknown.
    async fn update_product(&self, id: &str, patch: &ProductPatch) -> CoreResult<Option<Product>>;

    /// Hard-deletes a product. Returns false when the id is unknown.
    async fn delete_product(&self, id: &str) -> CoreResult<bool>;
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetches one order. `Ok(None)` when the id is unknown.
    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>>;

    /// Lists every order in insertion order.
    async fn list_orders(&self) -> CoreResult<Vec<Order>>;

    /// Atomically decrements the product's stock by `order.quantity` and
    /// inserts the order.
    ///
    /// ## Errors
    /// - `InsufficientStock` when the stock at commit time is below the quantity
    /// - `ProductNotFound` when the product no longer exists
    /// - `Store` for any persistence failure (nothing is written)
    async fn place_order(&self, order: &Order) -> CoreResult<Order>;

    /// Replaces the status of an order. `Ok(None)` when the id is unknown.
    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CoreResult<Option<Order>>;

    /// Hard-deletes an order without touching stock. False when unknown.
    async fn delete_order(&self, id: &str) -> CoreResult<bool>;
}
