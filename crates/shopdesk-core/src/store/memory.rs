//! # In-Memory Store
//!
//! A `Vec`-backed implementation of both store traits, guarded by a single
//! mutex. Every trait call holds the lock for its whole duration, so
//! `place_order` checks, decrements and inserts without interleaving.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::store::{OrderStore, ProductStore};
use crate::types::{NewProduct, Order, OrderStatus, Product, ProductPatch};
use crate::DEFAULT_AVAILABLE_QUANTITY;

#[derive(Debug, Default)]
struct Records {
    products: Vec<Product>,
    orders: Vec<Order>,
}

/// In-memory record store.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use shopdesk_core::store::memory::MemoryStore;
/// use shopdesk_core::{CatalogService, OrderService};
///
/// let store = Arc::new(MemoryStore::new());
/// let catalog = CatalogService::new(store.clone());
/// let orders = OrderService::new(store.clone(), store);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, Records>> {
        self.records
            .lock()
            .map_err(|_| CoreError::store("memory store lock poisoned"))
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get_product(&self, id: &str) -> CoreResult<Option<Product>> {
        let records = self.lock()?;
        Ok(records.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        Ok(self.lock()?.products.clone())
    }

    async fn insert_product(&self, product: NewProduct) -> CoreResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: product.name,
            description: product.description,
            price_cents: product.price.cents(),
            available_quantity: product
                .available_quantity
                .unwrap_or(DEFAULT_AVAILABLE_QUANTITY),
            created_by: product.created_by,
            created_at: now,
            updated_at: now,
        };

        self.lock()?.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> CoreResult<Option<Product>> {
        let mut records = self.lock()?;
        let Some(product) = records.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply_to(product);
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: &str) -> CoreResult<bool> {
        let mut records = self.lock()?;
        let before = records.products.len();
        records.products.retain(|p| p.id != id);
        Ok(records.products.len() != before)
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>> {
        let records = self.lock()?;
        Ok(records.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list_orders(&self) -> CoreResult<Vec<Order>> {
        Ok(self.lock()?.orders.clone())
    }

    async fn place_order(&self, order: &Order) -> CoreResult<Order> {
        let mut records = self.lock()?;

        let product = records
            .products
            .iter_mut()
            .find(|p| p.id == order.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(order.product_id.clone()))?;

        if !product.can_fulfil(order.quantity) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id.clone(),
                available: product.available_quantity,
                requested: order.quantity,
            });
        }

        product.available_quantity -= order.quantity;
        product.updated_at = order.created_at;

        records.orders.push(order.clone());
        Ok(order.clone())
    }

    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CoreResult<Option<Order>> {
        let mut records = self.lock()?;
        let Some(order) = records.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        order.status = status.clone();
        order.updated_at = Utc::now();
        Ok(Some(order.clone()))
    }

    async fn delete_order(&self, id: &str) -> CoreResult<bool> {
        let mut records = self.lock()?;
        let before = records.orders.len();
        records.orders.retain(|o| o.id != id);
        Ok(records.orders.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn new_product(qty: Option<i64>) -> NewProduct {
        NewProduct {
            name: "Desk Lamp".to_string(),
            description: "Brass, warm white".to_string(),
            price: Money::from_cents(4500),
            available_quantity: qty,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_default_stock() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product(None)).await.unwrap();

        assert!(!product.id.is_empty());
        assert_eq!(product.available_quantity, DEFAULT_AVAILABLE_QUANTITY);
        assert_eq!(store.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product(Some(1))).await.unwrap();

        assert!(store.delete_product(&product.id).await.unwrap());
        assert!(!store.delete_product(&product.id).await.unwrap());
        assert!(store.get_product(&product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_place_order_rejects_short_stock_without_writing() {
        let store = MemoryStore::new();
        let product = store.insert_product(new_product(Some(2))).await.unwrap();
        let now = Utc::now();
        let order = Order {
            id: "o-1".to_string(),
            product_id: product.id.clone(),
            user_id: None,
            quantity: 3,
            order_price_cents: 13500,
            status: OrderStatus::pending(),
            created_at: now,
            updated_at: now,
        };

        let err = store.place_order(&order).await.unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 2, requested: 3, .. }));

        let product = store.get_product(&product.id).await.unwrap().unwrap();
        assert_eq!(product.available_quantity, 2);
        assert!(store.list_orders().await.unwrap().is_empty());
    }
}
