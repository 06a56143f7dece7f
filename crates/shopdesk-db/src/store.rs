//! # Store Trait Implementations
//!
//! Plugs [`Database`] into the core services: every trait method delegates to
//! a repository and folds [`crate::DbError`] into `CoreError`.

use async_trait::async_trait;
use chrono::Utc;
use shopdesk_core::{
    CoreError, CoreResult, NewProduct, Order, OrderStatus, OrderStore, Product, ProductPatch,
    ProductStore, DEFAULT_AVAILABLE_QUANTITY,
};
use tracing::error;
use uuid::Uuid;

use crate::pool::Database;
use crate::repository::order::PlaceOutcome;

#[async_trait]
impl ProductStore for Database {
    async fn get_product(&self, id: &str) -> CoreResult<Option<Product>> {
        Ok(self.products().get_by_id(id).await?)
    }

    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        Ok(self.products().list().await?)
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

        self.products().insert(&product).await?;
        Ok(product)
    }

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> CoreResult<Option<Product>> {
        Ok(self.products().update(id, patch).await?)
    }

    async fn delete_product(&self, id: &str) -> CoreResult<bool> {
        Ok(self.products().delete(id).await?)
    }
}

#[async_trait]
impl OrderStore for Database {
    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>> {
        Ok(self.orders().get_by_id(id).await?)
    }

    async fn list_orders(&self) -> CoreResult<Vec<Order>> {
        Ok(self.orders().list().await?)
    }

    async fn place_order(&self, order: &Order) -> CoreResult<Order> {
        let outcome = self.orders().place(order).await.map_err(|err| {
            error!(order_id = %order.id, error = %err, "Order placement failed");
            CoreError::from(err)
        })?;

        match outcome {
            PlaceOutcome::Placed(order) => Ok(order),
            PlaceOutcome::InsufficientStock { available } => Err(CoreError::InsufficientStock {
                product_id: order.product_id.clone(),
                available,
                requested: order.quantity,
            }),
            PlaceOutcome::ProductMissing => Err(CoreError::ProductNotFound(order.product_id.clone())),
        }
    }

    async fn update_order_status(&self, id: &str, status: &OrderStatus) -> CoreResult<Option<Order>> {
        Ok(self.orders().update_status(id, status).await?)
    }

    async fn delete_order(&self, id: &str) -> CoreResult<bool> {
        Ok(self.orders().delete(id).await?)
    }
}
