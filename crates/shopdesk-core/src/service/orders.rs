//! # Order Service
//!
//! Order creation, status updates and the dashboard summary.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order { productId, quantity: 3 }                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate id + quantity (1..=9999)        ─── fail → Validation      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. products.get_product                     ─── none → ProductNotFound │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. available >= quantity?                   ─── no → InsufficientStock │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. order_price = price × quantity           ─── overflow → Validation  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. orders.place_order (decrement + insert, one unit)                   │
//! │       │                                                                 │
//! │       └── re-checks stock at commit time; a concurrent order that       │
//! │           drained it turns this into InsufficientStock                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 3 is a fast path only. The authoritative check is the one inside
//! `place_order`.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::store::{DynOrderStore, DynProductStore};
use crate::types::{NewOrder, Order, OrderDetails, OrderStatus, OrderSummary};
use crate::validation::{validate_id, validate_order_quantity};
use crate::MAX_ORDER_QUANTITY;

/// Order operations.
#[derive(Clone)]
pub struct OrderService {
    products: DynProductStore,
    orders: DynOrderStore,
}

impl OrderService {
    pub fn new(products: DynProductStore, orders: DynOrderStore) -> Self {
        OrderService { products, orders }
    }

    /// Fetches an order together with its product.
    ///
    /// The product is `None` when it was deleted after the order was placed.
    pub async fn get_order(&self, id: &str) -> CoreResult<OrderDetails> {
        let id = validate_id("orderId", id)?;

        let order = self
            .orders
            .get_order(id)
            .await?
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;

        let product = self.products.get_product(&order.product_id).await?;
        if product.is_none() {
            debug!(order_id = %id, product_id = %order.product_id, "Order references a deleted product");
        }

        Ok(OrderDetails { order, product })
    }

    /// Lists every order.
    pub async fn list_orders(&self) -> CoreResult<Vec<Order>> {
        let orders = self.orders.list_orders().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Places an order and decrements the product's stock.
    ///
    /// The order price is always computed from the catalog price.
    pub async fn create_order(&self, input: NewOrder) -> CoreResult<Order> {
        let product_id = validate_id("productId", &input.product_id)?;
        validate_order_quantity(input.quantity)?;

        let Some(product) = self.products.get_product(product_id).await? else {
            warn!(product_id = %product_id, "Order rejected: product not found");
            return Err(CoreError::ProductNotFound(product_id.to_string()));
        };

        if !product.can_fulfil(input.quantity) {
            warn!(
                product_id = %product.id,
                available = product.available_quantity,
                requested = input.quantity,
                "Order rejected: insufficient stock"
            );
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                available: product.available_quantity,
                requested: input.quantity,
            });
        }

        let order_price = product
            .price()
            .checked_multiply_quantity(input.quantity)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: MAX_ORDER_QUANTITY,
            })?;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            user_id: input.user_id,
            quantity: input.quantity,
            order_price_cents: order_price.cents(),
            status: OrderStatus::pending(),
            created_at: now,
            updated_at: now,
        };

        let order = match self.orders.place_order(&order).await {
            Ok(order) => order,
            Err(err @ (CoreError::InsufficientStock { .. } | CoreError::ProductNotFound(_))) => {
                warn!(product_id = %product.id, error = %err, "Order rejected at commit");
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        info!(
            order_id = %order.id,
            product_id = %order.product_id,
            quantity = order.quantity,
            order_price_cents = order.order_price_cents,
            "Order placed"
        );
        Ok(order)
    }

    /// Replaces an order's status. Any non-empty value up to 32 characters is
    /// accepted, regardless of the current status.
    pub async fn update_status(&self, id: &str, status: &str) -> CoreResult<Order> {
        let id = validate_id("orderId", id)?;
        let status = OrderStatus::parse(status)?;

        let order = self
            .orders
            .update_order_status(id, &status)
            .await?
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;

        if !status.is_known() {
            debug!(order_id = %id, status = %status, "Order moved to a custom status");
        }
        info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }

    /// Hard-deletes an order. Stock is not restored.
    pub async fn delete_order(&self, id: &str) -> CoreResult<()> {
        let id = validate_id("orderId", id)?;

        if !self.orders.delete_order(id).await? {
            return Err(CoreError::OrderNotFound(id.to_string()));
        }

        info!(order_id = %id, "Order deleted");
        Ok(())
    }

    /// Computes the dashboard figures over all orders.
    pub async fn summary(&self) -> CoreResult<OrderSummary> {
        let orders = self.orders.list_orders().await?;
        OrderSummary::from_orders(&orders).ok_or_else(|| {
            CoreError::store(format!(
                "revenue over {} orders exceeds the representable range",
                orders.len()
            ))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
