//! # Order Repository
//!
//! Database operations for orders, including the one write path that touches
//! two tables: placing an order.
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place() - one transaction                           │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    UPDATE products                                                     │
//! │       SET available_quantity = available_quantity - :q                 │
//! │     WHERE id = :product AND available_quantity >= :q                   │
//! │       │                                                                 │
//! │       ├── 0 rows → SELECT available_quantity                           │
//! │       │            ├── row    → InsufficientStock { available }        │
//! │       │            └── no row → ProductMissing                         │
//! │       │            (ROLLBACK on drop, nothing written)                 │
//! │       │                                                                 │
//! │       └── 1 row  → INSERT INTO orders ...                              │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  The UPDATE takes the write lock first, so two concurrent placements   │
//! │  serialize on it and the second one sees the first one's decrement.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use shopdesk_core::{Order, OrderStatus};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ORDER_COLUMNS: &str =
    "id, product_id, user_id, quantity, order_price_cents, status, created_at, updated_at";

/// Result of [`OrderRepository::place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Stock decremented and order inserted.
    Placed(Order),
    /// The product holds fewer units than requested. Nothing was written.
    InsufficientStock { available: i64 },
    /// The product does not exist. Nothing was written.
    ProductMissing,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        debug!(id = %id, "Fetching order");

        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Lists every order in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Decrements the product's stock and inserts the order atomically.
    pub async fn place(&self, order: &Order) -> DbResult<PlaceOutcome> {
        debug!(
            id = %order.id,
            product_id = %order.product_id,
            quantity = order.quantity,
            "Placing order"
        );

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let decremented = sqlx::query(
            r#"
            UPDATE products
            SET
                available_quantity = available_quantity - ?2,
                updated_at = ?3
            WHERE id = ?1 AND available_quantity >= ?2
            "#,
        )
        .bind(&order.product_id)
        .bind(order.quantity)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            let available: Option<i64> =
                sqlx::query_scalar("SELECT available_quantity FROM products WHERE id = ?1")
                    .bind(&order.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            // tx is rolled back on drop
            return Ok(match available {
                Some(available) => PlaceOutcome::InsufficientStock { available },
                None => PlaceOutcome::ProductMissing,
            });
        }

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, product_id, user_id, quantity, order_price_cents,
                status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&order.id)
        .bind(&order.product_id)
        .bind(&order.user_id)
        .bind(order.quantity)
        .bind(order.order_price_cents)
        .bind(&order.status)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        Ok(PlaceOutcome::Placed(order.clone()))
    }

    /// Replaces an order's status.
    ///
    /// ## Returns
    /// * `Ok(Some(Order))` - Updated order
    /// * `Ok(None)` - Order doesn't exist
    pub async fn update_status(&self, id: &str, status: &OrderStatus) -> DbResult<Option<Order>> {
        debug!(id = %id, status = %status, "Updating order status");

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders SET status = ?2, updated_at = ?3
            WHERE id = ?1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Hard-deletes an order. Stock is not restored.
    pub async fn delete(&self, id: &str) -> DbResult<bool> {
        debug!(id = %id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
