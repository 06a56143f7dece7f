//! # Domain Types
//!
//! Core domain types used throughout Shopdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │       Order         │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (UUID)          │◄───────│  product_id (ref)   │                │
//! │  │  name, description  │        │  user_id            │                │
//! │  │  price_cents        │        │  quantity           │                │
//! │  │  available_quantity │        │  order_price_cents  │                │
//! │  └─────────────────────┘        │  status             │                │
//! │                                 └─────────────────────┘                │
//! │                                                                         │
//! │  Inputs:  NewProduct, ProductPatch, NewOrder                           │
//! │  Outputs: OrderDetails (order + product), OrderSummary (dashboard)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Semantics
//! `Order.product_id` is NOT enforced: deleting a product leaves its orders
//! pointing at nothing. `OrderDetails.product` is therefore optional.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_STATUS_LEN;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the admin product list.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units that can still be ordered. Never negative after a commit.
    pub available_quantity: i64,

    /// Identifier of the admin user who created the product.
    pub created_by: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if `quantity` units can be taken from stock.
    #[inline]
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        self.available_quantity >= quantity
    }
}

/// Input for creating a product.
///
/// The price is already in cents: conversion from the display value happens
/// in the HTTP layer before this type is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money,
    /// `None` falls back to [`crate::DEFAULT_AVAILABLE_QUANTITY`].
    pub available_quantity: Option<i64>,
    pub created_by: Option<String>,
}

/// Partial update of a product. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub available_quantity: Option<i64>,
}

impl ProductPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.available_quantity.is_none()
    }

    /// Applies the patch to a product in place.
    ///
    /// Does not touch `updated_at`; stores stamp it themselves.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price_cents = price.cents();
        }
        if let Some(qty) = self.available_quantity {
            product.available_quantity = qty;
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// An open enumeration: the well-known values below are what the admin SPA
/// offers in its dropdown, but any non-empty value is accepted and no
/// transition rules apply (`COMPLETED → PENDING` is legal).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
#[ts(export)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const PENDING: &'static str = "PENDING";
    pub const PROCESSING: &'static str = "PROCESSING";
    pub const COMPLETED: &'static str = "COMPLETED";
    pub const CANCELLED: &'static str = "CANCELLED";

    /// Statuses the admin SPA knows how to render.
    pub const KNOWN: [&'static str; 4] = [
        Self::PENDING,
        Self::PROCESSING,
        Self::COMPLETED,
        Self::CANCELLED,
    ];

    /// The status every new order starts in.
    pub fn pending() -> Self {
        OrderStatus(Self::PENDING.to_string())
    }

    /// Parses a caller-supplied status.
    ///
    /// ## Rules
    /// - Surrounding whitespace is trimmed
    /// - Must not be empty
    /// - At most [`MAX_STATUS_LEN`] characters
    /// - Case is preserved (the relational backend stored lowercase values)
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let status = raw.trim();

        if status.is_empty() {
            return Err(ValidationError::Required {
                field: "status".to_string(),
            });
        }

        if status.chars().count() > MAX_STATUS_LEN {
            return Err(ValidationError::TooLong {
                field: "status".to_string(),
                max: MAX_STATUS_LEN,
            });
        }

        Ok(OrderStatus(status.to_string()))
    }

    /// Returns the raw status string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for one of the [`OrderStatus::KNOWN`] values.
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::pending()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order for a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    /// Product this order was placed for (unenforced reference).
    pub product_id: String,
    /// Identifier of the user who placed the order, if known.
    pub user_id: Option<String>,
    /// Units ordered (positive).
    pub quantity: i64,
    /// Product price at order time × quantity, in cents.
    pub order_price_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order price as Money.
    #[inline]
    pub fn order_price(&self) -> Money {
        Money::from_cents(self.order_price_cents)
    }
}

/// Input for creating an order.
///
/// There is deliberately no price field: the order price is always derived
/// from the catalog price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub product_id: String,
    pub user_id: Option<String>,
    pub quantity: i64,
}

/// An order together with the product it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub order: Order,
    /// `None` when the product was deleted after the order was placed.
    pub product: Option<Product>,
}

// =============================================================================
// Dashboard Summary
// =============================================================================

/// Aggregate figures shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_count: usize,
    pub total_revenue: Money,
    /// Total revenue / order count, rounded half away from zero. Zero when there are no orders.
    pub average_order_value: Money,
    /// Number of orders per status value.
    pub by_status: BTreeMap<String, usize>,
}

impl OrderSummary {
    /// Computes the summary over a set of orders.
    ///
    /// Returns `None` when the revenue total does not fit in i64 cents.
    ///
    /// ## Example
    /// ```text
    /// orders: [$10.00 PENDING, $20.00 PENDING, $5.01 CANCELLED]
    ///      │
    ///      ▼
    /// count 3, revenue $35.01, average $11.67, {PENDING: 2, CANCELLED: 1}
    /// ```
    pub fn from_orders(orders: &[Order]) -> Option<Self> {
        let total_revenue = orders
            .iter()
            .try_fold(Money::zero(), |acc, order| acc.checked_add(order.order_price()))?;

        let average_order_value = if orders.is_empty() {
            Money::zero()
        } else {
            total_revenue.checked_div_round(i64::try_from(orders.len()).ok()?)?
        };

        let mut by_status = BTreeMap::new();
        for order in orders {
            *by_status.entry(order.status.as_str().to_string()).or_insert(0) += 1;
        }

        Some(OrderSummary {
            order_count: orders.len(),
            total_revenue,
            average_order_value,
            by_status,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(cents: i64, status: &str) -> Order {
        let now = Utc::now();
        Order {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: "p".to_string(),
            user_id: None,
            quantity: 1,
            order_price_cents: cents,
            status: OrderStatus::parse(status).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default().as_str(), "PENDING");
        assert!(OrderStatus::default().is_known());
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!(OrderStatus::parse("  SHIPPED ").unwrap().as_str(), "SHIPPED");
        assert_eq!(OrderStatus::parse("completed").unwrap().as_str(), "completed");
        assert!(!OrderStatus::parse("completed").unwrap().is_known());
        assert!(OrderStatus::parse("").is_err());
        assert!(OrderStatus::parse("   ").is_err());
        assert!(OrderStatus::parse(&"X".repeat(MAX_STATUS_LEN + 1)).is_err());
    }

    #[test]
    fn test_product_patch_apply() {
        let now = Utc::now();
        let mut product = Product {
            id: "p".to_string(),
            name: "Mug".to_string(),
            description: "Ceramic".to_string(),
            price_cents: 1200,
            available_quantity: 4,
            created_by: None,
            created_at: now,
            updated_at: now,
        };

        let patch = ProductPatch {
            price: Some(Money::from_cents(1500)),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut product);

        assert_eq!(product.price_cents, 1500);
        assert_eq!(product.name, "Mug");
        assert!(ProductPatch::default().is_empty());
    }

    #[test]
    fn test_summary_from_orders() {
        let orders = vec![
            order(1000, "PENDING"),
            order(2000, "PENDING"),
            order(501, "CANCELLED"),
        ];
        let summary = OrderSummary::from_orders(&orders).unwrap();

        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.total_revenue.cents(), 3501);
        assert_eq!(summary.average_order_value.cents(), 1167);
        assert_eq!(summary.by_status.get("PENDING"), Some(&2));
        assert_eq!(summary.by_status.get("CANCELLED"), Some(&1));
    }

    #[test]
    fn test_summary_empty() {
        let summary = OrderSummary::from_orders(&[]).unwrap();
        assert_eq!(summary.order_count, 0);
        assert!(summary.total_revenue.is_zero());
        assert!(summary.average_order_value.is_zero());
        assert!(summary.by_status.is_empty());
    }

    #[test]
    fn test_summary_revenue_overflow() {
        let orders = vec![order(i64::MAX - 1, "PENDING"), order(2, "PENDING")];
        assert_eq!(OrderSummary::from_orders(&orders), None);

        let orders = vec![order(i64::MAX - 1, "PENDING"), order(1, "PENDING")];
        let summary = OrderSummary::from_orders(&orders).unwrap();
        assert_eq!(summary.total_revenue.cents(), i64::MAX);
        assert_eq!(summary.average_order_value.cents(), i64::MAX / 2 + 1);
    }
}
