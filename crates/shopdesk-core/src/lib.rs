//! # shopdesk-core: Pure Business Logic for Shopdesk
//!
//! This crate is the **heart** of Shopdesk. It contains the catalog and order
//! rules, written against abstract store traits so that no concrete I/O lives
//! here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin SPA (React)                            │   │
//! │  │    Product List ──► Product Form ──► Order Form ──► Dashboard   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /products, /orders, /orders/summary, /health                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  service  │  │   store   │  │   │
//! │  │   │  Product  │  │   Money   │  │  Catalog  │  │  traits   │  │   │
//! │  │   │   Order   │  │  codec    │  │  Orders   │  │  memory   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopdesk-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, store implementations      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderStatus, ...)
//! - [`money`] - Money type and the display-price codec
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//! - [`store`] - Record store traits and the in-memory store
//! - [`service`] - Catalog and order operations
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All stored monetary values are cents (i64)
//! 2. **One Conversion Edge**: Display decimals are converted exactly once, at the HTTP boundary
//! 3. **Atomic Stock**: Stock is decremented only through `OrderStore::place_order`
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopdesk_core::money::Money;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let price = Money::from_display(Decimal::from_str("99.99").unwrap()).unwrap();
//! assert_eq!(price.cents(), 9999);
//!
//! let line_total = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line_total.cents(), 29997);
//! assert_eq!(line_total.to_string(), "$299.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use service::catalog::CatalogService;
pub use service::orders::OrderService;
pub use store::{OrderStore, ProductStore};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock assigned to a product created without an explicit quantity.
pub const DEFAULT_AVAILABLE_QUANTITY: i64 = 10;

/// Maximum quantity of a single order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 10000 instead of 10)
/// and keeps `price × quantity` far away from i64 overflow.
pub const MAX_ORDER_QUANTITY: i64 = 9_999;

/// Highest catalog price in cents ($999,999,999.99).
///
/// With [`MAX_ORDER_QUANTITY`] a single order stays below 10^15 cents.
pub const MAX_PRICE_CENTS: i64 = 99_999_999_999;

/// Maximum length of an order status value.
pub const MAX_STATUS_LEN: usize = 32;
