//! # shopdesk-db: Database Layer for Shopdesk
//!
//! This crate provides the SQLite record store for Shopdesk, using sqlx for
//! async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopdesk Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /orders)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderService (shopdesk-core) ── Arc<dyn OrderStore> ──┐               │
//! │                                                        │               │
//! │  ┌─────────────────────────────────────────────────────▼───────────┐   │
//! │  │                   shopdesk-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ product.rs    │    │  (embedded)  │  │   │
//! │  │   │ + store.rs    │◄───│ order.rs      │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./data/shopdesk.db)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product and order repositories
//! - [`store`] - `ProductStore` / `OrderStore` for [`Database`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopdesk_core::{CatalogService, OrderService};
//! use shopdesk_db::{Database, DbConfig};
//!
//! let db = Arc::new(Database::new(DbConfig::new("./data/shopdesk.db")).await?);
//! let catalog = CatalogService::new(db.clone());
//! let orders = OrderService::new(db.clone(), db);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use migrations::MigrationStatus;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::order::{OrderRepository, PlaceOutcome};
pub use repository::product::ProductRepository;
