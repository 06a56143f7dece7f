//! # Services
//!
//! The operations exposed to the HTTP layer. Each one validates its input,
//! performs one store call (two for order creation) and maps "absent" results
//! to the matching `NotFound` error.
//!
//! - [`catalog::CatalogService`] - product CRUD
//! - [`orders::OrderService`] - order creation, status updates and the dashboard summary

pub mod catalog;
pub mod orders;
