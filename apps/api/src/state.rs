//! Application state shared across handlers.

use std::sync::Arc;

use shopdesk_core::{CatalogService, OrderService};
use shopdesk_db::Database;

/// Application state shared across all handlers.
///
/// Built once in `main` (or per test) and handed to axum as router state;
/// cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Arc<Database>,
    catalog: CatalogService,
    orders: OrderService,
}

impl AppState {
    /// Wires both services to the same database.
    pub fn new(db: Database) -> Self {
        let db = Arc::new(db);
        Self {
            inner: Arc::new(AppStateInner {
                catalog: CatalogService::new(db.clone()),
                orders: OrderService::new(db.clone(), db.clone()),
                db,
            }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}
