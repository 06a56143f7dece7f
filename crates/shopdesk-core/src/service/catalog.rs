//! # Catalog Service
//!
//! Product CRUD on top of a [`ProductStore`].
//!
//! ## Create Flow
//! ```text
//! POST /products { name, description, price: "19.99" }
//!      │
//!      ▼
//! DTO: "19.99" → Money(1999)
//!      │
//!      ▼
//! CatalogService::create_product ← THIS MODULE
//!      ├── validate name, description, price, stock
//!      └── store.insert_product → id + timestamps assigned
//! ```

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::store::DynProductStore;
use crate::types::{NewProduct, Product, ProductPatch};
use crate::validation::{
    validate_available_quantity, validate_description, validate_id, validate_price_cents,
    validate_product_name,
};

/// Product operations.
#[derive(Clone)]
pub struct CatalogService {
    products: DynProductStore,
}

impl CatalogService {
    pub fn new(products: DynProductStore) -> Self {
        CatalogService { products }
    }

    /// Fetches a product by id.
    pub async fn get_product(&self, id: &str) -> CoreResult<Product> {
        let id = validate_id("productId", id)?;
        debug!(product_id = %id, "Fetching product");

        self.products
            .get_product(id)
            .await?
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Lists every product.
    pub async fn list_products(&self) -> CoreResult<Vec<Product>> {
        let products = self.products.list_products().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Creates a product.
    ///
    /// ## Rules
    /// - `name`: 1-200 characters after trimming
    /// - `description`: 0-2000 characters
    /// - `price`: ≥ 0
    /// - `available_quantity`: ≥ 0, defaults to 10 when omitted
    pub async fn create_product(&self, mut product: NewProduct) -> CoreResult<Product> {
        validate_product_name(&product.name)?;
        validate_description(&product.description)?;
        validate_price_cents(product.price.cents())?;
        if let Some(qty) = product.available_quantity {
            validate_available_quantity(qty)?;
        }

        product.name = product.name.trim().to_string();

        let product = self.products.insert_product(product).await?;
        info!(
            product_id = %product.id,
            price_cents = product.price_cents,
            available_quantity = product.available_quantity,
            "Product created"
        );
        Ok(product)
    }

    /// Applies a partial update. An empty patch is rejected.
    pub async fn update_product(&self, id: &str, mut patch: ProductPatch) -> CoreResult<Product> {
        let id = validate_id("productId", id)?;

        if patch.is_empty() {
            return Err(ValidationError::EmptyUpdate.into());
        }
        if let Some(name) = patch.name.as_mut() {
            validate_product_name(name)?;
            *name = name.trim().to_string();
        }
        if let Some(description) = &patch.description {
            validate_description(description)?;
        }
        if let Some(price) = patch.price {
            validate_price_cents(price.cents())?;
        }
        if let Some(qty) = patch.available_quantity {
            validate_available_quantity(qty)?;
        }

        let product = self
            .products
            .update_product(id, &patch)
            .await?
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Hard-deletes a product. Orders referencing it are left dangling.
    pub async fn delete_product(&self, id: &str) -> CoreResult<()> {
        let id = validate_id("productId", id)?;

        if !self.products.delete_product(id).await? {
            return Err(CoreError::ProductNotFound(id.to_string()));
        }

        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
