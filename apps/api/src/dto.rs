//! # Data Transfer Objects
//!
//! Wire types for the admin SPA. This is the only place where display prices
//! are converted: requests carry decimals (`"99.99"` or `99.99`), the domain
//! carries cents, responses carry decimal strings.
//!
//! ```text
//! { "price": "99.99" } ──Money::from_display──► Money(9999) ──to_display──► "99.99"
//! ```
//!
//! Field names are camelCase. Creation requests also accept the uppercase
//! names older SPA builds send (`NAME`, `DISCRIPTION`, `PRICE`, `AVAILABLITY`,
//! `PRODUCTID`, `QUANTITY`, `USERID`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::{
    Money, NewOrder, NewProduct, Order, OrderDetails, OrderStatus, OrderSummary, Product,
    ProductPatch, ValidationError,
};
use ts_rs::TS;

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(alias = "NAME")]
    pub name: String,
    #[serde(alias = "DISCRIPTION")]
    pub description: String,
    #[serde(alias = "PRICE")]
    pub price: Decimal,
    #[serde(default, alias = "AVAILABLITY")]
    pub available_quantity: Option<i64>,
    #[serde(default, alias = "USERID")]
    pub user_id: Option<String>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ValidationError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            name: req.name,
            description: req.description,
            price: Money::from_display(req.price)?,
            available_quantity: req.available_quantity,
            created_by: req.user_id,
        })
    }
}

/// Body of `PATCH /products/{id}` and `PUT /products/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default, alias = "NAME")]
    pub name: Option<String>,
    #[serde(default, alias = "DISCRIPTION")]
    pub description: Option<String>,
    #[serde(default, alias = "PRICE")]
    pub price: Option<Decimal>,
    #[serde(default, alias = "AVAILABLITY")]
    pub available_quantity: Option<i64>,
}

impl TryFrom<UpdateProductRequest> for ProductPatch {
    type Error = ValidationError;

    fn try_from(req: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductPatch {
            name: req.name,
            description: req.description,
            price: req.price.map(Money::from_display).transpose()?,
            available_quantity: req.available_quantity,
        })
    }
}

/// Body of `POST /orders`.
///
/// A client-sent `orderPrice` is ignored; the price always comes from the
/// catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(alias = "PRODUCTID")]
    pub product_id: String,
    #[serde(default, alias = "USERID")]
    pub user_id: Option<String>,
    #[serde(alias = "QUANTITY")]
    pub quantity: i64,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            product_id: req.product_id,
            user_id: req.user_id,
            quantity: req.quantity,
        }
    }
}

/// Body of `PATCH /orders/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(default, alias = "STATUS")]
    pub status: Option<String>,
}

/// `?product_id=` on `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub product_id: Option<String>,
}

/// `?order_id=` on `GET /orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub order_id: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// A product as the SPA sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display price, e.g. `"99.99"`
    #[ts(type = "string")]
    pub price: Decimal,
    pub available_quantity: i64,
    pub created_by: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            price: p.price().to_display(),
            id: p.id,
            name: p.name,
            description: p.description,
            available_quantity: p.available_quantity,
            created_by: p.created_by,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// An order as the SPA sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDto {
    pub id: String,
    pub product_id: String,
    pub user_id: Option<String>,
    pub quantity: i64,
    /// Display price of the whole order, e.g. `"299.97"`
    #[ts(type = "string")]
    pub order_price: Decimal,
    pub status: OrderStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        OrderDto {
            order_price: o.order_price().to_display(),
            id: o.id,
            product_id: o.product_id,
            user_id: o.user_id,
            quantity: o.quantity,
            status: o.status,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// An order with its product; `product` is null when it was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDetailsDto {
    pub order: OrderDto,
    pub product: Option<ProductDto>,
}

impl From<OrderDetails> for OrderDetailsDto {
    fn from(details: OrderDetails) -> Self {
        OrderDetailsDto {
            order: details.order.into(),
            product: details.product.map(ProductDto::from),
        }
    }
}

/// Dashboard figures for `GET /orders/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummaryDto {
    pub order_count: usize,
    #[ts(type = "string")]
    pub total_revenue: Decimal,
    /// Short form for dashboard cards, e.g. `"$1.5k"`
    pub total_revenue_compact: String,
    #[ts(type = "string")]
    pub average_order_value: Decimal,
    pub by_status: BTreeMap<String, usize>,
}

impl From<OrderSummary> for OrderSummaryDto {
    fn from(s: OrderSummary) -> Self {
        OrderSummaryDto {
            order_count: s.order_count,
            total_revenue: s.total_revenue.to_display(),
            total_revenue_compact: s.total_revenue.format_compact(),
            average_order_value: s.average_order_value.to_display(),
            by_status: s.by_status,
        }
    }
}

/// `{ message }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

/// `{ message, product }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: ProductDto,
}

/// `{ message, order }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderMessageResponse {
    pub message: String,
    pub order: OrderDto,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_product_accepts_string_or_number_price() {
        for body in [
            json!({ "name": "Lamp", "description": "", "price": "99.99" }),
            json!({ "name": "Lamp", "description": "", "price": 99.99 }),
        ] {
            let req: CreateProductRequest = serde_json::from_value(body).unwrap();
            let product = NewProduct::try_from(req).unwrap();
            assert_eq!(product.price.cents(), 9999);
            assert_eq!(product.available_quantity, None);
        }
    }

    #[test]
    fn test_create_product_legacy_field_names() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "NAME": "Lamp",
            "DISCRIPTION": "Brass",
            "PRICE": "12.5",
            "AVAILABLITY": 3,
            "USERID": "admin-1"
        }))
        .unwrap();
        let product = NewProduct::try_from(req).unwrap();

        assert_eq!(product.description, "Brass");
        assert_eq!(product.price.cents(), 1250);
        assert_eq!(product.available_quantity, Some(3));
        assert_eq!(product.created_by.as_deref(), Some("admin-1"));
    }

    #[test]
    fn test_create_order_ignores_client_price() {
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "PRODUCTID": "p-1",
            "QUANTITY": 2,
            "orderPrice": "0.01"
        }))
        .unwrap();
        let order = NewOrder::from(req);

        assert_eq!(order.product_id, "p-1");
        assert_eq!(order.quantity, 2);
        assert_eq!(order.user_id, None);
    }

    #[test]
    fn test_update_product_partial() {
        let req: UpdateProductRequest =
            serde_json::from_value(json!({ "price": "0.005" })).unwrap();
        let patch = ProductPatch::try_from(req).unwrap();

        assert_eq!(patch.price, Some(Money::from_cents(1)));
        assert!(patch.name.is_none());
        assert!(ProductPatch::try_from(UpdateProductRequest::default()).unwrap().is_empty());
    }

    #[test]
    fn test_product_dto_renders_display_price() {
        let now = Utc::now();
        let dto = ProductDto::from(Product {
            id: "p-1".to_string(),
            name: "Lamp".to_string(),
            description: String::new(),
            price_cents: 10000,
            available_quantity: 1,
            created_by: None,
            created_at: now,
            updated_at: now,
        });

        assert_eq!(dto.price, Decimal::from_str("100.00").unwrap());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["price"], "100.00");
        assert_eq!(json["availableQuantity"], 1);
    }
}
