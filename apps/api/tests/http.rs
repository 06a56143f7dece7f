//! End-to-end tests: the full router (middleware included) over an
//! in-memory database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shopdesk_api::config::ApiConfig;
use shopdesk_api::state::AppState;
use shopdesk_db::{Database, DbConfig};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let config = ApiConfig::from_lookup(|_| None).unwrap();
    shopdesk_api::app(AppState::new(db), &config).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_product(app: &Router, body: Value) -> Value {
    let (status, json) = send(app, Method::POST, "/products", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["product"].clone()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"The server is healthy!");

    let (status, json) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["database"], true);
    assert_eq!(json["migrationsApplied"], json["migrationsTotal"]);
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Desk Lamp", "description": "Brass", "price": "99.99" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Product created successfully");
    assert_eq!(json["product"]["price"], "99.99");
    assert_eq!(json["product"]["availableQuantity"], 10);

    let id = json["product"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, Method::GET, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Desk Lamp");

    let (_, json) = send(&app, Method::GET, &format!("/products?product_id={id}"), None).await;
    assert_eq!(json["id"], id.as_str());

    let (status, json) = send(
        &app,
        Method::PATCH,
        &format!("/products/{id}"),
        Some(json!({ "price": 120 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Product updated successfully");
    assert_eq!(json["product"]["price"], "120.00");
    assert_eq!(json["product"]["name"], "Desk Lamp");

    let (status, json) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);

    let (status, json) = send(&app, Method::DELETE, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Product deleted successfully");

    let (status, json) = send(&app, Method::GET, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Product not found");

    let (status, json) = send(
        &app,
        Method::PATCH,
        &format!("/products/{id}"),
        Some(json!({ "name": "Floor Lamp" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");

    let (status, json) = send(&app, Method::DELETE, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");
}

#[tokio::test]
async fn test_legacy_field_names() {
    let app = test_app().await;

    let product = create_product(
        &app,
        json!({
            "NAME": "Stapler",
            "DISCRIPTION": "Heavy duty",
            "PRICE": 12.5,
            "AVAILABLITY": 3,
            "USERID": "admin-1"
        }),
    )
    .await;

    assert_eq!(product["description"], "Heavy duty");
    assert_eq!(product["price"], "12.50");
    assert_eq!(product["availableQuantity"], 3);
    assert_eq!(product["createdBy"], "admin-1");
}

#[tokio::test]
async fn test_bad_product_input() {
    let app = test_app().await;

    let request = Request::post("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_BODY");

    let (status, json) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "   ", "description": "", "price": "1.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, json) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Pen", "description": "", "price": "-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let product = create_product(&app, json!({ "name": "Pen", "description": "", "price": 1 })).await;
    let id = product["id"].as_str().unwrap();
    let (status, json) = send(&app, Method::PATCH, &format!("/products/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "at least one field must be provided");
}

#[tokio::test]
async fn test_order_placement_decrements_stock() {
    let app = test_app().await;
    let product = create_product(
        &app,
        json!({ "name": "Chair", "description": "", "price": "99.99" }),
    )
    .await;
    let product_id = product["id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "productId": product_id, "quantity": 3, "orderPrice": "0.01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Order created successfully");
    assert_eq!(json["order"]["orderPrice"], "299.97");
    assert_eq!(json["order"]["status"], "PENDING");

    let order_id = json["order"]["id"].as_str().unwrap().to_string();

    let (_, json) = send(&app, Method::GET, &format!("/products/{product_id}"), None).await;
    assert_eq!(json["availableQuantity"], 7);

    let (status, json) = send(&app, Method::GET, &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["order"]["quantity"], 3);
    assert_eq!(json["product"]["id"], product_id.as_str());

    let (_, json) = send(&app, Method::GET, &format!("/orders?order_id={order_id}"), None).await;
    assert_eq!(json["order"]["id"], order_id.as_str());
}

#[tokio::test]
async fn test_order_rejections() {
    let app = test_app().await;
    let product = create_product(
        &app,
        json!({ "name": "Desk", "description": "", "price": "250", "availableQuantity": 2 }),
    )
    .await;
    let product_id = product["id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "productId": product_id, "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INSUFFICIENT_STOCK");

    let (status, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "productId": product_id, "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "productId": "missing", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");

    // Nothing was sold
    let (_, json) = send(&app, Method::GET, &format!("/products/{product_id}"), None).await;
    assert_eq!(json["availableQuantity"], 2);
    let (_, json) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_order_status_and_delete() {
    let app = test_app().await;
    let product = create_product(&app, json!({ "name": "Mug", "description": "", "price": "4.5" })).await;
    let (_, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "PRODUCTID": product["id"], "QUANTITY": 1 })),
    )
    .await;
    let order_id = json["order"]["id"].as_str().unwrap().to_string();
    let uri = format!("/orders/{order_id}");

    let (status, json) = send(&app, Method::PATCH, &uri, Some(json!({ "status": "Shipped" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Order updated successfully");
    assert_eq!(json["order"]["status"], "Shipped");

    let (status, json) = send(&app, Method::PATCH, &uri, Some(json!({ "status": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Order deleted successfully");

    let (status, json) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Order not found");

    let (status, json) = send(&app, Method::PATCH, &uri, Some(json!({ "status": "COMPLETED" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");

    // Deleting an order does not restock
    let (_, json) = send(&app, Method::GET, &format!("/products/{}", product["id"].as_str().unwrap()), None).await;
    assert_eq!(json["availableQuantity"], 9);
}

#[tokio::test]
async fn test_order_summary() {
    let app = test_app().await;
    let product = create_product(&app, json!({ "name": "Shelf", "description": "", "price": "10.00" })).await;

    for quantity in [1, 2] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/orders",
            Some(json!({ "productId": product["id"], "quantity": quantity })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, Method::GET, "/orders/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["orderCount"], 2);
    assert_eq!(json["totalRevenue"], "30.00");
    assert_eq!(json["averageOrderValue"], "15.00");
    assert_eq!(json["byStatus"]["PENDING"], 2);
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::PUT, "/orders", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_bad_query_string_is_a_json_error() {
    let app = test_app().await;

    for uri in [
        "/products?product_id=a&product_id=b",
        "/orders?order_id=a&order_id=b",
    ] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{uri}"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_price_above_catalog_limit_is_rejected() {
    let app = test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Yacht", "description": "", "price": "92233720368547758.07" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let product = create_product(
        &app,
        json!({ "name": "Yacht", "description": "", "price": "999999999.99" }),
    )
    .await;
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/orders",
            Some(json!({ "productId": product["id"], "quantity": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, Method::GET, "/orders/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalRevenue"], "1999999999.98");
    assert_eq!(json["averageOrderValue"], "999999999.99");
}

#[tokio::test]
async fn test_padded_product_id_on_order() {
    let app = test_app().await;
    let product = create_product(&app, json!({ "name": "Tray", "description": "", "price": "3" })).await;
    let id = product["id"].as_str().unwrap();

    let (status, json) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({ "productId": format!(" {id} "), "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["order"]["productId"], id);
}
