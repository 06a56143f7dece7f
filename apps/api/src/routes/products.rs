//! Product handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shopdesk_core::{NewProduct, ProductPatch};

use crate::dto::{
    CreateProductRequest, MessageResponse, ProductDto, ProductMessageResponse, ProductQuery,
    UpdateProductRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /products` - all products, or one when `?product_id=` is given.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    match query.product_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let product = state.catalog().get_product(&id).await?;
            Ok(Json(ProductDto::from(product)).into_response())
        }
        None => {
            let products = state.catalog().list_products().await?;
            let products: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
            Ok(Json(products).into_response())
        }
    }
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductDto>> {
    let product = state.catalog().get_product(&id).await?;
    Ok(Json(product.into()))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductMessageResponse>)> {
    let Json(req) = payload?;
    let product = state.catalog().create_product(NewProduct::try_from(req)?).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse {
            message: "Product created successfully".to_string(),
            product: product.into(),
        }),
    ))
}

/// `PATCH /products/{id}` and `PUT /products/{id}` - both partial.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> ApiResult<Json<ProductMessageResponse>> {
    let Json(req) = payload?;
    let product = state
        .catalog()
        .update_product(&id, ProductPatch::try_from(req)?)
        .await?;

    Ok(Json(ProductMessageResponse {
        message: "Product updated successfully".to_string(),
        product: product.into(),
    }))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.catalog().delete_product(&id).await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
