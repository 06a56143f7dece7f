//! Order handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shopdesk_core::NewOrder;

use crate::dto::{
    CreateOrderRequest, MessageResponse, OrderDetailsDto, OrderDto, OrderMessageResponse,
    OrderQuery, OrderSummaryDto, UpdateOrderStatusRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /orders` - all orders, or one (with its product) when `?order_id=` is given.
pub async fn list_orders(
    State(state): State<AppState>,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    match query.order_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let details = state.orders().get_order(&id).await?;
            Ok(Json(OrderDetailsDto::from(details)).into_response())
        }
        None => {
            let orders = state.orders().list_orders().await?;
            let orders: Vec<OrderDto> = orders.into_iter().map(OrderDto::from).collect();
            Ok(Json(orders).into_response())
        }
    }
}

/// `GET /orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OrderDetailsDto>> {
    let details = state.orders().get_order(&id).await?;
    Ok(Json(details.into()))
}

/// `POST /orders`
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<OrderMessageResponse>)> {
    let Json(req) = payload?;
    let order = state.orders().create_order(NewOrder::from(req)).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderMessageResponse {
            message: "Order created successfully".to_string(),
            order: order.into(),
        }),
    ))
}

/// `PATCH /orders/{id}`
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> ApiResult<Json<OrderMessageResponse>> {
    let Json(req) = payload?;
    let status = req.status.unwrap_or_default();
    let order = state.orders().update_status(&id, &status).await?;

    Ok(Json(OrderMessageResponse {
        message: "Order updated successfully".to_string(),
        order: order.into(),
    }))
}

/// `DELETE /orders/{id}` - stock is not restored.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.orders().delete_order(&id).await?;

    Ok(Json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}

/// `GET /orders/summary`
pub async fn order_summary(State(state): State<AppState>) -> ApiResult<Json<OrderSummaryDto>> {
    let summary = state.orders().summary().await?;
    Ok(Json(summary.into()))
}
