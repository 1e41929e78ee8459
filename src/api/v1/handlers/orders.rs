/*
 * Responsibility
 * - /orders 系 handler
 * - Path/Json を extractor で受け、DTO validation → repo 呼び出し
 * - 認可は middleware 側で済んでいる前提 (ここでは role を見ない)
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::v1::dto::orders::{CreateOrderRequest, OrderResponse},
    state::AppState,
};

pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<OrderResponse>> {
    let res = state
        .orders
        .list()
        .into_iter()
        .map(OrderResponse::from)
        .collect();

    Json(res)
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderResponse>, StatusCode> {
    let order = state.orders.get(order_id).ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(order.into()))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), StatusCode> {
    req.validate().map_err(|_| StatusCode::BAD_REQUEST)?;

    let order = state.orders.create(&req.customer, &req.item, req.quantity);

    Ok((StatusCode::CREATED, Json(order.into())))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    if state.orders.delete(order_id) {
        Ok(StatusCode::OK)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
