//! Order API Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppError, AppResult, AppState};
use crate::clients::EntityClient;
use crate::model::{NewOrder, Order, OrderId, OrderUpdate};

/// GET /orders
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list().await?))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .get(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found: {id}")))?;
    Ok(Json(order))
}

/// POST /orders
///
/// Reserves the ingredients for every line, or fails without touching stock.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload?;
    let order = state.orders.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /orders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let Json(payload) = payload?;
    Ok(Json(state.orders.update_order(id, payload).await?))
}

/// DELETE /orders/{id}
///
/// An open order gives its ingredients back.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> AppResult<StatusCode> {
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /orders/{id}/close
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.close_order(id).await?))
}
