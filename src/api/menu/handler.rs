//! Menu API Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppError, AppResult, AppState};
use crate::clients::EntityClient;
use crate::model::{MenuItem, MenuUpdate, NewMenuItem, ProductId};

/// GET /menu
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.menu.list().await?))
}

/// GET /menu/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .menu
        .get(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu item not found: {id}")))?;
    Ok(Json(item))
}

/// POST /menu
///
/// Every recipe ingredient has to be stocked already.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewMenuItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let Json(payload) = payload?;
    let item = state.menu.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /menu/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    payload: Result<Json<MenuUpdate>, JsonRejection>,
) -> AppResult<Json<MenuItem>> {
    let Json(payload) = payload?;
    Ok(Json(state.menu.update_item(id, payload).await?))
}

/// DELETE /menu/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
