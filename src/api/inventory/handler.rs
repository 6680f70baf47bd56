//! Inventory API Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppError, AppResult, AppState};
use crate::clients::EntityClient;
use crate::model::{IngredientId, InventoryItem, InventoryUpdate, NewInventoryItem};

/// GET /inventory
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.inventory.list().await?))
}

/// GET /inventory/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<IngredientId>,
) -> AppResult<Json<InventoryItem>> {
    let item = state
        .inventory
        .get(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inventory item not found: {id}")))?;
    Ok(Json(item))
}

/// POST /inventory
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewInventoryItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let Json(payload) = payload?;
    let item = state.inventory.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /inventory/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<IngredientId>,
    payload: Result<Json<InventoryUpdate>, JsonRejection>,
) -> AppResult<Json<InventoryItem>> {
    let Json(payload) = payload?;
    Ok(Json(state.inventory.update_item(id, payload).await?))
}

/// DELETE /inventory/{id}
///
/// Refused while a menu recipe still uses the ingredient.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<IngredientId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_ingredient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
