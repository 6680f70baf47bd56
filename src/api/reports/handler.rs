//! Report API Handlers

use axum::{extract::State, Json};

use crate::api::{AppResult, AppState};
use crate::model::{PopularItem, TotalSalesReport};

/// GET /reports/total-sales
pub async fn total_sales(State(state): State<AppState>) -> AppResult<Json<TotalSalesReport>> {
    Ok(Json(state.reports.total_sales().await?))
}

/// GET /reports/popular-items
pub async fn popular_items(State(state): State<AppState>) -> AppResult<Json<Vec<PopularItem>>> {
    Ok(Json(state.reports.popular_items().await?))
}
