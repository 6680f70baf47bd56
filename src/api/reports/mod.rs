//! Report API

mod handler;

use axum::{routing::get, Router};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/reports", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/total-sales", get(handler::total_sales))
        .route("/popular-items", get(handler::popular_items))
}
