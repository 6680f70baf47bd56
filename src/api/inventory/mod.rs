//! Inventory API

mod handler;

use axum::{routing::get, Router};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/inventory", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
