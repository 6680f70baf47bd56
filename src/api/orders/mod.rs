//! Order API

mod handler;

use axum::{
    routing::{get, post},
    Router,
};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/orders", routes())
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
        .route("/{id}/close", post(handler::close))
}
