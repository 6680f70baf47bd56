//! HTTP error mapping
//!
//! Every store error lands in one of four [`AppError`] categories:
//!
//! | Category | Status | Examples |
//! |----------|--------|----------|
//! | [`AppError::Validation`] | 400 | malformed JSON, unknown product or ingredient, insufficient stock |
//! | [`AppError::NotFound`] | 404 | unknown id on get, update, delete or close |
//! | [`AppError::Conflict`] | 409 | duplicate id, closed order, row still referenced |
//! | [`AppError::Internal`] | 500 | file write failure, actor gone |
//!
//! The body is always `{"error": "<message>"}`. Internal errors are logged and replaced
//! by a generic message.

use crate::catalog::CatalogError;
use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use crate::reports::ReportError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    /// 400
    Validation(String),

    #[error("{0}")]
    /// 404
    NotFound(String),

    #[error("{0}")]
    /// 409
    Conflict(String),

    #[error("{0}")]
    /// 500
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Internal(msg) => {
                error!(error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => msg,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<InventoryError> for AppError {
    fn from(e: InventoryError) -> Self {
        let message = e.to_string();
        match e {
            InventoryError::NotFound(_) => AppError::NotFound(message),
            InventoryError::UnknownIngredient(_)
            | InventoryError::InsufficientStock { .. }
            | InventoryError::ValidationError(_) => AppError::Validation(message),
            InventoryError::DuplicateId(_) => AppError::Conflict(message),
            InventoryError::PersistenceError(_) | InventoryError::ActorCommunicationError(_) => {
                AppError::Internal(message)
            }
        }
    }
}

impl From<MenuError> for AppError {
    fn from(e: MenuError) -> Self {
        let message = e.to_string();
        match e {
            MenuError::NotFound(_) => AppError::NotFound(message),
            MenuError::UnknownIngredient(_) | MenuError::ValidationError(_) => {
                AppError::Validation(message)
            }
            MenuError::DuplicateId(_) => AppError::Conflict(message),
            MenuError::PersistenceError(_) | MenuError::ActorCommunicationError(_) => {
                AppError::Internal(message)
            }
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        let message = e.to_string();
        match e {
            OrderError::NotFound(_) => AppError::NotFound(message),
            OrderError::UnknownProduct(_) | OrderError::ValidationError(_) => {
                AppError::Validation(message)
            }
            OrderError::ClosedOrderImmutable(_) | OrderError::DuplicateId(_) => {
                AppError::Conflict(message)
            }
            OrderError::Inventory(e) => e.into(),
            OrderError::Menu(e) => e.into(),
            OrderError::PersistenceError(_) | OrderError::ActorCommunicationError(_) => {
                AppError::Internal(message)
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        let message = e.to_string();
        match e {
            CatalogError::IngredientInUse { .. } | CatalogError::ProductInUse { .. } => {
                AppError::Conflict(message)
            }
            CatalogError::Inventory(e) => e.into(),
            CatalogError::Menu(e) => e.into(),
            CatalogError::Order(e) => e.into(),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::Order(e) => e.into(),
            ReportError::Menu(e) => e.into(),
        }
    }
}
