//! # HTTP API
//!
//! JSON over HTTP in front of the store clients. Handlers translate requests into client
//! calls and store errors into [`AppError`]; they hold no state of their own.
//!
//! | Route | Methods |
//! |-------|---------|
//! | `/inventory`, `/inventory/{id}` | list, create / get, update, delete |
//! | `/menu`, `/menu/{id}` | list, create / get, update, delete |
//! | `/orders`, `/orders/{id}` | list, create / get, update, delete |
//! | `/orders/{id}/close` | close |
//! | `/reports/total-sales`, `/reports/popular-items` | get |

mod error;
mod inventory;
mod menu;
mod orders;
mod reports;

pub use error::{AppError, AppResult, ErrorBody};

use crate::catalog::Catalog;
use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::lifecycle::CafeSystem;
use crate::reports::ReportAggregator;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared handler state. Every field is a cheap clone of an actor client.
#[derive(Clone)]
pub struct AppState {
    pub inventory: InventoryClient,
    pub menu: MenuClient,
    pub orders: OrderClient,
    pub catalog: Catalog,
    pub reports: ReportAggregator,
}

impl AppState {
    pub fn new(system: &CafeSystem) -> Self {
        Self {
            inventory: system.inventory_client.clone(),
            menu: system.menu_client.clone(),
            orders: system.order_client.clone(),
            catalog: system.catalog(),
            reports: system.reports(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(inventory::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
