use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::model::{OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order line names a product that is not on the menu.
    #[error("invalid product ID: {0}")]
    UnknownProduct(ProductId),

    /// Closed orders accept no further changes.
    #[error("order {0} is closed and cannot be modified")]
    ClosedOrderImmutable(OrderId),

    #[error("order ID already exists: {0}")]
    DuplicateId(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// Stock could not be reserved or given back.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The menu could not be consulted.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// `orders.json` could not be written; stock taken for the change was given back.
    #[error("Order persistence error: {0}")]
    PersistenceError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
