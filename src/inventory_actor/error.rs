use crate::model::IngredientId;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// No inventory row has the requested key.
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    /// A demand names an ingredient that is not stocked.
    #[error("ingredient '{0}' not found in inventory")]
    UnknownIngredient(IngredientId),

    /// A demand exceeds the stocked quantity.
    #[error(
        "insufficient inventory for ingredient '{ingredient}'. Required: {demanded:.2}, Available: {available:.2}"
    )]
    InsufficientStock {
        ingredient: IngredientId,
        demanded: f64,
        available: f64,
    },

    #[error("Inventory item already exists: {0}")]
    DuplicateId(String),

    /// The payload is malformed (empty name, negative quantity, missing key).
    #[error("Inventory validation error: {0}")]
    ValidationError(String),

    /// `inventory.json` could not be written; nothing was changed.
    #[error("Inventory persistence error: {0}")]
    PersistenceError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
