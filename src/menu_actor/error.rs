use crate::model::IngredientId;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A recipe names an ingredient that is not in the inventory.
    #[error("ingredient '{0}' not found in inventory")]
    UnknownIngredient(IngredientId),

    #[error("Menu item already exists: {0}")]
    DuplicateId(String),

    #[error("Menu validation error: {0}")]
    ValidationError(String),

    #[error("Menu persistence error: {0}")]
    PersistenceError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
