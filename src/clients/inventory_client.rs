//! # Inventory Client
//!
//! High-level API for the inventory actor: ingredient CRUD plus the stock commands.
use crate::inventory_actor::{InventoryCommand, InventoryError};
use crate::model::{Demand, IngredientId, InventoryItem, InventoryUpdate, NewInventoryItem};
use async_trait::async_trait;
use collection_actor::{CollectionClient, EntityClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: CollectionClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: CollectionClient<InventoryItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &CollectionClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<InventoryError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(FrameworkError::DuplicateId(id)) => InventoryError::DuplicateId(id),
            Err(FrameworkError::MissingId) => {
                InventoryError::ValidationError("ingredient_id is required".to_string())
            }
            Err(FrameworkError::Persistence(e)) => InventoryError::PersistenceError(e.to_string()),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: NewInventoryItem) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: IngredientId,
        update: InventoryUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Fails with the first unknown or short ingredient. Changes nothing.
    #[instrument(skip(self))]
    pub async fn check_sufficient(&self, demand: Demand) -> Result<(), InventoryError> {
        self.execute(InventoryCommand::CheckSufficient(demand)).await
    }

    /// Subtracts the demand without checking it first.
    #[instrument(skip(self))]
    pub async fn deduct(&self, demand: Demand) -> Result<(), InventoryError> {
        self.execute(InventoryCommand::Deduct(demand)).await
    }

    #[instrument(skip(self))]
    pub async fn restore(&self, demand: Demand) -> Result<(), InventoryError> {
        self.execute(InventoryCommand::Restore(demand)).await
    }

    /// Checks and deducts the demand in one inventory turn.
    #[instrument(skip(self))]
    pub async fn reserve(&self, demand: Demand) -> Result<(), InventoryError> {
        self.execute(InventoryCommand::Reserve(demand)).await
    }

    /// Gives back `release` and takes `reserve` in one inventory turn.
    #[instrument(skip(self))]
    pub async fn rebalance(&self, release: Demand, reserve: Demand) -> Result<(), InventoryError> {
        self.execute(InventoryCommand::Rebalance { release, reserve })
            .await
    }

    async fn execute(&self, command: InventoryCommand) -> Result<(), InventoryError> {
        debug!(?command, "Sending command");
        self.inner.execute(command).await.map_err(Self::map_error)
    }
}
