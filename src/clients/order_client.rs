//! # Order Client
//!
//! High-level API for the order actor.
use crate::model::{NewOrder, Order, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use collection_actor::{CollectionClient, EntityClient, FrameworkError};
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
///
/// Orchestration (menu lookup, stock reservation) happens in the order actor's
/// `on_create` hook, inside the order collection's turn.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::DuplicateId(id)) => OrderError::DuplicateId(id),
            Err(FrameworkError::MissingId) => {
                OrderError::ValidationError("order_id could not be assigned".to_string())
            }
            Err(FrameworkError::Persistence(e)) => OrderError::PersistenceError(e.to_string()),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: NewOrder) -> Result<Order, OrderError> {
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces the customer and items of an open order.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn close_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Close)
            .await
            .map_err(Self::map_error)
    }
}
