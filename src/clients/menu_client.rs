//! # Menu Client
//!
//! High-level API for the menu actor.
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuUpdate, NewMenuItem, ProductId};
use async_trait::async_trait;
use collection_actor::{CollectionClient, EntityClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: CollectionClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: CollectionClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &CollectionClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<MenuError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(FrameworkError::DuplicateId(id)) => MenuError::DuplicateId(id),
            Err(FrameworkError::MissingId) => {
                MenuError::ValidationError("product_id is required".to_string())
            }
            Err(FrameworkError::Persistence(e)) => MenuError::PersistenceError(e.to_string()),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    /// Adds a product. Every recipe ingredient must already be stocked.
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: NewMenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ProductId,
        update: MenuUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
