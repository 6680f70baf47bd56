//! # EntityClient Trait
//!
//! Common surface for collection-specific clients. A wrapper supplies its inner
//! [`CollectionClient`] and an error mapping, and gets `get`, `list` and `delete` for free.
use crate::{CollectionClient, CollectionEntity, FrameworkError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the plain read/delete operations.
///
/// # Example
///
/// ```rust
/// use collection_actor::{CollectionClient, CollectionEntity, EntityClient, FrameworkError};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Cup { id: String }
/// #[derive(Debug, thiserror::Error)] #[error("cup error: {0}")] struct CupError(String);
///
/// #[async_trait]
/// impl CollectionEntity for Cup {
///     type Id = String; type Create = String; type Update = ();
///     type Action = Infallible; type ActionResult = ();
///     type Command = Infallible; type CommandResult = ();
///     type Context = (); type Error = CupError;
///
///     fn id(&self) -> &String { &self.id }
///     fn requested_id(params: &String) -> Option<String> { Some(params.clone()) }
///     fn from_create_params(id: String, _: String) -> Result<Self, CupError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), CupError> { Ok(()) }
///     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), CupError> { match a {} }
///     async fn handle_command(_: &mut Vec<Self>, c: Infallible, _: &()) -> Result<(), CupError> { match c {} }
/// }
///
/// struct CupClient { inner: CollectionClient<Cup> }
///
/// #[async_trait]
/// impl EntityClient<Cup> for CupClient {
///     type Error = CupError;
///     fn inner(&self) -> &CollectionClient<Cup> { &self.inner }
///     fn map_error(e: FrameworkError) -> CupError { CupError(e.to_string()) }
/// }
///
/// async fn usage(client: CupClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.get("espresso".to_string()).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: CollectionEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the collection's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// All records in stored order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a record by key, returning it.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
