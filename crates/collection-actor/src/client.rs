//! # Generic Client
//!
//! The handle used to talk to a [`CollectionActor`](crate::CollectionActor).

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::{CollectionRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `CollectionActor`.
///
/// Holds only the sender half of the actor's channel, so clones are cheap and can be
/// handed to every request handler. Once every clone is dropped the actor shuts down.
pub struct CollectionClient<T: CollectionEntity> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: CollectionEntity> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CollectionEntity> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Adds a record and returns it as it was stored.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    /// Snapshot of the collection in stored order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| CollectionRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Removes a record and returns it as it was stored.
    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn execute(&self, command: T::Command) -> Result<T::CommandResult, FrameworkError> {
        self.call(|respond_to| CollectionRequest::Command {
            command,
            respond_to,
        })
        .await
    }
}
