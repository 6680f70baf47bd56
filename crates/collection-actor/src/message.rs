//! # Generic Messages
//!
//! Requests sent from a [`CollectionClient`](crate::CollectionClient) to its
//! [`CollectionActor`](crate::CollectionActor).

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The CRUD variants map onto the repository operations (`add`, `get`, `list`, `update`,
/// `delete`). `Action` targets one record by key; `Command` sees the whole collection.
/// Payload types come from the entity's associated types, so a request can only carry
/// payloads meant for that collection.
#[derive(Debug)]
pub enum CollectionRequest<T: CollectionEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Command {
        command: T::Command,
        respond_to: Response<T::CommandResult>,
    },
}
