//! # CollectionEntity Trait
//!
//! The contract every persisted record (inventory row, menu item, order) implements so a
//! generic [`CollectionActor`](crate::CollectionActor) can own it. Associated types pin the
//! payloads for each operation, so an inventory actor cannot be handed an order payload.
//!
//! # Provided Methods (Hooks)
//! Only `on_update`, `handle_action` and `handle_command` are required. `on_create`,
//! `on_delete` and `on_rollback` default to doing nothing.
//!
//! # Identity
//! Records keep their key inside themselves (`id()`), because the whole collection is
//! written to disk as a plain JSON array. A create payload may carry its own key
//! (`requested_id`); when it does not, the actor asks `generate_id` for the next value of
//! a monotonic sequence. Entities that never generate keys leave `generate_id` at its
//! default, and a payload without a key is rejected.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// A change whose hooks already ran but which could not be written to disk.
///
/// Handed to [`CollectionEntity::on_rollback`] so side effects performed by the hooks
/// (for example stock reserved in another collection) can be undone.
#[derive(Debug)]
pub enum Rollback<'a, T> {
    Created(&'a T),
    Updated { before: &'a T, after: &'a T },
    Deleted(&'a T),
}

/// Trait that any record must implement to be stored by [`CollectionActor`](crate::CollectionActor).
///
/// # Async & Context
/// Hooks are async so they can talk to other actors. `Context` carries those
/// dependencies and is injected once through `run(context)`.
#[async_trait]
pub trait CollectionEntity:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Key of the record, unique within its collection.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// Payload for creating a record.
    type Create: Send + Sync + Debug;

    /// Payload for updating a record.
    type Update: Send + Sync + Debug;

    /// Record-level operations beyond CRUD. Use `std::convert::Infallible` when there are none.
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    /// Collection-level operations that read or rewrite several records in one turn.
    /// Use `std::convert::Infallible` when there are none.
    type Command: Send + Sync + Debug;

    type CommandResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per collection, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// The key carried by a create payload, if any.
    fn requested_id(params: &Self::Create) -> Option<Self::Id>;

    /// Builds a key from the collection's sequence number.
    /// `None` means this collection only accepts caller-supplied keys.
    fn generate_id(_sequence: u64) -> Option<Self::Id> {
        None
    }

    /// Reverse of `generate_id`, used to seed the sequence from records loaded at startup.
    fn id_sequence(_id: &Self::Id) -> Option<u64> {
        None
    }

    /// Whether a command changes records and must be written back.
    fn command_mutates(_command: &Self::Command) -> bool {
        true
    }

    /// Construct the record from its key and payload. Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the record is staged for writing.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to a working copy of the record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed. An error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Runs a command against a staged copy of the whole collection.
    async fn handle_command(
        items: &mut Vec<Self>,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::CommandResult, Self::Error>;

    /// Called when a change passed its hooks but the collection could not be saved.
    async fn on_rollback(_change: Rollback<'_, Self>, _ctx: &Self::Context) {}
}
