//! # Generic Collection Actor
//!
//! `CollectionActor` is the server side of a collection. It owns the records and the
//! backing file, and processes one request at a time. That sequential loop is the
//! collection's exclusive lock: a request holds it from the first read to the end of the
//! file write, and no two requests on the same collection interleave.

use crate::client::CollectionClient;
use crate::entity::{CollectionEntity, Rollback};
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::persistence::JsonFile;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one persisted collection.
///
/// # Usage Pattern
///
/// 1. **Open**: `CollectionActor::open(file, buffer)` loads the file and returns the
///    actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in its own task.
///
/// # Staged Writes
///
/// Every mutation is applied to a copy of the collection. The copy is saved, and only a
/// successful save replaces the in-memory records. After a failed save the actor still
/// holds exactly what the file holds, and the entity's `on_rollback` hook is told which
/// change was dropped.
///
/// ## Operations
///
/// * **Create**: takes the payload's key or allocates the next sequence key, rejects
///   duplicates, builds the record, runs `on_create`, appends, saves.
/// * **Get / List**: clones out of memory, never touches the file.
/// * **Update**: runs `on_update` on a copy of the record, replaces it in place, saves.
/// * **Delete**: runs `on_delete`, removes the record, saves.
/// * **Action**: runs `handle_action` on a copy of the record, saves.
/// * **Command**: runs `handle_command` over a copy of the collection and saves when the
///   command mutates.
pub struct CollectionActor<T: CollectionEntity> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    items: Vec<T>,
    file: JsonFile,
    next_sequence: u64,
    entity_type: &'static str,
}

impl<T: CollectionEntity> CollectionActor<T> {
    /// Loads the collection from `file` and creates the actor with its client.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait.
    pub fn open(file: JsonFile, buffer_size: usize) -> (Self, CollectionClient<T>) {
        let items: Vec<T> = file.load();
        // Keys at the top of the range cannot be followed and do not move the sequence.
        let next_sequence = items
            .iter()
            .filter_map(|item| T::id_sequence(item.id())?.checked_add(1))
            .max()
            .unwrap_or(1);

        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items,
            file,
            next_sequence,
            entity_type: short_type_name::<T>(),
        };
        (actor, CollectionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(
            entity_type,
            size = self.items.len(),
            path = %self.file.path().display(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.items.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.items[idx].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::List { respond_to } => {
                    debug!(entity_type, size = self.items.len(), "List");
                    let _ = respond_to.send(Ok(self.items.clone()));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.items.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, ?command, "Command");
                    let result = self.command(command, &context).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Command failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.items.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn require(&self, id: &T::Id) -> Result<usize, FrameworkError> {
        self.position(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Picks the key for a new record. Returns the sequence number consumed, if any.
    ///
    /// Fails with `MissingId` when the payload has no key and the sequence is exhausted.
    fn assign_id(&self, params: &T::Create) -> Result<(T::Id, Option<u64>), FrameworkError> {
        if let Some(id) = T::requested_id(params) {
            if self.position(&id).is_some() {
                return Err(FrameworkError::DuplicateId(id.to_string()));
            }
            return Ok((id, None));
        }

        let mut sequence = self.next_sequence;
        loop {
            let id = T::generate_id(sequence).ok_or(FrameworkError::MissingId)?;
            if self.position(&id).is_none() {
                return Ok((id, Some(sequence)));
            }
            sequence = sequence.checked_add(1).ok_or(FrameworkError::MissingId)?;
        }
    }

    async fn create(
        &mut self,
        params: T::Create,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let (id, sequence) = self.assign_id(&params)?;

        let mut item = T::from_create_params(id, params).map_err(entity_error)?;
        item.on_create(ctx).await.map_err(entity_error)?;

        let mut staged = self.items.clone();
        staged.push(item.clone());
        if let Err(e) = self.file.save(&staged).await {
            T::on_rollback(Rollback::Created(&item), ctx).await;
            return Err(e.into());
        }

        self.items = staged;
        if let Some(sequence) = sequence {
            self.next_sequence = sequence.saturating_add(1);
        }
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let idx = self.require(id)?;
        let mut working = self.items[idx].clone();
        working.on_update(update, ctx).await.map_err(entity_error)?;

        self.replace(idx, working, ctx).await
    }

    async fn delete(&mut self, id: &T::Id, ctx: &T::Context) -> Result<T, FrameworkError> {
        let idx = self.require(id)?;
        self.items[idx].on_delete(ctx).await.map_err(entity_error)?;

        let mut staged = self.items.clone();
        let removed = staged.remove(idx);
        if let Err(e) = self.file.save(&staged).await {
            T::on_rollback(Rollback::Deleted(&removed), ctx).await;
            return Err(e.into());
        }

        self.items = staged;
        Ok(removed)
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let idx = self.require(id)?;
        let mut working = self.items[idx].clone();
        let result = working
            .handle_action(action, ctx)
            .await
            .map_err(entity_error)?;

        self.replace(idx, working, ctx).await?;
        Ok(result)
    }

    async fn command(
        &mut self,
        command: T::Command,
        ctx: &T::Context,
    ) -> Result<T::CommandResult, FrameworkError> {
        let mutates = T::command_mutates(&command);
        let mut staged = self.items.clone();
        let result = T::handle_command(&mut staged, command, ctx)
            .await
            .map_err(entity_error)?;

        if mutates {
            self.file.save(&staged).await?;
            self.items = staged;
        }
        Ok(result)
    }

    async fn replace(
        &mut self,
        idx: usize,
        item: T,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut staged = self.items.clone();
        staged[idx] = item.clone();
        if let Err(e) = self.file.save(&staged).await {
            let change = Rollback::Updated {
                before: &self.items[idx],
                after: &item,
            };
            T::on_rollback(change, ctx).await;
            return Err(e.into());
        }

        self.items = staged;
        Ok(item)
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

/// "InventoryItem" instead of "hot_coffee::model::inventory::InventoryItem".
fn short_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
