//! # Collection Actor
//!
//! Building blocks for JSON-backed record collections that are safe to share between
//! concurrent request handlers. Each collection is one actor: a Tokio task that owns the
//! records and their backing file and processes requests one at a time.
//!
//! ## Why an actor per collection?
//!
//! - **Exclusive access without locks**: the run loop handles one request at a time, and
//!   a request keeps that turn through the file write. Two mutations on one collection
//!   never interleave.
//! - **Memory follows disk**: mutations are staged on a copy, saved, and only then
//!   adopted. A failed save leaves the in-memory collection equal to the file.
//! - **Typed payloads**: the [`CollectionEntity`] associated types decide what a create,
//!   update, action or command carries for each collection.
//! - **Coordination by message**: hooks receive a `Context` with clients of other
//!   collections, so a record can consult or reserve resources elsewhere during its own
//!   turn.
//!
//! ## Quick Start
//!
//! ```rust
//! use collection_actor::{CollectionActor, CollectionEntity, JsonFile};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Ticket { id: String, table: u32 }
//!
//! #[derive(Debug)] struct NewTicket { table: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl CollectionEntity for Ticket {
//!     type Id = String;
//!     type Create = NewTicket;
//!     type Update = u32;
//!     type Action = Infallible;
//!     type ActionResult = ();
//!     type Command = Infallible;
//!     type CommandResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn id(&self) -> &String { &self.id }
//!     fn requested_id(_: &NewTicket) -> Option<String> { None }
//!     fn generate_id(sequence: u64) -> Option<String> { Some(format!("{sequence:03}")) }
//!     fn id_sequence(id: &String) -> Option<u64> { id.parse().ok() }
//!
//!     fn from_create_params(id: String, params: NewTicket) -> Result<Self, TicketError> {
//!         Ok(Self { id, table: params.table })
//!     }
//!     async fn on_update(&mut self, table: u32, _: &()) -> Result<(), TicketError> {
//!         self.table = table;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), TicketError> { match a {} }
//!     async fn handle_command(_: &mut Vec<Self>, c: Infallible, _: &()) -> Result<(), TicketError> { match c {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let dir = std::env::temp_dir().join("collection-actor-doc");
//!     std::fs::create_dir_all(&dir).unwrap();
//!     let file = JsonFile::new(dir.join("tickets.json"));
//!     # let _ = std::fs::remove_file(file.path());
//!
//!     let (actor, client) = CollectionActor::<Ticket>::open(file, 10);
//!     tokio::spawn(actor.run(()));
//!
//!     let ticket = client.create(NewTicket { table: 4 }).await.unwrap();
//!     assert_eq!(ticket.id, "001");
//!     let stored = client.get(ticket.id).await.unwrap().unwrap();
//!     assert_eq!(stored.table, 4);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the loop starts (`actor.run(context)`), not when the
//! actor is opened, so actors can be opened in any order and wired afterwards. Keep the
//! dependency graph acyclic: an actor awaiting another actor during its turn must never be
//! awaited back by it.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`CollectionClient`] from scripted expectations,
//! which lets a collection with dependencies be tested against fake neighbours.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod persistence;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::EntityClient;
pub use entity::{CollectionEntity, Rollback};
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
pub use persistence::{JsonFile, PersistenceError};
