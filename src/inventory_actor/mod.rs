//! # Inventory Actor
//!
//! The inventory ledger: one actor owning `inventory.json`.
//!
//! Besides plain CRUD on ingredients it runs the stock [`commands`] used by orders. The
//! important one is [`InventoryCommand::Reserve`], which checks and deducts a whole
//! demand inside a single actor turn. Two orders can never both pass the check against
//! the same stock, because the second one is only looked at after the first one has
//! been deducted and saved.
//!
//! ## Structure
//!
//! - [`entity`] - [`CollectionEntity`](collection_actor::CollectionEntity) implementation for [`InventoryItem`]
//! - [`commands`] - [`InventoryCommand`] and the stock arithmetic behind it
//! - [`error`] - [`InventoryError`]
//! - [`open()`] - loads the file and returns the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hot_coffee::clients::InventoryClient;
//! use hot_coffee::inventory_actor;
//! use hot_coffee::model::{Demand, InventoryItem};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = inventory_actor::open("data/inventory.json");
//!     let inventory = InventoryClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     inventory
//!         .create_item(InventoryItem::new("coffee", "Espresso beans", 500.0, "g").into())
//!         .await?;
//!     let demand: Demand = [("coffee", 36.0)].into_iter().collect();
//!     inventory.reserve(demand).await?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::InventoryCommand;
pub use error::*;

use crate::model::InventoryItem;
use collection_actor::{CollectionActor, CollectionClient, JsonFile};
use std::path::PathBuf;

pub const FILE_NAME: &str = "inventory.json";

/// Loads the inventory from `path` and creates its actor and client.
pub fn open(
    path: impl Into<PathBuf>,
) -> (CollectionActor<InventoryItem>, CollectionClient<InventoryItem>) {
    CollectionActor::open(JsonFile::new(path), 32)
}
