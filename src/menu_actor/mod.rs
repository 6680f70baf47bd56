//! # Menu Actor
//!
//! The menu catalog: one actor owning `menu_items.json`. Its context is an
//! [`InventoryClient`](crate::clients::InventoryClient), used to reject recipes that name
//! ingredients the café does not stock. Orders read recipes from here through
//! [`MenuClient::get`](crate::clients::EntityClient::get).
//!
//! - [`entity`] - [`CollectionEntity`](collection_actor::CollectionEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use collection_actor::{CollectionActor, CollectionClient, JsonFile};
use std::path::PathBuf;

pub const FILE_NAME: &str = "menu_items.json";

/// Loads the menu from `path` and creates its actor and client.
pub fn open(path: impl Into<PathBuf>) -> (CollectionActor<MenuItem>, CollectionClient<MenuItem>) {
    CollectionActor::open(JsonFile::new(path), 32)
}
