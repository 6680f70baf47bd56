//! # Order Actor
//!
//! The order ledger: one actor owning `orders.json`, with the transaction coordinator
//! running inside its hooks.
//!
//! ## Creating an order
//!
//! 1. The key is the caller's `order_id`, or the next zero-padded sequence number. A
//!    taken key fails with `DuplicateId` before anything else happens.
//! 2. Every product is looked up on the menu; an unknown one fails with
//!    `UnknownProduct` and nothing is touched.
//! 3. Recipe quantities times line quantities are summed per ingredient.
//! 4. The inventory reserves that demand in one turn, or fails with the first
//!    unknown or short ingredient.
//! 5. The order is stored as `open` with `created_at = now`. If the file cannot be
//!    written, the reservation is given back.
//!
//! Because all of this happens in one order actor turn and the order actor is the only
//! caller of `reserve`, concurrent orders are checked against stock one after another.
//!
//! ## Structure
//!
//! - [`coordinator`] - demand building and the [`OrderContext`]
//! - [`entity`] - [`CollectionEntity`](collection_actor::CollectionEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`]
//! - [`error`] - [`OrderError`]

pub mod actions;
pub mod coordinator;
pub mod entity;
pub mod error;

pub use actions::*;
pub use coordinator::OrderContext;
pub use error::*;

use crate::model::Order;
use collection_actor::{CollectionActor, CollectionClient, JsonFile};
use std::path::PathBuf;

pub const FILE_NAME: &str = "orders.json";

/// Loads the orders from `path` and creates their actor and client.
pub fn open(path: impl Into<PathBuf>) -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::open(JsonFile::new(path), 32)
}
