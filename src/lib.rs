//! # hot-coffee
//!
//! Order and inventory service for a coffee shop. Ingredients, menu items and orders live
//! in three JSON files; placing an order checks and deducts the ingredients its recipes
//! need, in one step, or changes nothing.
//!
//! ## Design
//!
//! Each collection is owned by one actor from the [`collection_actor`] crate. A request
//! holds the actor's turn until its file write is done, so requests on one collection
//! never interleave, and a failed write leaves memory equal to disk.
//!
//! Orders are the only cross-collection transaction. The order actor reads recipes from
//! the menu actor and asks the inventory actor to reserve the summed demand in a single
//! inventory turn. Neither of them ever calls back into the order actor.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`])
//! Plain serde structs, typed ids, and [`Demand`](model::Demand), the per-ingredient
//! quantities an order needs.
//!
//! ### 2. The Stores ([`inventory_actor`], [`menu_actor`], [`order_actor`])
//! [`CollectionEntity`](collection_actor::CollectionEntity) implementations with their
//! validation, hooks and errors. The transaction coordinator lives in
//! [`order_actor::coordinator`].
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers around each actor's channel that turn framework errors back into
//! store errors.
//!
//! ### 4. The Services ([`catalog`], [`reports`])
//! Delete guards that span two stores, and the sales reports.
//!
//! ### 5. The Surface ([`api`], [`config`], [`lifecycle`])
//! axum routes, command-line configuration, and [`CafeSystem`](lifecycle::CafeSystem),
//! which starts and stops the actors.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080 --dir ./data
//! ```

pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod reports;
