//! # Lifecycle
//!
//! Starting, wiring and stopping the store actors.
//!
//! - [`CafeSystem`] opens the three collections from the data directory, spawns their
//!   actors with the right context and hands out clients.
//! - [`tracing`] sets up the log subscriber.
//!
//! Actors are wired in dependency order. The inventory has no context, the menu gets an
//! inventory client and the orders get both. Nothing ever sends back up that chain, so a
//! store awaiting another store during its turn cannot deadlock.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::{prepare_data_dir, CafeSystem, LifecycleError};
