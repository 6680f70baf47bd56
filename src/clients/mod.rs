//! Type-safe wrappers around [`CollectionClient`](collection_actor::CollectionClient), one
//! per collection. They translate framework errors back into each collection's own error
//! enum and name the domain operations.

pub mod inventory_client;
pub mod menu_client;
pub mod order_client;

pub use collection_actor::EntityClient;
pub use inventory_client::*;
pub use menu_client::*;
pub use order_client::*;
