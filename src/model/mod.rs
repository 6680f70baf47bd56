//! Records stored by the café collections, and the values derived from them.

pub mod demand;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod report;

pub use demand::*;
pub use inventory::*;
pub use menu::*;
pub use order::*;
pub use report::*;
