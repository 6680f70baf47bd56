//! A stocked ingredient.
//!
//! # Collection
//! Stored in `inventory.json` by [`inventory_actor`](crate::inventory_actor), which also
//! owns the stock commands (check, deduct, restore, reserve, rebalance).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for ingredients.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for IngredientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub ingredient_id: IngredientId,
    pub name: String,
    /// Amount in stock, expressed in `unit`. Never negative.
    pub quantity: f64,
    pub unit: String,
}

impl InventoryItem {
    pub fn new(
        ingredient_id: impl Into<IngredientId>,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// Payload for adding an ingredient. The key is supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInventoryItem {
    #[serde(default)]
    pub ingredient_id: Option<IngredientId>,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl From<InventoryItem> for NewInventoryItem {
    fn from(item: InventoryItem) -> Self {
        Self {
            ingredient_id: Some(item.ingredient_id),
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
        }
    }
}

/// Replacement values for an ingredient. The key never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}
