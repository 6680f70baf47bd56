//! A product on the menu and the recipe it is made from.
//!
//! # Collection
//! Stored in `menu_items.json` by the menu actor. Recipe ingredients are checked against
//! the inventory when an item is created or updated.

use crate::model::IngredientId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recipe line: how much of an ingredient a single unit of the product uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemIngredient {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub ingredients: Vec<MenuItemIngredient>,
}

impl MenuItem {
    pub fn uses(&self, ingredient: &IngredientId) -> bool {
        self.ingredients
            .iter()
            .any(|line| &line.ingredient_id == ingredient)
    }
}

/// Payload for adding a product. The key is supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<MenuItemIngredient>,
}

impl From<MenuItem> for NewMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            product_id: Some(item.product_id),
            name: item.name,
            description: item.description,
            price: item.price,
            ingredients: item.ingredients,
        }
    }
}

/// Replacement values for a product. The key never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<MenuItemIngredient>,
}
