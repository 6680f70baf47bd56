//! # Order Transaction Coordinator
//!
//! Turns order lines into an ingredient [`Demand`] and moves stock for it. Everything
//! here runs inside the order actor's turn, so order creations and edits are processed
//! one at a time from the menu lookup to the saved order.

use super::OrderError;
use crate::clients::{EntityClient, InventoryClient, MenuClient};
use crate::model::{Demand, MenuItem, Order, OrderItem, ProductId};
use std::collections::HashMap;
use tracing::warn;

/// Dependencies injected into the order actor.
pub type OrderContext = (MenuClient, InventoryClient);

/// Demand for `items` at current recipes. Any product missing from the menu fails
/// with `UnknownProduct` before stock is touched.
pub async fn required_demand(items: &[OrderItem], menu: &MenuClient) -> Result<Demand, OrderError> {
    build_demand(items, menu, true).await
}

/// Stock an existing order is holding: the reservation recorded on it. Orders stored
/// without one are priced at current recipes, skipping products that left the menu.
pub async fn held_demand(order: &Order, menu: &MenuClient) -> Result<Demand, OrderError> {
    match &order.reserved {
        Some(reserved) => Ok(reserved.clone()),
        None => build_demand(&order.items, menu, false).await,
    }
}

async fn build_demand(
    items: &[OrderItem],
    menu: &MenuClient,
    strict: bool,
) -> Result<Demand, OrderError> {
    let mut recipes: HashMap<ProductId, Option<MenuItem>> = HashMap::new();
    let mut demand = Demand::new();

    for line in items {
        if !recipes.contains_key(&line.product_id) {
            let recipe = menu.get(line.product_id.clone()).await?;
            recipes.insert(line.product_id.clone(), recipe);
        }

        match recipes.get(&line.product_id).and_then(Option::as_ref) {
            Some(recipe) => {
                for ingredient in &recipe.ingredients {
                    demand.add(
                        ingredient.ingredient_id.clone(),
                        ingredient.quantity * f64::from(line.quantity),
                    );
                }
            }
            None if strict => return Err(OrderError::UnknownProduct(line.product_id.clone())),
            None => {
                warn!(product_id = %line.product_id, "Product no longer on the menu, skipping its ingredients")
            }
        }
    }

    Ok(demand)
}
