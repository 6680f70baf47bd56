//! # Entity Implementation
//!
//! [`CollectionEntity`] implementation for [`MenuItem`]. Recipes are validated against
//! the inventory in `on_create` and `on_update`.

use super::MenuError;
use crate::clients::{EntityClient, InventoryClient};
use crate::model::{MenuItem, MenuItemIngredient, MenuUpdate, NewMenuItem, ProductId};
use async_trait::async_trait;
use collection_actor::CollectionEntity;
use std::convert::Infallible;
use tracing::debug;

fn validate(name: &str, price: f64, ingredients: &[MenuItemIngredient]) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(MenuError::ValidationError(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    if let Some(line) = ingredients
        .iter()
        .find(|line| !line.quantity.is_finite() || line.quantity <= 0.0)
    {
        return Err(MenuError::ValidationError(format!(
            "recipe quantity for '{}' must be positive",
            line.ingredient_id
        )));
    }
    Ok(())
}

/// Every recipe ingredient must exist in the inventory.
async fn ensure_stocked(
    ingredients: &[MenuItemIngredient],
    inventory: &InventoryClient,
) -> Result<(), MenuError> {
    for line in ingredients {
        let stocked = inventory
            .get(line.ingredient_id.clone())
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?;
        if stocked.is_none() {
            return Err(MenuError::UnknownIngredient(line.ingredient_id.clone()));
        }
    }
    debug!(lines = ingredients.len(), "Recipe ingredients stocked");
    Ok(())
}

#[async_trait]
impl CollectionEntity for MenuItem {
    type Id = ProductId;
    type Create = NewMenuItem;
    type Update = MenuUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Command = Infallible;
    type CommandResult = ();
    type Context = InventoryClient;
    type Error = MenuError;

    fn id(&self) -> &ProductId {
        &self.product_id
    }

    fn requested_id(params: &NewMenuItem) -> Option<ProductId> {
        params
            .product_id
            .clone()
            .filter(|id| !id.0.trim().is_empty())
    }

    fn from_create_params(id: ProductId, params: NewMenuItem) -> Result<Self, MenuError> {
        validate(&params.name, params.price, &params.ingredients)?;
        Ok(Self {
            product_id: id,
            name: params.name,
            description: params.description,
            price: params.price,
            ingredients: params.ingredients,
        })
    }

    async fn on_create(&mut self, inventory: &InventoryClient) -> Result<(), MenuError> {
        ensure_stocked(&self.ingredients, inventory).await
    }

    async fn on_update(
        &mut self,
        update: MenuUpdate,
        inventory: &InventoryClient,
    ) -> Result<(), MenuError> {
        validate(&update.name, update.price, &update.ingredients)?;
        ensure_stocked(&update.ingredients, inventory).await?;
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.ingredients = update.ingredients;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &InventoryClient,
    ) -> Result<(), MenuError> {
        match action {}
    }

    async fn handle_command(
        _items: &mut Vec<Self>,
        command: Infallible,
        _ctx: &InventoryClient,
    ) -> Result<(), MenuError> {
        match command {}
    }
}
