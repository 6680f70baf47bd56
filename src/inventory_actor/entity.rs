//! # Entity Implementation
//!
//! [`CollectionEntity`] implementation for [`InventoryItem`].

use super::commands::{self, InventoryCommand};
use super::InventoryError;
use crate::model::{IngredientId, InventoryItem, InventoryUpdate, NewInventoryItem};
use async_trait::async_trait;
use collection_actor::CollectionEntity;
use std::convert::Infallible;

fn validate(name: &str, quantity: f64) -> Result<(), InventoryError> {
    if name.trim().is_empty() {
        return Err(InventoryError::ValidationError(
            "name must not be empty".to_string(),
        ));
    }
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(InventoryError::ValidationError(format!(
            "quantity must be a non-negative number, got {quantity}"
        )));
    }
    Ok(())
}

#[async_trait]
impl CollectionEntity for InventoryItem {
    type Id = IngredientId;
    type Create = NewInventoryItem;
    type Update = InventoryUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Command = InventoryCommand;
    type CommandResult = ();
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &IngredientId {
        &self.ingredient_id
    }

    fn requested_id(params: &NewInventoryItem) -> Option<IngredientId> {
        params
            .ingredient_id
            .clone()
            .filter(|id| !id.0.trim().is_empty())
    }

    fn command_mutates(command: &InventoryCommand) -> bool {
        !command.is_read_only()
    }

    fn from_create_params(
        id: IngredientId,
        params: NewInventoryItem,
    ) -> Result<Self, InventoryError> {
        validate(&params.name, params.quantity)?;
        Ok(Self {
            ingredient_id: id,
            name: params.name,
            quantity: params.quantity,
            unit: params.unit,
        })
    }

    async fn on_update(
        &mut self,
        update: InventoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), InventoryError> {
        validate(&update.name, update.quantity)?;
        self.name = update.name;
        self.quantity = update.quantity;
        self.unit = update.unit;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), InventoryError> {
        match action {}
    }

    async fn handle_command(
        items: &mut Vec<Self>,
        command: InventoryCommand,
        _ctx: &Self::Context,
    ) -> Result<(), InventoryError> {
        commands::apply(items, command)
    }
}
