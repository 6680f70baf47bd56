//! # Entity Implementation
//!
//! [`CollectionEntity`] implementation for [`Order`].
//!
//! - `on_create` reserves the order's demand in the inventory.
//! - `on_update` rejects closed orders, then swaps the old reservation for the new one.
//! - `on_delete` gives an open order's reservation back. Closed orders consumed theirs.
//!
//! The reservation is recorded on the order, so what goes back to stock is what was
//! taken, even after a recipe changes.
//! - `on_rollback` undoes the stock movement when `orders.json` cannot be written.

use super::coordinator::{held_demand, required_demand, OrderContext};
use super::{OrderAction, OrderError};
use crate::model::{NewOrder, Order, OrderId, OrderItem, OrderStatus, OrderUpdate};
use async_trait::async_trait;
use chrono::Utc;
use collection_actor::{CollectionEntity, Rollback};
use std::convert::Infallible;
use tracing::{error, info};

fn validate(customer_name: &str, items: &[OrderItem]) -> Result<(), OrderError> {
    if customer_name.trim().is_empty() {
        return Err(OrderError::ValidationError(
            "customer_name must not be empty".to_string(),
        ));
    }
    if items.is_empty() {
        return Err(OrderError::ValidationError(
            "an order needs at least one item".to_string(),
        ));
    }
    if let Some(line) = items.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::ValidationError(format!(
            "quantity for '{}' must be at least 1",
            line.product_id
        )));
    }
    Ok(())
}

async fn compensate(change: Rollback<'_, Order>, (menu, inventory): &OrderContext) -> Result<(), OrderError> {
    match change {
        Rollback::Created(order) => {
            inventory.restore(held_demand(order, menu).await?).await?;
        }
        Rollback::Updated { before, after } if before.items != after.items => {
            inventory.restore(held_demand(after, menu).await?).await?;
            inventory.deduct(held_demand(before, menu).await?).await?;
        }
        Rollback::Updated { .. } => {}
        Rollback::Deleted(order) if order.is_open() => {
            inventory.deduct(held_demand(order, menu).await?).await?;
        }
        Rollback::Deleted(_) => {}
    }
    Ok(())
}

#[async_trait]
impl CollectionEntity for Order {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Command = Infallible;
    type CommandResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    fn requested_id(params: &NewOrder) -> Option<OrderId> {
        params
            .order_id
            .clone()
            .filter(|id| !id.0.trim().is_empty())
    }

    fn generate_id(sequence: u64) -> Option<OrderId> {
        Some(OrderId::from_sequence(sequence))
    }

    fn id_sequence(id: &OrderId) -> Option<u64> {
        id.sequence()
    }

    fn from_create_params(id: OrderId, params: NewOrder) -> Result<Self, OrderError> {
        validate(&params.customer_name, &params.items)?;
        Ok(Self {
            order_id: id,
            customer_name: params.customer_name,
            items: params.items,
            status: OrderStatus::Open,
            created_at: Utc::now(),
            reserved: None,
        })
    }

    async fn on_create(&mut self, (menu, inventory): &OrderContext) -> Result<(), OrderError> {
        let demand = required_demand(&self.items, menu).await?;
        inventory.reserve(demand.clone()).await?;
        self.reserved = Some(demand);
        info!(order_id = %self.order_id, "Stock reserved");
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        (menu, inventory): &OrderContext,
    ) -> Result<(), OrderError> {
        if !self.is_open() {
            return Err(OrderError::ClosedOrderImmutable(self.order_id.clone()));
        }
        validate(&update.customer_name, &update.items)?;

        if update.items != self.items {
            let reserve = required_demand(&update.items, menu).await?;
            let release = held_demand(self, menu).await?;
            inventory.rebalance(release, reserve.clone()).await?;
            self.reserved = Some(reserve);
            info!(order_id = %self.order_id, "Stock rebalanced");
        }

        self.customer_name = update.customer_name;
        self.items = update.items;
        Ok(())
    }

    async fn on_delete(&self, (menu, inventory): &OrderContext) -> Result<(), OrderError> {
        if self.is_open() {
            inventory.restore(held_demand(self, menu).await?).await?;
            info!(order_id = %self.order_id, "Stock restored");
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::Close => {
                self.status = OrderStatus::Closed;
                Ok(self.clone())
            }
        }
    }

    async fn handle_command(
        _items: &mut Vec<Self>,
        command: Infallible,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        match command {}
    }

    async fn on_rollback(change: Rollback<'_, Self>, ctx: &OrderContext) {
        if let Err(e) = compensate(change, ctx).await {
            error!(error = %e, "Failed to compensate stock after a failed order save");
        }
    }
}
