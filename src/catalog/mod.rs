//! # Catalog Guard
//!
//! Referential checks for deleting menu and inventory rows. They read one collection and
//! then delete from another, so they are not atomic: a recipe or order created between
//! the check and the delete is not seen. Order creation does not rely on these checks;
//! it validates products and stock itself inside the order actor's turn.

use crate::clients::{EntityClient, InventoryClient, MenuClient, OrderClient};
use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::model::{IngredientId, InventoryItem, MenuItem, OrderId, ProductId};
use crate::order_actor::OrderError;
use thiserror::Error;
use tracing::{instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("ingredient '{ingredient}' is used by menu item '{product}'")]
    IngredientInUse {
        ingredient: IngredientId,
        product: ProductId,
    },

    #[error("menu item '{product}' is part of open order '{order}'")]
    ProductInUse { product: ProductId, order: OrderId },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Clone)]
pub struct Catalog {
    inventory: InventoryClient,
    menu: MenuClient,
    orders: OrderClient,
}

impl Catalog {
    pub fn new(inventory: InventoryClient, menu: MenuClient, orders: OrderClient) -> Self {
        Self {
            inventory,
            menu,
            orders,
        }
    }

    /// Deletes an ingredient unless a recipe still uses it.
    #[instrument(skip(self))]
    pub async fn delete_ingredient(&self, id: IngredientId) -> Result<InventoryItem, CatalogError> {
        let menu = self.menu.list().await?;
        if let Some(item) = menu.iter().find(|item| item.uses(&id)) {
            warn!(ingredient_id = %id, product_id = %item.product_id, "Ingredient still in a recipe");
            return Err(CatalogError::IngredientInUse {
                ingredient: id,
                product: item.product_id.clone(),
            });
        }
        Ok(self.inventory.delete(id).await?)
    }

    /// Deletes a product unless an open order still contains it.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<MenuItem, CatalogError> {
        let orders = self.orders.list().await?;
        if let Some(order) = orders
            .iter()
            .find(|order| order.is_open() && order.contains(&id))
        {
            warn!(product_id = %id, order_id = %order.order_id, "Product still in an open order");
            return Err(CatalogError::ProductInUse {
                product: id,
                order: order.order_id.clone(),
            });
        }
        Ok(self.menu.delete(id).await?)
    }
}
