//! A customer order.
//!
//! # Collection
//! Stored in `orders.json` by [`order_actor`](crate::order_actor). Creating an order
//! reserves the ingredients its items need.

use crate::model::{Demand, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders: zero-padded sequence numbers such as `007`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{sequence:03}"))
    }

    pub fn sequence(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Closed => f.write_str("closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Ingredients taken from stock for this order, exactly as deducted. An open order
    /// gives back this amount, whatever the recipes say by then. Absent on orders
    /// stored before reservations were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Demand>,
}

impl Order {
    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    pub fn contains(&self, product: &ProductId) -> bool {
        self.items.iter().any(|item| &item.product_id == product)
    }
}

/// Payload for placing an order. Without an `order_id` the next sequence number is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub order_id: Option<OrderId>,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    pub fn new(customer_name: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            order_id: None,
            customer_name: customer_name.into(),
            items,
        }
    }
}

/// Replacement customer and items for an open order. Status and timestamps are server-owned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: String,
    pub items: Vec<OrderItem>,
}
