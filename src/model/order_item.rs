/// A single line of a placed order. Items are written once, in a batch, right after
/// their order exists and are never changed afterwards.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
/// Items are listed per order through the [`OrderId`] filter.
use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for OrderItems. Allocated sequentially, so ids follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub u32);

impl From<u32> for OrderItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub item_name: String,
    /// Unit price frozen at order time.
    pub item_price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.item_price * f64::from(self.quantity)
    }
}

/// Payload for creating an order item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub item_name: String,
    pub item_price: f64,
    pub quantity: u32,
}
