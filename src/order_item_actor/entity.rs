//! Entity trait implementation for the OrderItem domain type.

use super::OrderItemError;
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderItemId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for OrderItem {
    type Id = OrderItemId;
    type Create = OrderItemCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = OrderId;
    type Context = ();
    type Error = OrderItemError;

    /// Copies name, unit price and quantity verbatim. Rejects lines that could not have
    /// passed request validation, so a batch containing one is stored not at all.
    fn from_create_params(id: OrderItemId, params: OrderItemCreate) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(OrderItemError::Invalid(format!(
                "quantity of {} must be positive",
                params.item_name
            )));
        }
        if !params.item_price.is_finite() || params.item_price < 0.0 {
            return Err(OrderItemError::Invalid(format!(
                "price of {} must be non-negative",
                params.item_name
            )));
        }

        Ok(Self {
            id,
            order_id: params.order_id,
            item_name: params.item_name,
            item_price: params.item_price,
            quantity: params.quantity,
        })
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    fn matches(&self, order_id: &OrderId) -> bool {
        self.order_id == *order_id
    }
}
