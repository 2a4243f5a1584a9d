//! # Order Item Client
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderLine};
use crate::order_item_actor::OrderItemError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderItemClient {
    inner: ResourceClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: ResourceClient<OrderItem>) -> Self {
        Self { inner }
    }

    /// Stores all lines of `order_id`, or none of them.
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub async fn create_items(
        &self,
        order_id: OrderId,
        lines: Vec<OrderLine>,
    ) -> Result<Vec<OrderItem>, OrderItemError> {
        debug!("Sending request");
        let params = lines
            .into_iter()
            .map(|line| OrderItemCreate {
                order_id,
                item_name: line.name,
                item_price: line.price,
                quantity: line.quantity,
            })
            .collect();
        self.inner.create_many(params).await.map_err(Self::map_error)
    }

    /// The lines of `order_id` in insertion order.
    #[instrument(skip(self))]
    pub async fn items_for(&self, order_id: OrderId) -> Result<Vec<OrderItem>, OrderItemError> {
        let mut items = self.inner.list(order_id).await.map_err(Self::map_error)?;
        items.sort_by_key(|item| item.id);
        Ok(items)
    }
}

#[async_trait]
impl ActorClient<OrderItem> for OrderItemClient {
    type Error = OrderItemError;

    fn inner(&self) -> &ResourceClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderItemError>()
            .unwrap_or_else(|e| OrderItemError::Unavailable(e.to_string()))
    }
}
