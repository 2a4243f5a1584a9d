//! # Order Client
//!
//! The Daily Queue Allocator's entry points: `create_order` and `get_order`.
//!
//! `create_order` validates the request, applies the [`TotalPolicy`], creates the order
//! (the order actor assigns its queue number in `on_create`) and then stores its lines in
//! one batch. Nothing is written before validation has passed, and once the order is sent
//! its lines are written by a spawned task that outlives a dropped caller.
use crate::clients::OrderItemClient;
use crate::menu::Menu;
use crate::model::{CreateOrderRequest, Order, OrderDetails, OrderDraft, OrderId, OrderReceipt};
use crate::order_actor::OrderError;
use crate::pricing::{TotalCheck, TotalPolicy};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn, Instrument};

/// Client for placing and looking up orders.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    items: OrderItemClient,
    menu: Arc<Menu>,
    policy: TotalPolicy,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        items: OrderItemClient,
        menu: Arc<Menu>,
        policy: TotalPolicy,
    ) -> Self {
        Self {
            inner,
            items,
            menu,
            policy,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<OrderReceipt, OrderError> {
        debug!(?request, "create_order called");

        let draft = request.validate().map_err(|msg| {
            warn!(reason = %msg, "Order rejected");
            OrderError::Validation(msg)
        })?;
        let check = self
            .policy
            .check(&self.menu, &draft)
            .map_err(OrderError::Validation)?;

        // Own task: once the order is sent its items are written even if the caller is dropped.
        let store = self.clone();
        let write = tokio::spawn(async move { store.store_order(draft).await }.in_current_span());
        let order = write.await.map_err(|e| {
            error!(error = %e, "Order write task failed");
            OrderError::Persistence("Failed to create order".into())
        })??;

        Ok(OrderReceipt {
            order_id: order.id,
            queue_number: order.queue_number,
            total_mismatch: matches!(check, TotalCheck::Mismatch { .. }),
        })
    }

    /// Creates the order, then its lines in one batch.
    async fn store_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        let order = self
            .inner
            .create(draft.order)
            .await
            .map_err(|e| match e.downcast_entity::<OrderError>() {
                Ok(domain) => domain,
                Err(framework) => {
                    error!(error = %framework, "Order store failed");
                    OrderError::Persistence("Failed to create order".into())
                }
            })?;

        if let Err(e) = self.items.create_items(order.id, draft.items).await {
            // The order and its queue number stay allocated with zero lines.
            error!(order_id = %order.id, queue_number = order.queue_number, error = %e, "Order stored without items");
            return Err(OrderError::Persistence("Failed to create order items".into()));
        }

        info!(order_id = %order.id, queue_number = order.queue_number, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        let items = self.items.items_for(id).await.map_err(|e| {
            error!(order_id = %id, error = %e, "Order items lookup failed");
            OrderError::Persistence("Failed to fetch order items".into())
        })?;

        Ok(OrderDetails { order, items })
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::Persistence(e.to_string()))
    }
}
