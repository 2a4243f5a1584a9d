//! Entity trait implementation for the Order domain type.
//!
//! The queue number is not part of [`OrderCreate`]: the order actor obtains it from the
//! queue actor in `on_create`, so an order is only ever stored with its number attached.

use super::{OrderContext, OrderError};
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            queue_number: 0,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            order_type: params.order_type,
            payment_method: params.payment_method,
            total_amount: params.total_amount,
            created_at: DateTime::<Utc>::default(),
        })
    }

    /// Assigns the queue number and creation time.
    ///
    /// "Today" is read from the clock once and used for the allocation, so a request that
    /// straddles midnight still compares a single date.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (queue, clock) = ctx;
        let now = clock.now();

        let allocation = queue.allocate(now.date_naive()).await.map_err(|e| {
            warn!(order_id = %self.id, error = %e, "Queue number allocation failed");
            OrderError::Persistence("Failed to generate queue number".into())
        })?;

        self.queue_number = allocation.queue_number;
        self.created_at = now.with_timezone(&Utc);
        info!(
            order_id = %self.id,
            queue_number = self.queue_number,
            reset = allocation.reset,
            "Queue number assigned"
        );
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
