//! # Order Actor
//!
//! Stores placed orders. It depends on the queue actor: every order gets its queue number
//! inside `Order::on_create`, through the [`QueueClient`] injected as run context together
//! with the clock.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type shared by the whole order flow
//! - [`new()`] - Factory function that creates the actor and its raw client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (queue_actor, queue_client) = queue_actor::new(32);
//! let (order_actor, orders) = order_actor::new(32);
//!
//! tokio::spawn(queue_actor.run(()));
//! tokio::spawn(order_actor.run((queue_client, Arc::new(SystemClock) as SharedClock)));
//! ```
//!
//! The raw client is wrapped by [`OrderClient`](crate::clients::OrderClient), which also
//! needs the order item client.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::QueueClient;
use crate::clock::SharedClock;
use crate::model::{Order, OrderId};
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies injected into the Order actor when it starts.
pub type OrderContext = (QueueClient, SharedClock);

/// Creates a new Order actor and its client. Ids are random UUIDs.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, OrderId::new)
}
