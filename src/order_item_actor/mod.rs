//! # Order Item Actor
//!
//! Stores the lines of every order. Lines are created in one all-or-nothing batch per
//! order and read back with the order id as filter.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`OrderItem`]
//! - [`error`] - [`OrderItemError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderItemClient;
use crate::model::OrderItem;
use actor_framework::ResourceActor;

/// Creates the order item actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderItem>, OrderItemClient) {
    let (actor, generic_client) = ResourceActor::sequential(buffer_size);
    (actor, OrderItemClient::new(generic_client))
}
