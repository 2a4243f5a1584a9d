//! # Queue Actor
//!
//! Owns the singleton [`QueueCounter`] that hands out daily ticket numbers.
//!
//! ## Overview
//!
//! The counter is the only shared mutable state in the ordering flow. Allocation is a
//! single `Upsert` message ("apply `Allocate` to the singleton, creating it first if it
//! does not exist"), and the actor processes one message at a time, so the
//! read-advance-write of the counter can never interleave between concurrent orders.
//!
//! ```rust,ignore
//! let (actor, queue) = queue_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let first = queue.allocate(today).await?;   // 1
//! let second = queue.allocate(today).await?;  // 2
//! let next_day = queue.allocate(tomorrow).await?; // 1 again
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`QueueCounter`]
//! - [`error`] - [`QueueError`]
//! - [`actions`] - [`CounterAction`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::QueueClient;
use crate::model::{CounterId, QueueCounter};
use actor_framework::ResourceActor;

/// Creates the counter actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<QueueCounter>, QueueClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, || CounterId::SINGLETON);
    (actor, QueueClient::new(generic_client))
}
