//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores. Each resource type is owned
//! by one actor task; everything else talks to it through a cloneable client. State is
//! never shared, so the only synchronisation is the actor's own message queue.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain models and their lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - sequential message processing over an in-memory store
//! 3. **Interface Layer** ([`ResourceClient`]) - typed request/response over channels
//!
//! Business rules are written once in the entity; the actor takes care of message passing,
//! id generation, storage and error propagation.
//!
//! ## Defining a Resource
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Table {
//!     id: u32,
//!     seats: u32,
//!     occupied: bool,
//! }
//!
//! #[derive(Debug)] struct TableCreate { seats: u32 }
//! #[derive(Debug)] enum TableAction { Seat }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("table already occupied")]
//! struct Occupied;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32;
//!     type Create = TableCreate;
//!     type Update = ();
//!     type Action = TableAction;
//!     type ActionResult = u32;
//!     type Filter = ();
//!     type Context = ();
//!     type Error = Occupied;
//!
//!     fn from_create_params(id: u32, params: TableCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, seats: params.seats, occupied: false })
//!     }
//!
//!     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<u32, Self::Error> {
//!         if self.occupied {
//!             return Err(Occupied);
//!         }
//!         self.occupied = true;
//!         Ok(self.seats)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Table>::sequential(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let table = client.create(TableCreate { seats: 4 }).await.unwrap();
//!     assert_eq!(client.perform_action(table.id, TableAction::Seat).await.unwrap(), 4);
//!     assert!(client.perform_action(table.id, TableAction::Seat).await.is_err());
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** through [`ResourceActor::run`], not at
//! construction time. An order actor that needs a queue-number client is created first
//! and handed the client when it is spawned:
//!
//! ```rust,ignore
//! let (queue_actor, queue_client) = ResourceActor::<QueueCounter>::new(32, || CounterId::SINGLETON);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32, OrderId::new);
//!
//! tokio::spawn(queue_actor.run(()));
//! tokio::spawn(order_actor.run((QueueClient::new(queue_client), clock)));
//! ```
//!
//! ## Atomic read-modify-write
//!
//! An actor handles one message at a time. Anything expressed as a single `Action` or
//! `Upsert` message therefore observes and updates the entity without interference, even
//! with many clients sending concurrently. [`ResourceClient::upsert`] additionally creates
//! the entity on first use, which suits singletons such as counters.
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] answered from a queue of
//! expectations, so client logic and actors with dependencies can be tested without
//! spawning the real dependency. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
