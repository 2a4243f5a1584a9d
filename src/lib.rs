//! # DevDine ordering core
//!
//! The server side of a restaurant self-ordering app: customers build a cart from the
//! menu, check out, and get a bill with a daily queue number.
//!
//! The interesting part is the **Daily Queue Allocator**. Concurrent checkouts must get
//! distinct, gap-free numbers that start over at 1 every day. The counter is owned by its
//! own actor and every allocation is a single message to it, so no locking is needed.
//!
//! ## Modules
//!
//! - [`model`]: the stored resources (counter, orders, order items, verification codes)
//! - `*_actor`: one [`ResourceActor`](actor_framework::ResourceActor) per resource, with
//!   its entity implementation and error type
//! - [`clients`]: typed domain APIs over the actors ([`OrderClient`](clients::OrderClient)
//!   is the allocator's entry point)
//! - [`lifecycle`]: starts, wires and stops the actors, and sets up tracing
//! - [`http`]: the axum JSON API
//! - [`cart`], [`menu`], [`pricing`]: cart value object, catalogue, total policy
//! - [`config`], [`clock`]: environment configuration and the time source

pub mod cart;
pub mod clients;
pub mod clock;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_actor;
pub mod order_item_actor;
pub mod pricing;
pub mod queue_actor;
pub mod verification_actor;
