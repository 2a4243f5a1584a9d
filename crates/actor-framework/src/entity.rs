//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (queue counter, order,
//! order item, verification code, …) must implement to be managed by the generic
//! `ResourceActor`. It specifies associated types for IDs, DTOs, actions, filters, context
//! and errors, and provides lifecycle hooks (`on_create`, `on_update`, `on_delete`,
//! `handle_action`). Implementing this trait enables the framework to offer a uniform
//! CRUD + Action API for any domain model.
//!
//! # Provided Methods (Hooks)
//! This trait includes **Provided Methods** (methods with default implementations):
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_update`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]
//!
//! You do **not** need to implement these unless you want to customize behavior.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Identity
/// IDs are produced by the id generator handed to [`ResourceActor::new`](crate::ResourceActor::new),
/// so an entity can be keyed by a UUID, a sequence number or a natural key such as an email.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u32 newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Allocate`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Selection criteria understood by [`ActorEntity::matches`] for `List` requests.
    /// Use `()` when the resource is only ever listed in full.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients deal with a single
    /// error type, at the cost of every action sharing the same error union.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    /// Use this hook to perform validation or side effects (e.g., calling other actors).
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// Immutable resources keep the default, which leaves the entity untouched.
    async fn on_update(
        &mut self,
        _update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Queries ---

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }
}
