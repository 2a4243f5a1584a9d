//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the lifecycle of a stored resource:
///
/// - **Create** / **CreateMany**: Lifecycle start. Uses [`ActorEntity::Create`]; the actor
///   generates the id. `CreateMany` stores either every entity of the batch or none.
/// - **Get** / **List**: Retrieval by id, or by [`ActorEntity::Filter`].
/// - **Update**: State mutation with [`ActorEntity::Update`].
/// - **Delete** / **Purge**: Lifecycle end, for one id or for every entity matching a
///   filter. A purge is a single message, so it cannot remove an entity that was
///   replaced after the caller decided what to purge.
/// - **Action**: A custom [`ActorEntity::Action`] on an existing entity.
/// - **Upsert**: A custom action on the entity under a known id, building it from
///   [`ActorEntity::Create`] first when it does not exist. Both steps run inside a single
///   message, so no other request can observe or modify the entity in between.
///
/// Create requests answer with a snapshot of the stored entity rather than just its id,
/// so callers can read fields assigned during `on_create`.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    CreateMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Purge {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Upsert {
        id: T::Id,
        params: T::Create,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// The variant name, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::CreateMany { .. } => "CreateMany",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Purge { .. } => "Purge",
            ResourceRequest::Action { .. } => "Action",
            ResourceRequest::Upsert { .. } => "Upsert",
        }
    }
}
