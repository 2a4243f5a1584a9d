//! # Resource Client
//!
//! The `ResourceClient<T>` is the *client* side of the framework. It is a cheap, cloneable
//! handle that sends [`ResourceRequest`] messages to a `ResourceActor<T>` and awaits the
//! reply on a oneshot channel. Every method maps a closed request channel to
//! [`FrameworkError::ActorClosed`] and a dropped reply to [`FrameworkError::ActorDropped`].

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates an entity and returns it as stored.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Creates every entity of the batch, or none of them.
    pub async fn create_many(&self, params: Vec<T::Create>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::CreateMany { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, filter: T::Filter) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Deletes every entity matching `filter` and returns how many were removed.
    pub async fn purge(&self, filter: T::Filter) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Purge { filter, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Performs `action` on the entity under `id`, building it from `params` first if it
    /// does not exist. Runs as one message, so it is atomic with respect to other requests.
    pub async fn upsert(
        &self,
        id: T::Id,
        params: T::Create,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Upsert {
            id,
            params,
            action,
            respond_to,
        })
        .await
    }
}
