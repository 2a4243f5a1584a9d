//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`), the id
/// generator and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store` needs
/// no `Mutex` or `RwLock`. A read-modify-write expressed as a single message (an
/// `Action` or an `Upsert`) is therefore atomic with respect to every other request
/// sent to the same actor.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `sequential()`) to get the `actor`
///     (server) and `client` (interface).
/// 2.  **Spawn**: Run the actor with `tokio::spawn(actor.run(context))`.
/// 3.  **Use**: Clone the client freely; the actor stops once every client is dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor whose ids come from `next_id`.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "devdine::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    match Self::build(id.clone(), params, &context).await {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::CreateMany { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "CreateMany");
                    let mut built = Vec::with_capacity(params.len());
                    let mut failure = None;
                    for p in params {
                        let id = (self.next_id)();
                        match Self::build(id.clone(), p, &context).await {
                            Ok(item) => built.push((id, item)),
                            Err(e) => {
                                failure = Some(e);
                                break;
                            }
                        }
                    }

                    if let Some(e) = failure {
                        warn!(entity_type, error = %e, "CreateMany failed, batch discarded");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    let mut created = Vec::with_capacity(built.len());
                    for (id, item) in built {
                        self.store.insert(id, item.clone());
                        created.push(item);
                    }
                    info!(
                        entity_type,
                        count = created.len(),
                        size = self.store.len(),
                        "Created batch"
                    );
                    let _ = respond_to.send(Ok(created));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Purge { filter, respond_to } => {
                    let doomed: Vec<T::Id> = self
                        .store
                        .iter()
                        .filter(|(_, item)| item.matches(&filter))
                        .map(|(id, _)| id.clone())
                        .collect();

                    let mut removed = 0;
                    for id in doomed {
                        let Some(item) = self.store.get(&id) else {
                            continue;
                        };
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed, kept");
                            continue;
                        }
                        self.store.remove(&id);
                        removed += 1;
                    }
                    debug!(entity_type, ?filter, removed, size = self.store.len(), "Purge");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Upsert {
                    id,
                    params,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Upsert");
                    let result = if let Some(item) = self.store.get_mut(&id) {
                        item.handle_action(action, &context).await
                    } else {
                        // A fresh entity is stored only if the action succeeds on it.
                        match Self::build(id.clone(), params, &context).await {
                            Ok(mut item) => {
                                let result = item.handle_action(action, &context).await;
                                if result.is_ok() {
                                    self.store.insert(id.clone(), item);
                                    info!(entity_type, %id, size = self.store.len(), "Created");
                                }
                                result
                            }
                            Err(e) => Err(e),
                        }
                    };
                    let result = result.map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Upsert ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Upsert failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn build(id: T::Id, params: T::Create, context: &T::Context) -> Result<T, T::Error> {
        let mut item = T::from_create_params(id, params)?;
        item.on_create(context).await?;
        Ok(item)
    }
}

impl<T: ActorEntity> ResourceActor<T>
where
    T::Id: From<u32>,
{
    /// Creates an actor that numbers its entities 1, 2, 3, …
    pub fn sequential(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let mut last = 0u32;
        Self::new(buffer_size, move || {
            last += 1;
            T::Id::from(last)
        })
    }
}
