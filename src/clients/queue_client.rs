//! # Queue Client
//!
//! Hands out queue numbers from the singleton counter.
use crate::model::{Allocation, CounterId, CounterSeed, QueueCounter};
use crate::queue_actor::{CounterAction, QueueError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct QueueClient {
    inner: ResourceClient<QueueCounter>,
}

impl QueueClient {
    pub fn new(inner: ResourceClient<QueueCounter>) -> Self {
        Self { inner }
    }

    /// Issues the next queue number for `today`.
    ///
    /// A single upsert message: the counter is created on first use and read, advanced
    /// and written back without any other request in between.
    #[instrument(skip(self))]
    pub async fn allocate(&self, today: NaiveDate) -> Result<Allocation, QueueError> {
        debug!("Sending request");
        self.inner
            .upsert(CounterId::SINGLETON, CounterSeed, CounterAction::Allocate { today })
            .await
            .map_err(Self::map_error)
    }

    /// The counter as stored, or `None` before the first allocation.
    pub async fn current(&self) -> Result<Option<QueueCounter>, QueueError> {
        self.get(CounterId::SINGLETON).await
    }
}

#[async_trait]
impl ActorClient<QueueCounter> for QueueClient {
    type Error = QueueError;

    fn inner(&self) -> &ResourceClient<QueueCounter> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<QueueError>()
            .unwrap_or_else(|e| QueueError::Unavailable(e.to_string()))
    }
}
