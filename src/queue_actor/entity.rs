//! Entity trait implementation for the QueueCounter domain type.

use super::{CounterAction, QueueError};
use crate::model::{Allocation, CounterId, CounterSeed, QueueCounter};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for QueueCounter {
    type Id = CounterId;
    type Create = CounterSeed;
    type Update = ();
    type Action = CounterAction;
    type ActionResult = Allocation;
    type Filter = ();
    type Context = ();
    type Error = QueueError;

    fn from_create_params(id: CounterId, _params: CounterSeed) -> Result<Self, Self::Error> {
        Ok(Self::new(id))
    }

    /// # Actions
    /// - `Allocate`: advances the counter and persists `(today, number)`. The counter is
    ///   left untouched when the day is exhausted.
    async fn handle_action(
        &mut self,
        action: CounterAction,
        _ctx: &Self::Context,
    ) -> Result<Allocation, Self::Error> {
        match action {
            CounterAction::Allocate { today } => {
                let queue_number = self
                    .next_number(today)
                    .ok_or(QueueError::Exhausted(today))?;
                let reset = queue_number == 1;

                self.current_number = queue_number;
                self.last_reset_date = Some(today);
                Ok(Allocation {
                    queue_number,
                    reset,
                })
            }
        }
    }
}
