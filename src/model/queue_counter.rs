/// The shared daily ticket counter.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// There is exactly one counter, stored under [`CounterId::SINGLETON`].
///
/// See [`impl ActorEntity for QueueCounter`](#impl-ActorEntity-for-QueueCounter) for the
/// allocation rules.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for the counter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterId(pub u8);

impl CounterId {
    pub const SINGLETON: CounterId = CounterId(1);
}

impl Display for CounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "counter_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueCounter {
    pub id: CounterId,
    /// Last number issued on `last_reset_date`; 0 before the first allocation.
    pub current_number: u32,
    pub last_reset_date: Option<NaiveDate>,
}

impl QueueCounter {
    /// An uninitialized counter. It has not issued any number yet.
    pub fn new(id: CounterId) -> Self {
        Self {
            id,
            current_number: 0,
            last_reset_date: None,
        }
    }

    /// Issues the next number for `today`.
    ///
    /// Returns `None` only if the day's numbers are exhausted.
    pub fn next_number(&self, today: NaiveDate) -> Option<u32> {
        match self.last_reset_date {
            Some(day) if day == today => self.current_number.checked_add(1),
            _ => Some(1),
        }
    }
}

/// Payload for creating the counter. The counter starts empty, so it carries no data.
#[derive(Debug, Clone, Default)]
pub struct CounterSeed;

/// What an allocation handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub queue_number: u32,
    /// The numbering started over because the day changed (or this is the first ticket).
    pub reset: bool,
}
