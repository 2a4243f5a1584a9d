//! Custom actions for the QueueCounter actor.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub enum CounterAction {
    /// Issues the next queue number for `today`, starting over at 1 when the date differs
    /// from the counter's last reset date.
    ///
    /// `today` is supplied by the caller so that one request sees one date throughout.
    Allocate { today: NaiveDate },
}
