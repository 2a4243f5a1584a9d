//! Pure data structures managed by the resource actors, plus the wire-level request types
//! they are built from.

pub mod order;
pub mod order_item;
pub mod queue_counter;
pub mod verification;

pub use order::*;
pub use order_item::*;
pub use queue_counter::*;
pub use verification::*;
