//! Domain clients: typed wrappers around each actor's [`ResourceClient`](actor_framework::ResourceClient)
//! that speak in domain operations and domain errors.

pub mod order_client;
pub mod order_item_client;
pub mod queue_client;
pub mod verification_client;

pub use order_client::*;
pub use order_item_client::*;
pub use queue_client::*;
pub use verification_client::*;
