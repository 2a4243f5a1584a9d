//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the complexity lives.
//! [`OrderSystem`] creates every actor, injects dependencies through the run context,
//! starts the background verification sweeper and shuts everything down in order.
//!
//! ## Dependency graph
//!
//! ```text
//! OrderClient ──► Order actor ──(context: QueueClient, clock)──► QueueCounter actor
//!      └────────► OrderItem actor
//! VerificationClient ──► VerificationCode actor ◄── sweeper task
//! ```
//!
//! The graph is acyclic, so shutdown needs no explicit message: dropping the clients
//! closes the channels and each actor stops once every sender to it is gone. The order
//! actor holds a queue client in its context, so the counter stops after the orders do.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the whole process.

pub mod order_system;
pub mod telemetry;

pub use order_system::*;
pub use telemetry::*;
