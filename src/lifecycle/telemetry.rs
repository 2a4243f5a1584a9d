//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact output, no module targets
//! (actors log an `entity_type` field instead) and filtering through `RUST_LOG`, which
//! defaults to `info`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, created orders, queue numbers
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! With `info`, placing an order reads roughly as:
//!
//! ```text
//! INFO create_order: Upsert ok entity_type="QueueCounter" id=counter_1
//! INFO create_order: Queue number assigned order_id=4f0c… queue_number=12 reset=false
//! INFO create_order: Created entity_type="Order" id=4f0c… size=12
//! INFO create_order: Created batch entity_type="OrderItem" count=2 size=23
//! INFO create_order: Order created order_id=4f0c… queue_number=12
//! ```
//!
//! Verification codes never appear in logs, at any level.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
