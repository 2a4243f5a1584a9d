//! # Verification Actor
//!
//! A time-boxed, in-process store of one-time codes keyed by email. Nothing here is
//! durable: codes are lost on restart.
//!
//! Codes that were verified or found expired are marked consumed instead of being deleted
//! on the spot. The lifecycle's sweeper purges consumed and expired codes in one message,
//! so a code reissued in the meantime is never removed by mistake.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`VerificationCode`]
//! - [`error`] - [`VerificationError`]
//! - [`actions`] - [`VerificationAction`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::VerificationClient;
use crate::clock::SharedClock;
use crate::model::VerificationCode;
use actor_framework::ResourceActor;
use std::time::Duration;

/// Creates the verification actor and its client.
///
/// Entities are always addressed by email through `upsert`, so the id generator is
/// never consulted for them.
pub fn new(
    buffer_size: usize,
    clock: SharedClock,
    ttl: Duration,
) -> (ResourceActor<VerificationCode>, VerificationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, String::new);
    (actor, VerificationClient::new(generic_client, clock, ttl))
}
