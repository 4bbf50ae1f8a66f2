//! QueryBus integration tests.
//!
//! Covers the bus contract end to end:
//! - Defaults when nobody is subscribed
//! - Numeric, boolean and vote reductions
//! - Subscription identity, idempotency and key separation
//! - Sharing one bus across threads and re-entrant answerers
//! - The `Ask` call-site adapter and lifecycle notifications

mod adapter;
mod defaults;
mod threaded;

#[cfg(feature = "emitter")]
mod emitter;
