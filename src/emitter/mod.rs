//! Subscription lifecycle notifications (requires the `emitter` feature).
//!
//! Attach an `EventEmitter` with `QueryBus::with_emitter` to observe
//! subscriber-set changes. Each change emits `SUBSCRIBED` or `UNSUBSCRIBED`
//! with a JSON-encoded `SubscriptionEvent` as the payload.
//!
//! ```ignore
//! let mut emitter = EventEmitter::new();
//! emitter.on(query_bus::emitter::SUBSCRIBED, |payload: String| {
//!     let event: SubscriptionEvent = serde_json::from_str(&payload).unwrap();
//!     println!("{} joined {}", event.answerer, event.query);
//! });
//! let bus: QueryBus<Player> = QueryBus::new().with_emitter(emitter);
//! ```
//!
//! The emitter delivers on its own threads, so listeners run after the
//! subscribe call has returned.

use std::sync::{Mutex, PoisonError};

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::answer::AnswererId;
use crate::key::{Family, QueryKey};

/// Emitted when an answerer joins a subscriber set.
pub const SUBSCRIBED: &str = "query_bus.subscribed";
/// Emitted when an answerer leaves a subscriber set.
pub const UNSUBSCRIBED: &str = "query_bus.unsubscribed";

/// Payload of a lifecycle notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    pub family: Family,
    pub query: String,
    pub result_type: String,
    pub answerer: AnswererId,
}

impl SubscriptionEvent {
    pub fn new(family: Family, key: &QueryKey, answerer: AnswererId) -> Self {
        Self {
            family,
            query: key.name().to_string(),
            result_type: key.result_type_name().to_string(),
            answerer,
        }
    }
}

/// Forwards lifecycle events to an `EventEmitter`.
pub(crate) struct Notifier {
    emitter: Mutex<EventEmitter>,
}

impl Notifier {
    pub(crate) fn new(emitter: EventEmitter) -> Self {
        Self {
            emitter: Mutex::new(emitter),
        }
    }

    pub(crate) fn notify(&self, event_type: &str, event: &SubscriptionEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(event_type, error = %err, "dropping lifecycle notification");
                return;
            }
        };

        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.emit(event_type, payload);
    }
}
