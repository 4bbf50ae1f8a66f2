//! QueryBus — subscribe answerers, ask questions, get one answer back.
//!
//! The bus is a plain value owned by whatever composes the application; there
//! is no global instance. Share it with `Arc<QueryBus<C>>` when producers and
//! consumers live on different threads.
//!
//! ```
//! use query_bus::{Answerer, BoolAnswer, QueryBus, VoteAnswer};
//!
//! struct Unit {
//!     armor: i32,
//!     stunned: bool,
//! }
//!
//! let bus: QueryBus<Unit> = QueryBus::new();
//!
//! let base = Answerer::new(|unit: &Unit| unit.armor);
//! let shield = Answerer::new(|_: &Unit| 5);
//! bus.subscribe_number("armor", &base);
//! bus.subscribe_number("armor", &shield);
//!
//! let stun = Answerer::new(|unit: &Unit| BoolAnswer::new(unit.stunned, false));
//! bus.subscribe_bool("can_act", &stun);
//!
//! let stance = Answerer::new(|_: &Unit| VoteAnswer::cast("guard", 1));
//! bus.subscribe_vote("stance", &stance);
//!
//! let unit = Unit { armor: 10, stunned: true };
//! assert_eq!(bus.sum::<i32>("armor", &unit), 15);
//! assert!(!bus.and("can_act", &unit));
//! assert_eq!(bus.vote::<&str>("stance", &unit), "guard");
//! assert_eq!(bus.sum::<f32>("armor", &unit), 0.0); // different key
//! ```

mod query;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::aggregate::Candidate;
use crate::answer::{Answerer, AnswererId, BoolAnswer, VoteAnswer};
use crate::key::{Family, QueryKey};
use crate::number::Number;
use crate::registry::Registry;

#[cfg(feature = "emitter")]
use crate::emitter::{Notifier, SubscriptionEvent, SUBSCRIBED, UNSUBSCRIBED};

/// Which way a subscriber set changed.
#[derive(Debug, Clone, Copy)]
enum Change {
    Subscribed,
    Unsubscribed,
}

/// A typed query-aggregation bus over context values of type `C`.
pub struct QueryBus<C> {
    registry: Registry<C>,
    #[cfg(feature = "emitter")]
    notifier: Option<Notifier>,
}

impl<C: 'static> Default for QueryBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> QueryBus<C> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            #[cfg(feature = "emitter")]
            notifier: None,
        }
    }

    /// Report subscriber-set changes through `emitter`.
    ///
    /// Consumes and returns the bus so it can follow `new()`.
    #[cfg(feature = "emitter")]
    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.notifier = Some(Notifier::new(emitter));
        self
    }

    // ------------------------------------------------------------------------
    // Numeric family
    // ------------------------------------------------------------------------

    /// Subscribe `answerer` to the numeric query `(name, T)`.
    ///
    /// Idempotent: returns `false` if the answerer was already subscribed.
    pub fn subscribe_number<T: Number>(&self, name: &str, answerer: &Answerer<C, T>) -> bool {
        self.subscribe(Family::Numeric, QueryKey::of::<T>(name), answerer)
    }

    /// Remove `answerer` from the numeric query `(name, T)`.
    ///
    /// Returns `false` (and does nothing) if it was not subscribed.
    pub fn unsubscribe_number<T: Number>(&self, name: &str, answerer: &Answerer<C, T>) -> bool {
        self.unsubscribe(Family::Numeric, QueryKey::of::<T>(name), answerer)
    }

    // ------------------------------------------------------------------------
    // Boolean family
    // ------------------------------------------------------------------------

    /// Subscribe `answerer` to the boolean query `name`. Idempotent.
    pub fn subscribe_bool(&self, name: &str, answerer: &Answerer<C, BoolAnswer>) -> bool {
        self.subscribe(Family::Boolean, QueryKey::of::<BoolAnswer>(name), answerer)
    }

    /// Remove `answerer` from the boolean query `name`; a no-op if absent.
    pub fn unsubscribe_bool(&self, name: &str, answerer: &Answerer<C, BoolAnswer>) -> bool {
        self.unsubscribe(Family::Boolean, QueryKey::of::<BoolAnswer>(name), answerer)
    }

    // ------------------------------------------------------------------------
    // Vote family
    // ------------------------------------------------------------------------

    /// Subscribe `answerer` to the vote query `(name, T)`.
    pub fn subscribe_vote<T: Candidate>(
        &self,
        name: &str,
        answerer: &Answerer<C, VoteAnswer<T>>,
    ) -> bool {
        self.subscribe(Family::Vote, QueryKey::of::<T>(name), answerer)
    }

    /// Remove `answerer` from the vote query `(name, T)`; a no-op if absent.
    pub fn unsubscribe_vote<T: Candidate>(
        &self,
        name: &str,
        answerer: &Answerer<C, VoteAnswer<T>>,
    ) -> bool {
        self.unsubscribe(Family::Vote, QueryKey::of::<T>(name), answerer)
    }

    fn subscribe<R: 'static>(&self, family: Family, key: QueryKey, answerer: &Answerer<C, R>) -> bool {
        let changed = self.registry.listeners(family).subscribe(&key, answerer);
        if changed {
            self.notify(Change::Subscribed, family, &key, answerer.id());
        }
        changed
    }

    fn unsubscribe<R: 'static>(
        &self,
        family: Family,
        key: QueryKey,
        answerer: &Answerer<C, R>,
    ) -> bool {
        let changed = self.registry.listeners(family).unsubscribe(&key, answerer);
        if changed {
            self.notify(Change::Unsubscribed, family, &key, answerer.id());
        }
        changed
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, change: Change, family: Family, key: &QueryKey, answerer: AnswererId) {
        if let Some(notifier) = &self.notifier {
            let event_type = match change {
                Change::Subscribed => SUBSCRIBED,
                Change::Unsubscribed => UNSUBSCRIBED,
            };
            notifier.notify(event_type, &SubscriptionEvent::new(family, key, answerer));
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _change: Change, _family: Family, _key: &QueryKey, _answerer: AnswererId) {}
}
