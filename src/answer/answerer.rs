//! Answerer handles.
//!
//! Rust closures have no identity of their own, so every `Answerer` is tagged
//! with an `AnswererId` when it is created. Clones share the id; two answerers
//! built from identical closures do not.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

static NEXT_ANSWERER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an answerer, used for subscribe deduplication and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnswererId(u64);

impl AnswererId {
    fn next() -> Self {
        AnswererId(NEXT_ANSWERER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnswererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "answerer-{}", self.0)
    }
}

/// A callable that answers a query about a context `C` with an `R`.
///
/// The handle is cheap to clone and is what you pass to both `subscribe_*`
/// and `unsubscribe_*`.
///
/// ```
/// use query_bus::{Answerer, QueryBus};
///
/// let bus: QueryBus<u32> = QueryBus::new();
/// let doubled = Answerer::new(|level: &u32| (*level * 2) as i32);
///
/// bus.subscribe_number("power", &doubled);
/// bus.subscribe_number("power", &doubled); // no-op
/// assert_eq!(bus.sum::<i32>("power", &5), 10);
///
/// bus.unsubscribe_number("power", &doubled);
/// assert_eq!(bus.sum::<i32>("power", &5), 0);
/// ```
pub struct Answerer<C, R> {
    id: AnswererId,
    answer: Arc<dyn Fn(&C) -> R + Send + Sync>,
}

impl<C, R> Answerer<C, R> {
    /// Wrap `f` with a fresh identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&C) -> R + Send + Sync + 'static,
    {
        Self {
            id: AnswererId::next(),
            answer: Arc::new(f),
        }
    }

    pub fn id(&self) -> AnswererId {
        self.id
    }

    /// Invoke the answerer for `context`.
    pub fn answer(&self, context: &C) -> R {
        (self.answer)(context)
    }
}

impl<C, R> Clone for Answerer<C, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            answer: Arc::clone(&self.answer),
        }
    }
}

impl<C, R> PartialEq for Answerer<C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C, R> Eq for Answerer<C, R> {}

impl<C, R> fmt::Debug for Answerer<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Answerer").field("id", &self.id).finish()
    }
}
