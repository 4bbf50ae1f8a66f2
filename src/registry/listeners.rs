use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::subscribers::SubscriberSet;
use crate::answer::Answerer;
use crate::key::{Family, QueryKey};

/// A type-erased `SubscriberSet<C, R>`. The key's result type decides `R`.
type ErasedSet = Box<dyn Any + Send + Sync>;

fn erased<C: 'static, R: 'static>() -> ErasedSet {
    Box::new(SubscriberSet::<C, R>::new())
}

/// One family's keyed subscriber collection.
///
/// Answerers are never invoked while the lock is held: readers take a
/// snapshot and poll it after the guard is dropped.
pub(crate) struct Listeners<C> {
    family: Family,
    sets: RwLock<HashMap<QueryKey, ErasedSet>>,
    _context: PhantomData<fn(&C)>,
}

impl<C: 'static> Listeners<C> {
    pub(crate) fn new(family: Family) -> Self {
        Self {
            family,
            sets: RwLock::new(HashMap::new()),
            _context: PhantomData,
        }
    }

    /// Add `answerer` under `key`. Returns `true` if the set changed.
    pub(crate) fn subscribe<R: 'static>(&self, key: &QueryKey, answerer: &Answerer<C, R>) -> bool {
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);
        let set = sets.entry(key.clone()).or_insert_with(erased::<C, R>);

        let inserted = match (**set).downcast_mut::<SubscriberSet<C, R>>() {
            Some(set) => set.insert(answerer),
            None => false,
        };

        if inserted {
            debug!(
                family = %self.family,
                query = key.name(),
                result_type = key.result_type_name(),
                answerer = %answerer.id(),
                "subscribed"
            );
        }
        inserted
    }

    /// Remove `answerer` from `key`. Returns `true` if the set changed.
    ///
    /// A key whose last answerer leaves is dropped from the collection.
    pub(crate) fn unsubscribe<R: 'static>(&self, key: &QueryKey, answerer: &Answerer<C, R>) -> bool {
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);

        let (removed, now_empty) = match sets
            .get_mut(key)
            .and_then(|set| (**set).downcast_mut::<SubscriberSet<C, R>>())
        {
            Some(set) => (set.remove(answerer.id()), set.is_empty()),
            None => return false,
        };

        if now_empty {
            sets.remove(key);
        }

        if removed {
            debug!(
                family = %self.family,
                query = key.name(),
                result_type = key.result_type_name(),
                answerer = %answerer.id(),
                "unsubscribed"
            );
        }
        removed
    }

    /// The answerers currently subscribed under `key`, or `None` if there are none.
    pub(crate) fn snapshot<R: 'static>(&self, key: &QueryKey) -> Option<Vec<Answerer<C, R>>> {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        sets.get(key)
            .and_then(|set| (**set).downcast_ref::<SubscriberSet<C, R>>())
            .filter(|set| !set.is_empty())
            .map(SubscriberSet::snapshot)
    }
}
