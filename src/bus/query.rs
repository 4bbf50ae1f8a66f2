//! Query operations.
//!
//! Every query snapshots the answerers for its key, releases the registry
//! lock, then polls them on the calling thread. An answerer that panics
//! aborts the query; nothing is caught.

use tracing::trace;

use super::QueryBus;
use crate::aggregate::{self, Candidate};
use crate::answer::{Answerer, BoolAnswer, VoteAnswer};
use crate::error::QueryError;
use crate::key::{Family, QueryKey};
use crate::number::Number;

impl<C: 'static> QueryBus<C> {
    /// Sum of every answer to `(name, T)`. `T::ZERO` if nobody is subscribed.
    pub fn sum<T: Number>(&self, name: &str, context: &C) -> T {
        self.try_sum(name, context).unwrap_or(T::ZERO)
    }

    /// Smallest answer to `(name, T)`. `T::ZERO` if nobody is subscribed.
    pub fn min<T: Number>(&self, name: &str, context: &C) -> T {
        self.try_min(name, context).unwrap_or(T::ZERO)
    }

    /// Largest answer to `(name, T)`. `T::ZERO` if nobody is subscribed.
    pub fn max<T: Number>(&self, name: &str, context: &C) -> T {
        self.try_max(name, context).unwrap_or(T::ZERO)
    }

    /// `true` if any answerer applicably answers `true`. `false` if nobody is subscribed.
    pub fn or(&self, name: &str, context: &C) -> bool {
        self.try_or(name, context).unwrap_or(false)
    }

    /// `true` if at least one answerer applies and none applicably answers `false`.
    /// `false` if nobody is subscribed.
    pub fn and(&self, name: &str, context: &C) -> bool {
        self.try_and(name, context).unwrap_or(false)
    }

    /// Winning candidate of the weighted vote `(name, T)`. `T::default()` if
    /// nobody is subscribed, everyone abstains, or no candidate gets above zero.
    pub fn vote<T: Candidate>(&self, name: &str, context: &C) -> T {
        self.try_vote(name, context).unwrap_or_default()
    }

    /// `sum::<i32>`.
    pub fn sum_int(&self, name: &str, context: &C) -> i32 {
        self.sum(name, context)
    }

    /// `min::<i32>`.
    pub fn min_int(&self, name: &str, context: &C) -> i32 {
        self.min(name, context)
    }

    /// `max::<i32>`.
    pub fn max_int(&self, name: &str, context: &C) -> i32 {
        self.max(name, context)
    }

    /// `sum::<f32>`.
    pub fn sum_float(&self, name: &str, context: &C) -> f32 {
        self.sum(name, context)
    }

    /// `min::<f32>`.
    pub fn min_float(&self, name: &str, context: &C) -> f32 {
        self.min(name, context)
    }

    /// `max::<f32>`.
    pub fn max_float(&self, name: &str, context: &C) -> f32 {
        self.max(name, context)
    }

    // ------------------------------------------------------------------------
    // Explicit variants: distinguish "nobody subscribed" from a default answer.
    // ------------------------------------------------------------------------

    /// Like `sum`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_sum<T: Number>(&self, name: &str, context: &C) -> Result<T, QueryError> {
        let answerers = self.answerers::<T>(Family::Numeric, QueryKey::of::<T>(name))?;
        Ok(aggregate::sum(answerers.iter().map(|a| a.answer(context))))
    }

    /// Like `min`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_min<T: Number>(&self, name: &str, context: &C) -> Result<T, QueryError> {
        let answerers = self.answerers::<T>(Family::Numeric, QueryKey::of::<T>(name))?;
        Ok(aggregate::min(answerers.iter().map(|a| a.answer(context))))
    }

    /// Like `max`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_max<T: Number>(&self, name: &str, context: &C) -> Result<T, QueryError> {
        let answerers = self.answerers::<T>(Family::Numeric, QueryKey::of::<T>(name))?;
        Ok(aggregate::max(answerers.iter().map(|a| a.answer(context))))
    }

    /// Like `or`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_or(&self, name: &str, context: &C) -> Result<bool, QueryError> {
        let answerers =
            self.answerers::<BoolAnswer>(Family::Boolean, QueryKey::of::<BoolAnswer>(name))?;
        Ok(aggregate::any(answerers.iter().map(|a| a.answer(context))))
    }

    /// Like `and`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_and(&self, name: &str, context: &C) -> Result<bool, QueryError> {
        let answerers =
            self.answerers::<BoolAnswer>(Family::Boolean, QueryKey::of::<BoolAnswer>(name))?;
        Ok(aggregate::all(answerers.iter().map(|a| a.answer(context))))
    }

    /// Like `vote`, but `Err(QueryError::NoAnswerer)` if nobody is subscribed.
    pub fn try_vote<T: Candidate>(&self, name: &str, context: &C) -> Result<T, QueryError> {
        let answerers = self.answerers::<VoteAnswer<T>>(Family::Vote, QueryKey::of::<T>(name))?;
        Ok(aggregate::elect(answerers.iter().map(|a| a.answer(context))))
    }

    /// Snapshot of the answerers to poll for `key`.
    fn answerers<R: 'static>(
        &self,
        family: Family,
        key: QueryKey,
    ) -> Result<Vec<Answerer<C, R>>, QueryError> {
        let answerers = self.registry.listeners(family).snapshot::<R>(&key);
        trace!(
            family = %family,
            query = key.name(),
            result_type = key.result_type_name(),
            answerers = answerers.as_ref().map_or(0, Vec::len),
            "polling"
        );
        answerers.ok_or(QueryError::NoAnswerer { family, key })
    }
}
