//! Registry — the three keyed subscriber collections.
//!
//! ```text
//! Registry<C>
//!   numbers: QueryKey(name, T)             -> [Answerer<C, T>]
//!   bools:   QueryKey(name, BoolAnswer)    -> [Answerer<C, BoolAnswer>]
//!   votes:   QueryKey(name, T)             -> [Answerer<C, VoteAnswer<T>>]
//! ```
//!
//! Subscribe and unsubscribe are the only mutators. Aggregation reads a
//! snapshot of one key's answerers and never touches the collections.

mod listeners;
mod subscribers;

pub(crate) use listeners::Listeners;

use crate::key::Family;

pub(crate) struct Registry<C> {
    numbers: Listeners<C>,
    bools: Listeners<C>,
    votes: Listeners<C>,
}

impl<C: 'static> Registry<C> {
    pub(crate) fn new() -> Self {
        Self {
            numbers: Listeners::new(Family::Numeric),
            bools: Listeners::new(Family::Boolean),
            votes: Listeners::new(Family::Vote),
        }
    }

    pub(crate) fn listeners(&self, family: Family) -> &Listeners<C> {
        match family {
            Family::Numeric => &self.numbers,
            Family::Boolean => &self.bools,
            Family::Vote => &self.votes,
        }
    }
}
