//! Aggregation engine — reduction rules per family.
//!
//! Every function takes the answers as an iterator and pulls from it lazily,
//! so callers can map answerers straight into it and the short-circuiting
//! rules (`any`, `all`) stop invoking answerers as soon as the outcome is known.

mod boolean;
mod numeric;
mod vote;

pub use boolean::{all, any};
pub use numeric::{max, min, sum};
pub use vote::{elect, Candidate};
