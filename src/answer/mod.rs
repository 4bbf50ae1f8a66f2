//! Answerers and the answer types they produce.

mod answerer;

pub use answerer::{Answerer, AnswererId};

use serde::{Deserialize, Serialize};

/// Answer to a boolean (or / and) query.
///
/// `is_applicable == false` means the answerer abstains; its `result` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoolAnswer {
    pub is_applicable: bool,
    pub result: bool,
}

impl BoolAnswer {
    pub fn new(is_applicable: bool, result: bool) -> Self {
        Self {
            is_applicable,
            result,
        }
    }

    /// An applicable answer.
    pub fn yes(result: bool) -> Self {
        Self::new(true, result)
    }

    /// No opinion.
    pub fn abstain() -> Self {
        Self::new(false, false)
    }
}

/// A weighted ballot for one candidate in a vote query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteAnswer<T> {
    pub is_applicable: bool,
    pub candidate: T,
    pub weight: i32,
}

impl<T> VoteAnswer<T> {
    pub fn new(is_applicable: bool, candidate: T, weight: i32) -> Self {
        Self {
            is_applicable,
            candidate,
            weight,
        }
    }

    /// An applicable vote for `candidate` carrying `weight`.
    pub fn cast(candidate: T, weight: i32) -> Self {
        Self::new(true, candidate, weight)
    }
}

impl<T: Default> VoteAnswer<T> {
    /// No opinion. The candidate is the type's default and is never tallied.
    pub fn abstain() -> Self {
        Self::new(false, T::default(), 0)
    }
}
