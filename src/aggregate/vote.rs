use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::answer::VoteAnswer;

/// Values that can stand as vote candidates. `Default` is the result when
/// nobody wins.
pub trait Candidate: Clone + Eq + Hash + Default + Debug + Send + Sync + 'static {}

impl<T> Candidate for T where T: Clone + Eq + Hash + Default + Debug + Send + Sync + 'static {}

/// Cumulative weight per candidate, in first-seen order.
struct Tally<T> {
    index: HashMap<T, usize>,
    weights: Vec<(T, i64)>,
}

impl<T: Candidate> Tally<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            weights: Vec::new(),
        }
    }

    fn add(&mut self, candidate: T, weight: i32) {
        match self.index.get(&candidate) {
            Some(&slot) => self.weights[slot].1 += i64::from(weight),
            None => {
                self.index.insert(candidate.clone(), self.weights.len());
                self.weights.push((candidate, i64::from(weight)));
            }
        }
    }

    /// The candidate with strictly the greatest cumulative weight above zero.
    /// Ties keep the earlier-seen candidate.
    fn winner(self) -> T {
        let mut best = T::default();
        let mut highest = 0i64;
        for (candidate, weight) in self.weights {
            if weight > highest {
                best = candidate;
                highest = weight;
            }
        }
        best
    }
}

/// Weighted vote over applicable ballots.
///
/// Returns `T::default()` when every answerer abstains or no candidate's
/// cumulative weight exceeds zero.
pub fn elect<T: Candidate>(answers: impl IntoIterator<Item = VoteAnswer<T>>) -> T {
    let mut tally = Tally::new();
    for vote in answers {
        if vote.is_applicable {
            tally.add(vote.candidate, vote.weight);
        }
    }
    tally.winner()
}
