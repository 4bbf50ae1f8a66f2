use crate::answer::{Answerer, AnswererId};

/// The answerers subscribed under one query key.
///
/// Set semantics keyed by `AnswererId`, kept in subscription order.
pub(crate) struct SubscriberSet<C, R> {
    answerers: Vec<Answerer<C, R>>,
}

impl<C, R> SubscriberSet<C, R> {
    pub(crate) fn new() -> Self {
        Self {
            answerers: Vec::new(),
        }
    }

    /// Returns `false` if the answerer was already present.
    pub(crate) fn insert(&mut self, answerer: &Answerer<C, R>) -> bool {
        if self.contains(answerer.id()) {
            return false;
        }
        self.answerers.push(answerer.clone());
        true
    }

    /// Returns `false` if no answerer with `id` was present.
    pub(crate) fn remove(&mut self, id: AnswererId) -> bool {
        let before = self.answerers.len();
        self.answerers.retain(|answerer| answerer.id() != id);
        self.answerers.len() != before
    }

    pub(crate) fn contains(&self, id: AnswererId) -> bool {
        self.answerers.iter().any(|answerer| answerer.id() == id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.answerers.is_empty()
    }

    /// Clone the current answerers so they can be polled without holding a lock.
    pub(crate) fn snapshot(&self) -> Vec<Answerer<C, R>> {
        self.answerers.clone()
    }
}
