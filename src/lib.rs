//! query_bus — ask many answerers one question, get one answer back.
//!
//! A publish/subscribe bus turned around: instead of notifying listeners of an
//! event, the caller broadcasts a named query with a context value, every
//! answerer subscribed under that query is polled synchronously, and their
//! answers are reduced to a single result.
//!
//! | Family  | Answer type      | Queries                 | Nobody subscribed |
//! |---------|------------------|-------------------------|-------------------|
//! | numeric | `T: Number`      | `sum`, `min`, `max`     | `T::ZERO`         |
//! | boolean | `BoolAnswer`     | `or`, `and`             | `false`           |
//! | vote    | `VoteAnswer<T>`  | `vote`                  | `T::default()`    |
//!
//! Queries are keyed by name *and* result type, so `sum::<i32>("score")` and
//! `sum::<f32>("score")` are unrelated.
//!
//! ## Quick Start
//!
//! ```
//! use query_bus::{Answerer, BoolAnswer, QueryBus};
//!
//! let bus: QueryBus<String> = QueryBus::new();
//!
//! let a = Answerer::new(|_: &String| 3);
//! let b = Answerer::new(|_: &String| 4);
//! bus.subscribe_number("damage", &a);
//! bus.subscribe_number("damage", &b);
//! assert_eq!(bus.sum::<i32>("damage", &"goblin".to_string()), 7);
//!
//! bus.unsubscribe_number("damage", &a);
//! assert_eq!(bus.sum::<i32>("damage", &"goblin".to_string()), 4);
//!
//! let shy = Answerer::new(|_: &String| BoolAnswer::abstain());
//! bus.subscribe_bool("hostile", &shy);
//! assert!(!bus.and("hostile", &"goblin".to_string()));
//! ```
//!
//! ## Features
//!
//! - `emitter` (default): subscription lifecycle notifications via
//!   `event_emitter_rs`, see the `emitter` module.

pub mod aggregate;
mod answer;
mod bus;
mod error;
pub mod ext;
mod key;
mod number;
mod registry;

#[cfg(feature = "emitter")]
pub mod emitter;

pub use aggregate::Candidate;
pub use answer::{Answerer, AnswererId, BoolAnswer, VoteAnswer};
pub use bus::QueryBus;
pub use error::QueryError;
pub use key::{Family, QueryKey};
pub use number::Number;

#[cfg(feature = "emitter")]
pub use emitter::SubscriptionEvent;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
