//! Call-site sugar: let a context value ask the bus about itself.
//!
//! ```
//! use query_bus::ext::Ask;
//! use query_bus::{Answerer, QueryBus};
//!
//! #[derive(Debug)]
//! struct Door {
//!     locked: bool,
//! }
//!
//! let bus: QueryBus<Door> = QueryBus::new();
//! let weight = Answerer::new(|door: &Door| if door.locked { 40 } else { 10 });
//! bus.subscribe_number("push_force", &weight);
//!
//! let door = Door { locked: true };
//! assert_eq!(door.query_sum::<i32>(&bus, "push_force"), 40);
//! ```

use crate::aggregate::Candidate;
use crate::bus::QueryBus;
use crate::number::Number;

/// Forwarding helpers with `self` as the query context.
pub trait Ask: Sized + 'static {
    fn query_sum<T: Number>(&self, bus: &QueryBus<Self>, name: &str) -> T {
        bus.sum(name, self)
    }

    fn query_min<T: Number>(&self, bus: &QueryBus<Self>, name: &str) -> T {
        bus.min(name, self)
    }

    fn query_max<T: Number>(&self, bus: &QueryBus<Self>, name: &str) -> T {
        bus.max(name, self)
    }

    fn query_or(&self, bus: &QueryBus<Self>, name: &str) -> bool {
        bus.or(name, self)
    }

    fn query_and(&self, bus: &QueryBus<Self>, name: &str) -> bool {
        bus.and(name, self)
    }

    fn query_vote<T: Candidate>(&self, bus: &QueryBus<Self>, name: &str) -> T {
        bus.vote(name, self)
    }
}

impl<C: 'static> Ask for C {}
