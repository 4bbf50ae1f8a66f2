//! One bus shared across threads, and answerers that touch the bus.

use std::sync::{Arc, Mutex};
use std::thread;

use query_bus::{Answerer, QueryBus};

use crate::support::{constant, goblin, Unit};

#[test]
fn concurrent_subscribe_and_query() {
    let bus: Arc<QueryBus<Unit>> = Arc::new(QueryBus::new());

    let handles: Vec<_> = (1..=8)
        .map(|value| {
            let bus = Arc::clone(&bus);
            thread::spawn(move || {
                let answerer = constant(value);
                bus.subscribe_number("armor", &answerer);
                // Reads may interleave with other threads' subscriptions.
                let seen = bus.sum_int("armor", &goblin());
                assert!(seen >= value);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bus.sum_int("armor", &goblin()), (1..=8).sum::<i32>());
}

#[test]
fn answerer_can_subscribe_during_a_query() {
    let bus: Arc<QueryBus<Unit>> = Arc::new(QueryBus::new());
    let late = constant(100);

    let recruiter = {
        let bus = Arc::clone(&bus);
        let late = late.clone();
        Answerer::new(move |_: &Unit| {
            bus.subscribe_number("armor", &late);
            1
        })
    };
    bus.subscribe_number("armor", &recruiter);

    // The query polls the answerers present when it started.
    assert_eq!(bus.sum_int("armor", &goblin()), 1);
    assert_eq!(bus.sum_int("armor", &goblin()), 101);

    bus.unsubscribe_number("armor", &recruiter);
    bus.unsubscribe_number("armor", &late);
}

#[test]
fn answerer_can_unsubscribe_itself() {
    let bus: Arc<QueryBus<Unit>> = Arc::new(QueryBus::new());
    let slot: Arc<Mutex<Option<Answerer<Unit, i32>>>> = Arc::new(Mutex::new(None));

    let once = {
        let bus = Arc::clone(&bus);
        let slot = Arc::clone(&slot);
        Answerer::new(move |_: &Unit| {
            if let Some(me) = slot.lock().unwrap().take() {
                bus.unsubscribe_number("bonus", &me);
            }
            5
        })
    };
    *slot.lock().unwrap() = Some(once.clone());
    bus.subscribe_number("bonus", &once);

    assert_eq!(bus.sum_int("bonus", &goblin()), 5);
    assert_eq!(bus.sum_int("bonus", &goblin()), 0);
}
