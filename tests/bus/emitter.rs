//! Subscription lifecycle notifications.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use query_bus::emitter::{SUBSCRIBED, UNSUBSCRIBED};
use query_bus::{EventEmitter, Family, QueryBus, SubscriptionEvent};

use crate::support::{applicable, constant, goblin, Unit};

type Log = Arc<Mutex<Vec<(String, SubscriptionEvent)>>>;

fn recording_bus() -> (QueryBus<Unit>, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut emitter = EventEmitter::new();

    for event_type in [SUBSCRIBED, UNSUBSCRIBED] {
        let sink = Arc::clone(&log);
        emitter.on(event_type, move |payload: String| {
            let event: SubscriptionEvent = serde_json::from_str(&payload).unwrap();
            sink.lock().unwrap().push((event_type.to_string(), event));
        });
    }

    (QueryBus::new().with_emitter(emitter), log)
}

/// EventEmitter delivers on its own threads; wait for `count` entries.
fn wait_for(log: &Log, count: usize) -> Vec<(String, SubscriptionEvent)> {
    for _ in 0..200 {
        if log.lock().unwrap().len() >= count {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    log.lock().unwrap().clone()
}

#[test]
fn subscribe_and_unsubscribe_are_reported() {
    let (bus, log) = recording_bus();
    let armor = constant(3);

    bus.subscribe_number("armor", &armor);
    let events = wait_for(&log, 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, SUBSCRIBED);
    assert_eq!(events[0].1.family, Family::Numeric);
    assert_eq!(events[0].1.query, "armor");
    assert_eq!(events[0].1.result_type, "i32");
    assert_eq!(events[0].1.answerer, armor.id());

    bus.unsubscribe_number("armor", &armor);
    let events = wait_for(&log, 2);
    assert_eq!(events.len(), 2);
    assert!(events.iter().any(|(kind, event)| kind == UNSUBSCRIBED
        && event.answerer == armor.id()));
}

#[test]
fn noop_changes_and_queries_are_silent() {
    let (bus, log) = recording_bus();
    let hostile = applicable(true);

    bus.subscribe_bool("hostile", &hostile);
    bus.subscribe_bool("hostile", &hostile);
    bus.unsubscribe_bool("friendly", &hostile);
    assert!(bus.or("hostile", &goblin()));

    let events = wait_for(&log, 1);
    // Give any stray deliveries a chance to land.
    thread::sleep(Duration::from_millis(50));
    assert_eq!(events.len(), 1);
    assert_eq!(log.lock().unwrap().len(), 1);
    assert_eq!(events[0].1.family, Family::Boolean);
}

#[test]
fn bus_without_emitter_still_works() {
    let bus: QueryBus<Unit> = QueryBus::new();
    bus.subscribe_number("armor", &constant(2));
    assert_eq!(bus.sum_int("armor", &goblin()), 2);
}
