//! Queries nobody answers fall back to the family default.

use query_bus::{QueryBus, QueryError};

use crate::support::{goblin, Unit};

#[test]
fn numeric_queries_default_to_zero() {
    let bus: QueryBus<Unit> = QueryBus::new();
    let unit = goblin();

    assert_eq!(bus.sum_int("armor", &unit), 0);
    assert_eq!(bus.min_int("armor", &unit), 0);
    assert_eq!(bus.max_int("armor", &unit), 0);
    assert_eq!(bus.sum_float("armor", &unit), 0.0);
    assert_eq!(bus.min_float("armor", &unit), 0.0);
    assert_eq!(bus.max_float("armor", &unit), 0.0);
    assert_eq!(bus.sum::<u64>("armor", &unit), 0);
    assert_eq!(bus.max::<f64>("armor", &unit), 0.0);
}

#[test]
fn boolean_queries_default_to_false() {
    let bus: QueryBus<Unit> = QueryBus::new();
    let unit = goblin();

    assert!(!bus.or("can_fly", &unit));
    assert!(!bus.and("can_fly", &unit));
}

#[test]
fn vote_defaults_to_zero_value() {
    let bus: QueryBus<Unit> = QueryBus::new();
    let unit = goblin();

    assert_eq!(bus.vote::<String>("stance", &unit), String::new());
    assert_eq!(bus.vote::<i32>("stance", &unit), 0);
    assert_eq!(bus.vote::<Option<char>>("stance", &unit), None);
}

#[test]
fn emptied_key_behaves_like_unknown_key() {
    let bus: QueryBus<Unit> = QueryBus::new();
    let unit = goblin();
    let armor = crate::support::constant(7);

    bus.subscribe_number("armor", &armor);
    bus.unsubscribe_number("armor", &armor);

    assert_eq!(bus.sum_int("armor", &unit), 0);
    assert!(matches!(
        bus.try_sum::<i32>("armor", &unit),
        Err(QueryError::NoAnswerer { .. })
    ));
}
