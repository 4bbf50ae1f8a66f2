//! The `Ask` extension trait.

use query_bus::ext::Ask;
use query_bus::{Answerer, BoolAnswer, QueryBus, VoteAnswer};

use crate::support::{constant, Unit};

#[test]
fn context_asks_about_itself() {
    let bus: QueryBus<Unit> = QueryBus::new();
    bus.subscribe_number("hp", &Answerer::new(|unit: &Unit| unit.level * 10));
    bus.subscribe_number("hp", &constant(5));
    bus.subscribe_bool(
        "can_act",
        &Answerer::new(|unit: &Unit| BoolAnswer::new(unit.poisoned, false)),
    );
    bus.subscribe_vote(
        "title",
        &Answerer::new(|unit: &Unit| VoteAnswer::cast(unit.name.clone(), 1)),
    );

    let mut orc = Unit::new("orc", 4);
    assert_eq!(orc.query_sum::<i32>(&bus, "hp"), 45);
    assert_eq!(orc.query_min::<i32>(&bus, "hp"), 5);
    assert_eq!(orc.query_max::<i32>(&bus, "hp"), 40);
    assert!(!orc.query_or(&bus, "can_act"));
    assert!(!orc.query_and(&bus, "can_act"));
    assert_eq!(orc.query_vote::<String>(&bus, "title"), "orc");

    orc.poisoned = true;
    assert!(!orc.query_and(&bus, "can_act"));
    assert!(!orc.query_or(&bus, "can_act"));
}

#[test]
fn works_for_plain_values() {
    let bus: QueryBus<u32> = QueryBus::new();
    bus.subscribe_number("double", &Answerer::new(|n: &u32| u64::from(*n) * 2));

    assert_eq!(21u32.query_sum::<u64>(&bus, "double"), 42);
}
