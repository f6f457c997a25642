//! Tests for key_bus

use super::*;
use crate::test_utils::test_helpers::key;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counting_listener(counter: &Rc<Cell<u32>>) -> KeyListener {
    let counter = Rc::clone(counter);
    Rc::new(move |_key: &KeyEvent| counter.set(counter.get() + 1))
}

#[test]
fn test_subscribe_registers_listener() {
    let bus = KeyBus::new();
    let count = Rc::new(Cell::new(0));

    let subscription = bus.subscribe(counting_listener(&count));
    assert_eq!(bus.listener_count(), 1);
    assert!(subscription.is_active());

    bus.dispatch(&key(KeyCode::Esc));
    assert_eq!(count.get(), 1);
}

#[test]
fn test_drop_deregisters_listener() {
    let bus = KeyBus::new();
    let count = Rc::new(Cell::new(0));

    let subscription = bus.subscribe(counting_listener(&count));
    drop(subscription);

    assert_eq!(bus.listener_count(), 0);
    bus.dispatch(&key(KeyCode::Esc));
    assert_eq!(count.get(), 0);
}

#[test]
fn test_dispatch_in_registration_order() {
    let bus = KeyBus::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let order = Rc::clone(&order);
        bus.subscribe(Rc::new(move |_: &KeyEvent| order.borrow_mut().push("first")))
    };
    let second = {
        let order = Rc::clone(&order);
        bus.subscribe(Rc::new(move |_: &KeyEvent| order.borrow_mut().push("second")))
    };

    bus.dispatch(&key(KeyCode::Char('x')));
    assert_eq!(*order.borrow(), vec!["first", "second"]);

    drop(first);
    drop(second);
}

#[test]
fn test_clone_shares_registry() {
    let bus = KeyBus::new();
    let handle = bus.clone();
    let count = Rc::new(Cell::new(0));

    let _subscription = handle.subscribe(counting_listener(&count));
    bus.dispatch(&key(KeyCode::Enter));

    assert_eq!(bus.listener_count(), 1);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_listener_dropped_during_dispatch_is_skipped() {
    let bus = KeyBus::new();
    let count = Rc::new(Cell::new(0));
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let _killer = {
        let victim = Rc::clone(&victim);
        bus.subscribe(Rc::new(move |_: &KeyEvent| {
            victim.borrow_mut().take();
        }))
    };
    *victim.borrow_mut() = Some(bus.subscribe(counting_listener(&count)));

    bus.dispatch(&key(KeyCode::Esc));

    assert_eq!(count.get(), 0);
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_key() {
    let bus = KeyBus::new();
    let count = Rc::new(Cell::new(0));
    let added: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

    let _adder = {
        let bus_handle = bus.clone();
        let added = Rc::clone(&added);
        let count = Rc::clone(&count);
        bus.subscribe(Rc::new(move |_: &KeyEvent| {
            if added.borrow().is_empty() {
                let subscription = bus_handle.subscribe(counting_listener(&count));
                added.borrow_mut().push(subscription);
            }
        }))
    };

    bus.dispatch(&key(KeyCode::Esc));
    assert_eq!(count.get(), 0);

    bus.dispatch(&key(KeyCode::Esc));
    assert_eq!(count.get(), 1);
}

#[test]
fn test_subscription_outliving_bus_is_inactive() {
    let count = Rc::new(Cell::new(0));
    let subscription = {
        let bus = KeyBus::new();
        bus.subscribe(counting_listener(&count))
    };

    assert!(!subscription.is_active());
    drop(subscription);
}

#[test]
fn test_is_key_pressed_matches_code() {
    assert!(is_key_pressed(&key(KeyCode::Esc), KeyCode::Esc));
    assert!(!is_key_pressed(&key(KeyCode::Enter), KeyCode::Esc));
}

#[test]
fn test_is_key_pressed_ignores_release() {
    let release = KeyEvent {
        code: KeyCode::Esc,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::empty(),
    };
    assert!(!is_key_pressed(&release, KeyCode::Esc));
}
