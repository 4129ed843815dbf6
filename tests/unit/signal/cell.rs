use super::*;
use std::cell::Cell;

#[test]
fn set_to_equal_value_notifies_nobody() {
    let cell = ValueCell::new(3);
    let hits = Rc::new(Cell::new(0u32));
    let hits_in = Rc::clone(&hits);
    let _sub = cell.subscribe(move |_| hits_in.set(hits_in.get() + 1));

    cell.set(3);
    assert_eq!(hits.get(), 0);
    cell.set(4);
    assert_eq!(hits.get(), 1);
    assert_eq!(cell.get(), 4);
}

#[test]
fn two_subscribers_both_observe_a_change() {
    let cell = ValueCell::new(0);
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let a_in = Rc::clone(&a);
    let b_in = Rc::clone(&b);
    let _sub_a = cell.subscribe(move |v| a_in.set(*v));
    let _sub_b = cell.subscribe(move |v| b_in.set(*v));

    cell.set(7);
    assert_eq!(a.get(), 7);
    assert_eq!(b.get(), 7);
}

#[test]
fn dropping_a_subscription_stops_delivery() {
    let cell = ValueCell::new(0);
    let hits = Rc::new(Cell::new(0u32));
    let hits_in = Rc::clone(&hits);
    let sub = cell.subscribe(move |_| hits_in.set(hits_in.get() + 1));

    cell.set(1);
    assert_eq!(hits.get(), 1);
    assert_eq!(cell.subscriber_count(), 1);

    drop(sub);
    assert_eq!(cell.subscriber_count(), 0);
    cell.set(2);
    assert_eq!(hits.get(), 1);
}

#[test]
fn clones_share_storage() {
    let cell = ValueCell::new(String::from("a"));
    let other = cell.clone();
    other.set(String::from("b"));
    assert_eq!(cell.get(), "b");
}

#[test]
fn subscription_outliving_the_cell_drops_cleanly() {
    let cell = ValueCell::new(1);
    let sub = cell.subscribe(|_| {});
    drop(cell);
    drop(sub); // must not panic on the dangling weak
}
