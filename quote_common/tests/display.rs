use quote_common::pointer::{Point, PointerBus, Rect};
use quote_common::{Layout, Quote, QuoteDisplay, Visibility};

fn layout() -> Layout {
    Layout {
        trigger: Rect::new(0, 0, 20, 1),
        quote_box: Rect::new(0, 2, 60, 4),
    }
}

fn quote(text: &str, author: &str) -> Quote {
    Quote::new(text, author).unwrap()
}

#[test]
fn starts_hidden_without_a_listener() {
    let bus = PointerBus::new();
    let display = QuoteDisplay::new(bus.clone(), layout());

    assert_eq!(display.visibility(), Visibility::Hidden);
    assert_eq!(display.current_text(), "");
    assert!(display.pointer_events().is_none());
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn showing_registers_one_listener_and_replacing_keeps_it() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus.clone(), layout());

    display.show(quote("A", "X")).unwrap();
    assert_eq!(display.visibility(), Visibility::Shown);
    assert_eq!(bus.listener_count(), 1);

    display.show(quote("B", "Y")).unwrap();
    assert_eq!(display.visibility(), Visibility::Shown);
    assert_eq!(display.current(), Some(&quote("B", "Y")));
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn clicks_inside_the_box_or_trigger_do_not_dismiss() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus.clone(), layout());
    display.show(quote("A", "X")).unwrap();

    for at in [Point::new(5, 0), Point::new(0, 2), Point::new(59, 5)] {
        assert!(!display.handle_pointer_down(at), "{at:?} should not dismiss");
        assert_eq!(display.visibility(), Visibility::Shown);
    }
}

#[test]
fn outside_click_hides_and_unsubscribes() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus.clone(), layout());
    display.show(quote("A", "X")).unwrap();

    assert!(display.handle_pointer_down(Point::new(30, 1)));
    assert_eq!(display.visibility(), Visibility::Hidden);
    assert_eq!(display.current(), None);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn clicks_while_hidden_are_ignored() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus, layout());
    assert!(!display.handle_pointer_down(Point::new(70, 10)));
    assert_eq!(display.visibility(), Visibility::Hidden);
}

#[test]
fn bus_dispatch_reaches_the_display_listener() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus.clone(), layout());
    display.show(quote("A", "X")).unwrap();

    assert_eq!(bus.dispatch(Point::new(10, 3)).unwrap(), 1);
    assert!(!display.drain_pointer_events());
    assert_eq!(display.visibility(), Visibility::Shown);

    assert_eq!(bus.dispatch(Point::new(70, 10)).unwrap(), 1);
    assert!(display.drain_pointer_events());
    assert_eq!(display.visibility(), Visibility::Hidden);

    assert_eq!(bus.dispatch(Point::new(70, 10)).unwrap(), 0);
    assert!(!display.drain_pointer_events());
}

#[test]
fn dropping_the_display_releases_its_listener() {
    let bus = PointerBus::new();
    {
        let mut display = QuoteDisplay::new(bus.clone(), layout());
        display.show(quote("A", "X")).unwrap();
        assert_eq!(bus.listener_count(), 1);
    }
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn a_dismissed_display_can_be_shown_again() {
    let bus = PointerBus::new();
    let mut display = QuoteDisplay::new(bus.clone(), layout());

    display.show(quote("A", "X")).unwrap();
    display.hide();
    assert_eq!(bus.listener_count(), 0);

    display.show(quote("B", "Y")).unwrap();
    assert_eq!(display.current_text(), "B");
    assert_eq!(bus.listener_count(), 1);
}
