// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for mounted basic drag buttons.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use understory_drag_button::{
    BasicButton, BasicConfig, ConfigError, GestureEvent, ListenerSet, PointerSource,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Start(Vec2),
    Drag(Point),
    End,
}

type Log = Rc<RefCell<Vec<Call>>>;

fn mount(config: BasicConfig, host: &mut ListenerSet) -> (BasicButton<&mut ListenerSet>, Log) {
    let log = Log::default();
    let (starts, drags, ends) = (log.clone(), log.clone(), log.clone());
    let button = BasicButton::new(config, host)
        .unwrap()
        .with_on_drag_start(move |_, offset| starts.borrow_mut().push(Call::Start(offset)))
        .with_on_drag(move |_, position| drags.borrow_mut().push(Call::Drag(position)))
        .with_on_drag_end(move |_| ends.borrow_mut().push(Call::End));
    (button, log)
}

#[test]
fn press_reports_offset_within_the_element() {
    let mut host = ListenerSet::new();
    let (mut button, log) = mount(BasicConfig::new("Drag me"), &mut host);

    button.handle(&GestureEvent::mouse_down(
        Point::new(10.0, 10.0),
        Rect::new(0.0, 0.0, 100.0, 40.0),
    ));

    assert_eq!(*log.borrow(), [Call::Start(Vec2::new(10.0, 10.0))]);
    assert!(button.is_dragging());
}

#[test]
fn full_session_fires_start_drag_end_in_order() {
    let mut host = ListenerSet::new();
    let (mut button, log) = mount(BasicConfig::new("Drag me"), &mut host);
    let target = Rect::new(50.0, 20.0, 150.0, 60.0);

    button.handle(&GestureEvent::mouse_down(Point::new(60.0, 30.0), target));
    button.handle(&GestureEvent::mouse_move(Point::new(70.0, 45.0)));
    button.handle(&GestureEvent::mouse_move(Point::new(0.0, 0.0)));
    button.handle(&GestureEvent::mouse_up(Point::new(0.0, 0.0)));
    button.handle(&GestureEvent::mouse_up(Point::new(0.0, 0.0)));
    button.handle(&GestureEvent::mouse_move(Point::new(5.0, 5.0)));
    drop(button);

    assert_eq!(
        *log.borrow(),
        [
            Call::Start(Vec2::new(10.0, 10.0)),
            Call::Drag(Point::new(60.0, 35.0)),
            Call::Drag(Point::new(-10.0, -10.0)),
            Call::End,
        ]
    );
    assert_eq!(host.registrations(), 1);
    assert_eq!(host.releases(), 1);
    assert!(host.is_idle());
}

#[test]
fn disabled_button_ignores_press() {
    let mut host = ListenerSet::new();
    let (mut button, log) = mount(BasicConfig::new("Disabled").with_disabled(true), &mut host);

    button.handle(&GestureEvent::mouse_down(
        Point::new(10.0, 10.0),
        Rect::new(0.0, 0.0, 100.0, 40.0),
    ));

    assert!(log.borrow().is_empty());
    assert!(!button.is_dragging());
    assert!(button.style().disabled);
    assert!(button.host().is_idle());
}

#[test]
fn leave_while_dragging_behaves_like_release() {
    let target = Rect::new(0.0, 0.0, 100.0, 40.0);
    let run = |end: GestureEvent| {
        let mut host = ListenerSet::new();
        let (mut button, log) = mount(BasicConfig::new("Drag me"), &mut host);
        button.handle(&GestureEvent::mouse_down(Point::new(10.0, 10.0), target));
        button.handle(&GestureEvent::mouse_move(Point::new(120.0, 10.0)));
        button.handle(&end);
        let style = button.style();
        drop(button);
        let calls = log.borrow().clone();
        (calls, style, host)
    };

    let released = run(GestureEvent::mouse_up(Point::new(120.0, 10.0)));
    let left = run(GestureEvent::Leave {
        position: Point::new(120.0, 10.0),
    });
    assert_eq!(released, left);
    assert_eq!(released.0.last(), Some(&Call::End));
}

#[test]
fn callbacks_receive_the_triggering_event() {
    let mut host = ListenerSet::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (on_start, on_end) = (seen.clone(), seen.clone());
    let mut button = BasicButton::new(BasicConfig::new("Drag me"), &mut host)
        .unwrap()
        .with_on_drag_start(move |event, _| on_start.borrow_mut().push(event.source()))
        .with_on_drag_end(move |event| on_end.borrow_mut().push(event.source()));

    button.handle(&GestureEvent::touch_start(
        Point::new(1.0, 1.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    ));
    button.handle(&GestureEvent::Cancel {
        source: PointerSource::Touch,
    });

    assert_eq!(
        *seen.borrow(),
        [Some(PointerSource::Touch), Some(PointerSource::Touch)]
    );
}

#[test]
fn dropping_mid_drag_releases_listeners() {
    let mut host = ListenerSet::new();
    let (mut button, log) = mount(BasicConfig::new("Drag me"), &mut host);
    button.handle(&GestureEvent::mouse_down(
        Point::new(1.0, 1.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    ));
    drop(button);

    assert!(host.is_idle());
    assert_eq!(*log.borrow(), [Call::Start(Vec2::new(1.0, 1.0))]);
}

#[test]
fn unmount_is_silent_and_idempotent() {
    let mut host = ListenerSet::new();
    let (mut button, log) = mount(BasicConfig::new("Drag me"), &mut host);
    button.handle(&GestureEvent::touch_start(
        Point::new(1.0, 1.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    ));
    button.unmount();
    button.unmount();
    assert!(!button.is_dragging());
    assert!(!button.handle(&GestureEvent::touch_end(Point::new(1.0, 1.0))));
    drop(button);

    assert_eq!(*log.borrow(), [Call::Start(Vec2::new(1.0, 1.0))]);
    assert_eq!(host.releases(), 1);
    assert!(host.is_idle());
}

#[test]
fn missing_content_is_a_construction_error() {
    let err = BasicButton::new(BasicConfig::default(), ListenerSet::new()).unwrap_err();
    assert_eq!(err, ConfigError::MissingContent);
    assert_eq!(err.to_string(), "drag button requires non-empty content");
}

#[test]
fn style_reflects_custom_class_and_drag_state() {
    let mut host = ListenerSet::new();
    let config = BasicConfig::new("Custom Styled Button")
        .with_class_name("custom-button")
        .with_style("margin-bottom", "20px");
    let (mut button, _log) = mount(config, &mut host);

    assert_eq!(button.style().class, "drag-button custom-button");
    button.handle(&GestureEvent::mouse_down(
        Point::new(1.0, 1.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
    ));
    let style = button.style();
    assert_eq!(style.class, "drag-button dragging custom-button");
    assert_eq!(style.content, "Custom Styled Button");
    assert_eq!(
        style.overrides,
        [(String::from("margin-bottom"), String::from("20px"))]
    );
}
