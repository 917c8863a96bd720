// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disabled buttons.
//!
//! A disabled button ignores presses. Disabling a button mid-drag ends the
//! session without reporting it.
//!
//! Run:
//! - `cargo run -p understory_drag_button_demos --example disabled`

use kurbo::{Point, Rect};
use understory_drag_button::{BasicButton, BasicConfig, GestureEvent};
use understory_drag_button_demos::{LoggingHost, init_tracing};

fn main() {
    init_tracing();

    let bounds = Rect::new(0.0, 0.0, 140.0, 36.0);
    let press = Point::new(10.0, 10.0);

    let config = BasicConfig::new("Cannot drag me").with_disabled(true);
    let mut button = BasicButton::new(config, LoggingHost::new("disabled"))
        .expect("content is set")
        .with_on_drag_start(|_, _| println!("unreachable: disabled buttons never start"));
    button.handle(&GestureEvent::mouse_down(press, bounds));
    let style = button.style();
    println!(
        "'{}' disabled: {} dragging: {}",
        style.content,
        style.disabled,
        button.is_dragging()
    );

    let mut button = BasicButton::new(BasicConfig::new("Drag me"), LoggingHost::new("toggled"))
        .expect("content is set")
        .with_on_drag_end(|_| println!("unreachable: disabling ends the drag silently"));
    button.handle(&GestureEvent::mouse_down(press, bounds));
    println!("before disabling, dragging: {}", button.is_dragging());
    button.set_disabled(true);
    button.handle(&GestureEvent::mouse_up(press));
    println!(
        "after disabling, dragging: {} listeners idle: {}",
        button.is_dragging(),
        button.host().set().is_idle()
    );
}
