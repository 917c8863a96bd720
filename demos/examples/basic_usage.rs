// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic drag button usage.
//!
//! Mount a basic drag button with all three callbacks and replay a short drag.
//!
//! Run:
//! - `cargo run -p understory_drag_button_demos --example basic_usage`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_drag_button::{BasicButton, BasicConfig, GestureEvent};
use understory_drag_button_demos::{LoggingHost, init_tracing, path};

fn main() {
    init_tracing();

    let dragging = Rc::new(Cell::new(false));
    let (started, ended) = (dragging.clone(), dragging.clone());

    let mut button = BasicButton::new(BasicConfig::new("Drag me!"), LoggingHost::new("basic"))
        .expect("content is set")
        .with_on_drag_start(move |_, offset| {
            started.set(true);
            println!("Drag started at: {offset:?}");
        })
        .with_on_drag(|_, position| println!("Dragging at: {position:?}"))
        .with_on_drag_end(move |_| {
            ended.set(false);
            println!("Drag ended");
        });

    // The button sits at (20, 20) and is 100 x 36.
    let bounds = Rect::new(20.0, 20.0, 120.0, 56.0);
    let press = Point::new(35.0, 30.0);
    button.handle(&GestureEvent::mouse_down(press, bounds));
    println!("dragging: {} class: {}", dragging.get(), button.style().class);

    let release = Point::new(180.0, 95.0);
    for position in path(press, release, 5) {
        button.handle(&GestureEvent::mouse_move(position));
    }
    button.handle(&GestureEvent::mouse_up(release));
    println!("dragging: {} class: {}", dragging.get(), button.style().class);
}
