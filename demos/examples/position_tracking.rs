// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position tracking.
//!
//! Feed `on_drag` positions into a readout, as an application tracking where
//! the button would be would do. Uses touch input, so every event also asks
//! the host to suppress scrolling.
//!
//! Run:
//! - `cargo run -p understory_drag_button_demos --example position_tracking`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_drag_button::{BasicButton, BasicConfig, GestureEvent};
use understory_drag_button_demos::{LoggingHost, init_tracing, path};

fn main() {
    init_tracing();

    let position = Rc::new(Cell::new(Point::ZERO));
    let tracked = position.clone();

    let config = BasicConfig::new("Drag me and watch the position")
        .with_style("margin-bottom", "20px");
    let mut button = BasicButton::new(config, LoggingHost::new("tracking"))
        .expect("content is set")
        .with_on_drag(move |_, pos| tracked.set(pos));

    let bounds = Rect::new(0.0, 100.0, 240.0, 136.0);
    let start = Point::new(12.0, 110.0);
    let prevent = button.handle(&GestureEvent::touch_start(start, bounds));
    println!("touch start, prevent default: {prevent}");

    for point in path(start, Point::new(-30.5, 300.25), 4) {
        let prevent = button.handle(&GestureEvent::touch_move(point));
        let pos = position.get();
        println!(
            "Current position: X: {}, Y: {} (prevent default: {prevent})",
            pos.x.round(),
            pos.y.round()
        );
    }
    button.handle(&GestureEvent::touch_end(Point::new(-30.5, 300.25)));
    println!("listeners idle: {}", button.host().set().is_idle());
}
