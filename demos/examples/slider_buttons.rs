// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider drag buttons.
//!
//! Three sliders sharing one layout: a percentage readout, a scaled value
//! and a custom formatter. Each one is clicked once, then dragged partway,
//! then dragged past the top of its travel.
//!
//! Run:
//! - `cargo run -p understory_drag_button_demos --example slider_buttons`

use kurbo::{Point, Rect};
use understory_drag_button::{GestureEvent, SliderButton, SliderConfig, ValueFormat};
use understory_drag_button_demos::{LoggingHost, init_tracing, path, print_slider};

fn main() {
    init_tracing();

    let configs = [
        SliderConfig::default().with_label("Volume"),
        SliderConfig::default()
            .with_label("Temp")
            .with_value_range(16.0, 28.0)
            .with_value_format(ValueFormat::Value),
        SliderConfig::default()
            .with_label("Weight")
            .with_max_drag_distance(200.0)
            .with_value_range(0.0, 5.0)
            .with_value_format(ValueFormat::custom(|v| format!("{v:.2} kg"))),
    ];

    let bounds = Rect::new(0.0, 400.0, 80.0, 480.0);
    let press = Point::new(40.0, 440.0);

    for config in configs {
        let label = config.label.clone();
        println!("== {label}");
        let mut button = SliderButton::new(config, LoggingHost::new("slider"))
            .expect("config is valid")
            .with_on_click(move |v| println!("{label}: click ({v})"))
            .with_on_release(|v| println!("released at {v}"));

        // Barely moving is a click.
        button.handle(&GestureEvent::mouse_down(press, bounds));
        button.handle(&GestureEvent::mouse_move(Point::new(40.0, 437.0)));
        button.handle(&GestureEvent::mouse_up(Point::new(40.0, 437.0)));

        for rise in [90.0, 400.0] {
            let top = Point::new(40.0, press.y - rise);
            button.handle(&GestureEvent::mouse_down(press, bounds));
            for position in path(press, top, 3) {
                button.handle(&GestureEvent::mouse_move(position));
                print_slider(&button.style());
            }
            button.handle(&GestureEvent::mouse_up(top));
        }
    }
}
