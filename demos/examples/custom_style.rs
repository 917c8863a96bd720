// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom classes, inline overrides and colors.
//!
//! Run:
//! - `cargo run -p understory_drag_button_demos --example custom_style`

use kurbo::{Point, Rect, Size};
use peniko::Color;
use understory_drag_button::{
    BasicButton, BasicConfig, ButtonColors, GestureEvent, ListenerSet, SliderButton, SliderConfig,
    TooltipPosition, TooltipShape,
};
use understory_drag_button_demos::{init_tracing, print_slider};

fn main() {
    init_tracing();

    let config = BasicConfig::new("Styled button")
        .with_class_name("custom-button")
        .with_style("border-radius", "12px");
    let mut button = BasicButton::new(config, ListenerSet::new()).expect("content is set");
    println!("idle: {:?}", button.style());
    button.handle(&GestureEvent::mouse_down(
        Point::new(5.0, 5.0),
        Rect::new(0.0, 0.0, 120.0, 36.0),
    ));
    println!("dragging: {:?}", button.style());

    let colors = ButtonColors {
        background: Color::from_rgb8(0x3a, 0x7b, 0xd5),
        hover_background: Color::from_rgb8(0x5a, 0x95, 0xe0),
        active_background: Color::from_rgb8(0x2c, 0x62, 0xb0),
        tooltip_background: Color::from_rgb8(0x22, 0x22, 0x22),
        ..ButtonColors::default()
    };
    let config = SliderConfig::default()
        .with_label("Blue")
        .with_colors(colors)
        .with_button_size(64.0)
        .with_tooltip_shape(TooltipShape::Circular)
        .with_tooltip_size(Size::new(48.0, 48.0))
        .with_tooltip_position(TooltipPosition::Left)
        .with_class_name("blue-slider");
    let mut slider = SliderButton::new(config, ListenerSet::new()).expect("config is valid");
    println!("{}", slider.style().container_class);
    print_slider(&slider.style());

    let bounds = Rect::new(300.0, 300.0, 364.0, 364.0);
    slider.handle(&GestureEvent::mouse_down(Point::new(332.0, 332.0), bounds));
    slider.handle(&GestureEvent::mouse_move(Point::new(332.0, 272.0)));
    println!("{}", slider.style().container_class);
    print_slider(&slider.style());
}
