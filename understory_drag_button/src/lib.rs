// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_button --heading-base-level=0

//! Understory Drag Button: state, value mapping, and presentation for drag buttons.
//!
//! A drag button is pressed and dragged rather than clicked. This crate
//! provides two variants that share one gesture core:
//!
//! - [`slider`]: drag upward to pick a value. The rise is clamped into a
//!   maximum drag distance and mapped onto a value domain. Releasing reports
//!   the value, or a click when the button barely moved.
//! - [`basic`]: drag anywhere. The host is told where the button's top-left
//!   corner would be if it followed the pointer.
//!
//! The crate does not assume any particular UI framework. Hosts translate
//! their native pointer and touch events into [`GestureEvent`]s, forward them
//! to a button, and render the derived [`SliderStyle`] or [`BasicStyle`].
//!
//! ## Layers
//!
//! - **Gesture state machines** ([`SliderGesture`], [`BasicGesture`]) are pure:
//!   each event returns the effects to carry out (subscribe or release global
//!   listeners, suppress scrolling, report a value) and never calls out.
//! - **Value mapping** ([`value`]) turns a displacement into a percentage, a
//!   scaled value, or a custom label.
//! - **Presentation** ([`style`]) derives colors, boxes, and tooltip content
//!   from configuration and gesture state.
//! - **Mounted buttons** ([`SliderButton`], [`BasicButton`]) tie a gesture to a
//!   [`ListenerHost`] and the host's callbacks. Listeners registered for a
//!   session are released on every exit path, including dropping the button
//!   mid-drag.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_drag_button::{
//!     GestureEvent, ListenerSet, SliderButton, SliderConfig, ValueFormat,
//! };
//!
//! let events = Rc::new(RefCell::new(Vec::new()));
//! let (on_release, on_click) = (events.clone(), events.clone());
//!
//! let config = SliderConfig::default()
//!     .with_label("Brightness")
//!     .with_value_format(ValueFormat::Value);
//! let mut button = SliderButton::new(config, ListenerSet::new())
//!     .unwrap()
//!     .with_on_release(move |v| on_release.borrow_mut().push(("release", v)))
//!     .with_on_click(move |v| on_click.borrow_mut().push(("click", v)));
//!
//! let bounds = Rect::new(0.0, 300.0, 80.0, 380.0);
//!
//! // A press without movement is a click.
//! button.handle(&GestureEvent::mouse_down(Point::new(40.0, 340.0), bounds));
//! button.handle(&GestureEvent::mouse_up(Point::new(40.0, 340.0)));
//!
//! // Dragging all the way up reports the top of the domain.
//! button.handle(&GestureEvent::mouse_down(Point::new(40.0, 340.0), bounds));
//! button.handle(&GestureEvent::mouse_move(Point::new(40.0, 100.0)));
//! assert_eq!(button.style().tooltip_text, "100");
//! button.handle(&GestureEvent::mouse_up(Point::new(40.0, 100.0)));
//!
//! assert_eq!(*events.borrow(), [("click", 0.0), ("release", 100.0)]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo, Peniko and `tracing` against the standard library.
//! - `libm`: `no_std` float math for Kurbo and Peniko.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod basic;
pub mod config;
pub mod error;
pub mod input;
pub mod listeners;
pub mod session;
pub mod slider;
pub mod style;
pub mod value;

pub use basic::{BasicButton, BasicEffect, BasicGesture};
pub use config::{BasicConfig, ButtonColors, SliderConfig, TooltipPosition, TooltipShape};
pub use error::ConfigError;
pub use input::{GestureEvent, PointerSource};
pub use listeners::{ListenerHost, ListenerSet, Listeners};
pub use session::DragSession;
pub use slider::{SliderButton, SliderEffect, SliderGesture};
pub use style::{BasicStyle, SliderStyle, TooltipExtent};
pub use value::{ValueFormat, ValueLabel, ValueMapper};
