// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the headless drag button demos.
//!
//! The demos have no window. They mount buttons against a [`LoggingHost`],
//! replay scripted pointer input, and print what a real host would render.
//!
//! Run any of them with, for example:
//! - `cargo run -p understory_drag_button_demos --example basic_usage`
//!
//! Set `RUST_LOG=trace` to also see every move the buttons process.

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use understory_drag_button::{ListenerHost, ListenerSet, Listeners, SliderStyle};

/// Installs a console subscriber filtered by `RUST_LOG`, defaulting to `DEBUG`.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();
    let console_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_filter(env_filter);
    // A subscriber installed by someone else wins.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .try_init();
}

/// A listener host that logs every registration and release.
#[derive(Debug, Default)]
pub struct LoggingHost {
    name: &'static str,
    set: ListenerSet,
}

impl LoggingHost {
    /// Creates a host labelled `name` in the log.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            set: ListenerSet::new(),
        }
    }

    /// The recorded listener state.
    #[must_use]
    pub fn set(&self) -> &ListenerSet {
        &self.set
    }
}

impl ListenerHost for LoggingHost {
    fn add_listeners(&mut self, listeners: Listeners) {
        info!(host = self.name, ?listeners, "document listeners added");
        self.set.add_listeners(listeners);
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        info!(host = self.name, ?listeners, "document listeners removed");
        self.set.remove_listeners(listeners);
    }
}

/// Evenly spaced pointer positions from `from` (exclusive) to `to` (inclusive).
pub fn path(from: Point, to: Point, steps: usize) -> impl Iterator<Item = Point> {
    let steps = steps.max(1);
    (1..=steps).map(move |i| from.lerp(to, i as f64 / steps as f64))
}

/// Prints the parts of a slider style a host would draw.
pub fn print_slider(style: &SliderStyle) {
    println!(
        "  [{}] {:?} fill {:?} | tooltip [{}] at {:?}: {}",
        style.button_class,
        style.button,
        style.button_fill,
        style.tooltip_class,
        style.tooltip.origin(),
        style.tooltip_text,
    );
}
