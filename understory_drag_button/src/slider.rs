// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider variant: drag the button upward to pick a bounded value.
//!
//! The rise of the pointer above the press position is clamped into
//! `[0, max_drag_distance]` and mapped onto `[min_value, max_value]`. On
//! release the host gets either a click (rise below [`CLICK_THRESHOLD`]) or
//! the mapped value.
//!
//! Two layers are provided:
//!
//! - [`SliderGesture`] is the state machine. [`SliderGesture::handle`] applies
//!   one event and returns the [`SliderEffect`]s the host has to carry out, in
//!   order. It never calls anything itself.
//! - [`SliderButton`] owns a gesture, a [`ListenerHost`] and the host's
//!   callbacks, and carries those effects out. Dropping it releases any
//!   listeners a live session still holds.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_drag_button::config::SliderConfig;
//! use understory_drag_button::input::GestureEvent;
//! use understory_drag_button::listeners::ListenerSet;
//! use understory_drag_button::slider::SliderButton;
//! use understory_drag_button::value::ValueFormat;
//!
//! let released = Rc::new(Cell::new(None));
//! let sink = released.clone();
//!
//! let config = SliderConfig::default().with_value_format(ValueFormat::Value);
//! let mut button = SliderButton::new(config, ListenerSet::new())
//!     .unwrap()
//!     .with_on_release(move |value| sink.set(Some(value)));
//!
//! let bounds = Rect::new(0.0, 200.0, 80.0, 280.0);
//! button.handle(&GestureEvent::mouse_down(Point::new(40.0, 240.0), bounds));
//! button.handle(&GestureEvent::mouse_move(Point::new(40.0, 165.0)));
//! assert_eq!(button.value_label().to_string(), "50");
//!
//! button.handle(&GestureEvent::mouse_up(Point::new(40.0, 165.0)));
//! assert_eq!(released.get(), Some(50.0));
//! assert!(button.host().is_idle());
//! ```

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::input::GestureEvent;
use crate::listeners::{ListenerHost, Listeners};
use crate::session::DragSession;
use crate::style::SliderStyle;
use crate::value::ValueLabel;

/// A session whose rise stays below this many units ends as a click.
pub const CLICK_THRESHOLD: f64 = 5.0;

/// Argument passed to the click callback.
pub const CLICK_ARGUMENT: f64 = 0.0;

/// Something the host has to do after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEffect {
    /// Register these global listeners.
    Subscribe(Listeners),
    /// Remove these global listeners.
    Unsubscribe(Listeners),
    /// Suppress the event's default action (touch scrolling).
    PreventDefault,
    /// The session ended as a drag; report the mapped value.
    Release(f64),
    /// The session ended as a click.
    Click(f64),
}

/// Effects produced by one transition, in the order they must be applied.
pub type SliderEffects = SmallVec<[SliderEffect; 3]>;

/// Gesture state machine of the slider variant.
///
/// Idle while [`session`](Self::session) is `None`, dragging otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderGesture {
    session: Option<DragSession<f64>>,
    hovered: bool,
}

impl SliderGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` while the pointer is over the button.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current clamped rise; zero while idle.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.session.map_or(0.0, |session| session.displacement)
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<f64>> {
        self.session.as_ref()
    }

    /// Applies one event.
    ///
    /// - Disabled: nothing changes and nothing is returned.
    /// - Press while idle: starts a session and subscribes its listeners.
    /// - Move from the session's source: updates the clamped rise.
    /// - Release, cancel, or leaving the surface while dragging: ends the
    ///   session, releases its listeners, then reports a click or the mapped
    ///   value.
    /// - Enter and leave: only toggle the hover flag.
    ///
    /// Presses during a session and moves or releases without one are ignored.
    pub fn handle(&mut self, config: &SliderConfig, event: &GestureEvent) -> SliderEffects {
        let mut effects = SliderEffects::new();
        if config.disabled {
            return effects;
        }
        match *event {
            GestureEvent::Down {
                source, position, ..
            } => {
                if self.session.is_some() {
                    return effects;
                }
                let session = DragSession::start(source, position, 0.0);
                debug!(?source, origin_y = position.y, "slider drag started");
                effects.push(SliderEffect::Subscribe(session.listeners));
                if source.scrolls_by_default() {
                    effects.push(SliderEffect::PreventDefault);
                }
                self.session = Some(session);
            }
            GestureEvent::Move { source, position } => {
                let Some(session) = self.session.as_mut().filter(|s| s.accepts(source)) else {
                    return effects;
                };
                let rise = session.origin.y - position.y;
                session.displacement = rise.clamp(0.0, config.max_drag_distance);
                trace!(rise, displacement = session.displacement, "slider drag moved");
                if source.scrolls_by_default() {
                    effects.push(SliderEffect::PreventDefault);
                }
            }
            GestureEvent::Up { source, .. }
            | GestureEvent::Cancel { source }
            | GestureEvent::SurfaceLeave { source, .. } => {
                if self.session.is_some_and(|s| s.accepts(source)) {
                    self.finish(config, &mut effects);
                }
            }
            // The raised button moves away from the pointer; the session
            // keeps tracking through its surface listeners.
            GestureEvent::Leave { .. } => self.hovered = false,
            GestureEvent::Enter { .. } => self.hovered = true,
        }
        effects
    }

    /// Ends the session without reporting anything, e.g. on unmount.
    ///
    /// Returns the listener release for a live session; empty when idle.
    pub fn teardown(&mut self) -> SliderEffects {
        let mut effects = SliderEffects::new();
        self.hovered = false;
        if let Some(session) = self.session.take() {
            debug!("slider drag torn down");
            effects.push(SliderEffect::Unsubscribe(session.listeners));
        }
        effects
    }

    fn finish(&mut self, config: &SliderConfig, effects: &mut SliderEffects) {
        let Some(session) = self.session.take() else {
            return;
        };
        effects.push(SliderEffect::Unsubscribe(session.listeners));
        if session.displacement < CLICK_THRESHOLD {
            debug!(displacement = session.displacement, "slider drag ended as click");
            effects.push(SliderEffect::Click(CLICK_ARGUMENT));
        } else {
            let value = config.mapper().value(session.displacement);
            debug!(displacement = session.displacement, value, "slider drag released");
            effects.push(SliderEffect::Release(value));
        }
    }
}

type ValueCallback = Box<dyn FnMut(f64)>;

/// A mounted slider drag button.
///
/// The host forwards every [`GestureEvent`] for the button to
/// [`handle`](Self::handle), including the global move/release events for
/// listeners the button asked its [`ListenerHost`] to register, and renders
/// [`style`](Self::style) after each one.
pub struct SliderButton<H: ListenerHost> {
    config: SliderConfig,
    gesture: SliderGesture,
    host: H,
    on_release: Option<ValueCallback>,
    on_click: Option<ValueCallback>,
}

impl<H: ListenerHost> SliderButton<H> {
    /// Mounts a button, refusing configurations that cannot be rendered.
    pub fn new(config: SliderConfig, host: H) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            debug!(%err, "slider drag button rejected");
            return Err(err);
        }
        Ok(Self {
            config,
            gesture: SliderGesture::new(),
            host,
            on_release: None,
            on_click: None,
        })
    }

    /// Sets the callback receiving the full-precision value when a drag ends.
    #[must_use]
    pub fn with_on_release(mut self, on_release: impl FnMut(f64) + 'static) -> Self {
        self.on_release = Some(Box::new(on_release));
        self
    }

    /// Sets the callback invoked when a session ends below the click threshold.
    #[must_use]
    pub fn with_on_click(mut self, on_click: impl FnMut(f64) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// The configuration this button was mounted with.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The gesture state.
    #[must_use]
    pub fn gesture(&self) -> &SliderGesture {
        &self.gesture
    }

    /// The listener host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Full-precision value for the current displacement.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.config.mapper().value(self.gesture.displacement())
    }

    /// Current value formatted per the configured [`ValueFormat`](crate::value::ValueFormat).
    #[must_use]
    pub fn value_label(&self) -> ValueLabel {
        self.config
            .mapper()
            .label(self.gesture.displacement(), &self.config.value_format)
    }

    /// Derives the current presentation.
    #[must_use]
    pub fn style(&self) -> SliderStyle {
        SliderStyle::derive(&self.config, &self.gesture)
    }

    /// Enables or disables the button. Disabling ends a live session silently.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.unmount();
        }
        self.config.disabled = disabled;
    }

    /// Ends a live session without firing callbacks and releases its listeners.
    ///
    /// Dropping the button does the same.
    pub fn unmount(&mut self) {
        let effects = self.gesture.teardown();
        self.apply(effects);
    }

    /// Handles one event.
    ///
    /// Returns `true` when the host should suppress the event's default action.
    /// State is updated and listeners are released before any callback runs,
    /// so a panicking callback leaves the button idle and consistent.
    pub fn handle(&mut self, event: &GestureEvent) -> bool {
        let effects = self.gesture.handle(&self.config, event);
        self.apply(effects)
    }

    fn apply(&mut self, effects: SliderEffects) -> bool {
        let mut prevent_default = false;
        for effect in effects {
            match effect {
                SliderEffect::Subscribe(listeners) => self.host.add_listeners(listeners),
                SliderEffect::Unsubscribe(listeners) => self.host.remove_listeners(listeners),
                SliderEffect::PreventDefault => prevent_default = true,
                SliderEffect::Release(value) => {
                    if let Some(on_release) = self.on_release.as_mut() {
                        on_release(value);
                    }
                }
                SliderEffect::Click(arg) => {
                    if let Some(on_click) = self.on_click.as_mut() {
                        on_click(arg);
                    }
                }
            }
        }
        prevent_default
    }
}

impl<H: ListenerHost> Drop for SliderButton<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: ListenerHost + fmt::Debug> fmt::Debug for SliderButton<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderButton")
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("host", &self.host)
            .field("on_release", &self.on_release.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};

    use crate::input::PointerSource;

    const BOUNDS: Rect = Rect::new(0.0, 200.0, 80.0, 280.0);

    fn press(y: f64) -> GestureEvent {
        GestureEvent::mouse_down(Point::new(40.0, y), BOUNDS)
    }

    fn to(y: f64) -> GestureEvent {
        GestureEvent::mouse_move(Point::new(40.0, y))
    }

    fn release(y: f64) -> GestureEvent {
        GestureEvent::mouse_up(Point::new(40.0, y))
    }

    #[test]
    fn new_gesture_is_idle() {
        let gesture = SliderGesture::new();
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.displacement(), 0.0);
    }

    #[test]
    fn press_subscribes_mouse_listeners() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        let effects = gesture.handle(&config, &press(240.0));
        assert_eq!(
            effects.as_slice(),
            &[SliderEffect::Subscribe(
                Listeners::POINTER_MOVE | Listeners::POINTER_UP | Listeners::POINTER_LEAVE
            )]
        );
        assert!(gesture.is_dragging());
    }

    #[test]
    fn touch_press_and_move_prevent_scrolling() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        let start = gesture.handle(
            &config,
            &GestureEvent::touch_start(Point::new(40.0, 240.0), BOUNDS),
        );
        assert!(start.contains(&SliderEffect::PreventDefault));
        let moved = gesture.handle(&config, &GestureEvent::touch_move(Point::new(40.0, 200.0)));
        assert_eq!(moved.as_slice(), &[SliderEffect::PreventDefault]);
        assert_eq!(gesture.displacement(), 40.0);
    }

    #[test]
    fn rise_is_clamped_into_drag_range() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));

        gesture.handle(&config, &to(260.0));
        assert_eq!(gesture.displacement(), 0.0, "dragging down stays at zero");

        gesture.handle(&config, &to(-500.0));
        assert_eq!(gesture.displacement(), 150.0, "clamped at max distance");

        gesture.handle(&config, &to(200.0));
        assert_eq!(gesture.displacement(), 40.0);
    }

    #[test]
    fn small_rise_ends_as_click() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(235.5));
        let effects = gesture.handle(&config, &release(235.5));
        assert_eq!(
            effects.as_slice(),
            &[
                SliderEffect::Unsubscribe(PointerSource::Mouse.session_listeners()),
                SliderEffect::Click(0.0),
            ]
        );
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.displacement(), 0.0);
    }

    #[test]
    fn rise_at_threshold_ends_as_release() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(235.0));
        let effects = gesture.handle(&config, &release(235.0));
        let expected = config.mapper().value(5.0);
        assert_eq!(effects.last(), Some(&SliderEffect::Release(expected)));
    }

    #[test]
    fn second_release_is_a_no_op() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(100.0));
        assert_eq!(gesture.handle(&config, &release(100.0)).len(), 2);
        assert!(gesture.handle(&config, &release(100.0)).is_empty());
    }

    #[test]
    fn disabled_ignores_everything() {
        let config = SliderConfig::default().with_disabled(true);
        let mut gesture = SliderGesture::new();
        for event in [
            press(240.0),
            to(100.0),
            release(100.0),
            GestureEvent::Enter {
                position: Point::new(40.0, 240.0),
            },
        ] {
            assert!(gesture.handle(&config, &event).is_empty());
        }
        assert_eq!(gesture, SliderGesture::new());
    }

    #[test]
    fn press_during_session_is_ignored() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(200.0));
        assert!(gesture.handle(&config, &press(100.0)).is_empty());
        assert_eq!(gesture.session().map(|s| s.origin.y), Some(240.0));
        assert_eq!(gesture.displacement(), 40.0);
    }

    #[test]
    fn input_from_another_source_is_ignored() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &GestureEvent::touch_move(Point::new(40.0, 100.0)));
        assert_eq!(gesture.displacement(), 0.0);
        assert!(
            gesture
                .handle(&config, &GestureEvent::touch_end(Point::new(40.0, 100.0)))
                .is_empty()
        );
        assert!(gesture.is_dragging());
    }

    #[test]
    fn leaving_the_surface_matches_release() {
        let config = SliderConfig::default();

        let mut released = SliderGesture::new();
        released.handle(&config, &press(240.0));
        released.handle(&config, &to(120.0));
        let by_release = released.handle(&config, &release(120.0));

        let mut left = SliderGesture::new();
        left.handle(&config, &press(240.0));
        left.handle(&config, &to(120.0));
        let by_leave = left.handle(
            &config,
            &GestureEvent::mouse_leave_surface(Point::new(40.0, 120.0)),
        );

        assert_eq!(by_release, by_leave);
        assert_eq!(released, left);
    }

    #[test]
    fn teardown_releases_listeners_without_reporting() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        assert!(gesture.teardown().is_empty());

        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(100.0));
        let effects: Vec<_> = gesture.teardown().into_iter().collect();
        assert_eq!(
            effects,
            [SliderEffect::Unsubscribe(
                PointerSource::Mouse.session_listeners()
            )]
        );
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn hover_follows_enter_and_leave() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        let at = Point::new(40.0, 240.0);
        gesture.handle(&config, &GestureEvent::Enter { position: at });
        assert!(gesture.is_hovered());
        gesture.handle(&config, &GestureEvent::Leave { position: at });
        assert!(!gesture.is_hovered());
    }

    #[test]
    fn leaving_the_button_keeps_the_drag_alive() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        let at = Point::new(40.0, 240.0);
        gesture.handle(&config, &GestureEvent::Enter { position: at });
        gesture.handle(&config, &press(240.0));
        gesture.handle(&config, &to(180.0));
        let effects = gesture.handle(
            &config,
            &GestureEvent::Leave {
                position: Point::new(90.0, 180.0),
            },
        );
        assert!(effects.is_empty());
        assert!(gesture.is_dragging());
        assert!(!gesture.is_hovered());

        gesture.handle(&config, &to(100.0));
        assert_eq!(gesture.displacement(), 140.0);
    }

    #[test]
    fn surface_leave_from_another_source_is_ignored() {
        let config = SliderConfig::default();
        let mut gesture = SliderGesture::new();
        gesture.handle(
            &config,
            &GestureEvent::touch_start(Point::new(40.0, 240.0), BOUNDS),
        );
        let effects = gesture.handle(
            &config,
            &GestureEvent::mouse_leave_surface(Point::new(40.0, 240.0)),
        );
        assert!(effects.is_empty());
        assert!(gesture.is_dragging());
    }
}
