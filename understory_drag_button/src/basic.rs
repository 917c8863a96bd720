// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic variant: report where a dragged button would be.
//!
//! On press the offset of the pointer inside the button is captured. Each move
//! reports `pointer - offset`, the position the button's top-left corner would
//! take if it followed the pointer. Positions are unclamped.
//!
//! As with the slider, [`BasicGesture`] is the pure state machine returning
//! [`BasicEffect`]s and [`BasicButton`] carries them out against a
//! [`ListenerHost`] and the host's callbacks.
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_drag_button::basic::{BasicEffect, BasicGesture};
//! use understory_drag_button::config::BasicConfig;
//! use understory_drag_button::input::GestureEvent;
//!
//! let config = BasicConfig::new("Drag me");
//! let mut gesture = BasicGesture::new();
//!
//! let target = Rect::new(100.0, 50.0, 180.0, 90.0);
//! let effects = gesture.handle(&config, &GestureEvent::mouse_down(Point::new(110.0, 60.0), target));
//! assert_eq!(effects.last(), Some(&BasicEffect::DragStart(Vec2::new(10.0, 10.0))));
//!
//! let effects = gesture.handle(&config, &GestureEvent::mouse_move(Point::new(150.0, 80.0)));
//! assert_eq!(effects.as_slice(), &[BasicEffect::Drag(Point::new(140.0, 70.0))]);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::BasicConfig;
use crate::error::ConfigError;
use crate::input::{GestureEvent, PointerSource};
use crate::listeners::{ListenerHost, Listeners};
use crate::session::DragSession;
use crate::style::BasicStyle;

/// Something the host has to do after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BasicEffect {
    /// Register these global listeners.
    Subscribe(Listeners),
    /// Remove these global listeners.
    Unsubscribe(Listeners),
    /// Suppress the event's default action (touch scrolling).
    PreventDefault,
    /// A session started; the pointer's offset inside the button.
    DragStart(Vec2),
    /// The pointer moved; the derived button position.
    Drag(Point),
    /// The session ended.
    DragEnd,
}

/// Effects produced by one transition, in the order they must be applied.
pub type BasicEffects = SmallVec<[BasicEffect; 3]>;

/// Gesture state machine of the basic variant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicGesture {
    session: Option<DragSession<Point>>,
}

impl BasicGesture {
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

    /// Last derived position while dragging.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.session.map(|session| session.displacement)
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<Point>> {
        self.session.as_ref()
    }

    /// Applies one event. See the module docs for the position mapping.
    pub fn handle(&mut self, config: &BasicConfig, event: &GestureEvent) -> BasicEffects {
        let mut effects = BasicEffects::new();
        if config.disabled {
            return effects;
        }
        match *event {
            GestureEvent::Down {
                source,
                position,
                target,
            } => {
                if self.session.is_some() {
                    return effects;
                }
                let offset = position - target.origin();
                let session = DragSession::start(source, offset.to_point(), target.origin());
                debug!(?source, offset_x = offset.x, offset_y = offset.y, "drag started");
                effects.push(BasicEffect::Subscribe(session.listeners));
                if source.scrolls_by_default() {
                    effects.push(BasicEffect::PreventDefault);
                }
                effects.push(BasicEffect::DragStart(offset));
                self.session = Some(session);
            }
            GestureEvent::Move { source, position } => {
                let Some(session) = self.session.as_mut().filter(|s| s.accepts(source)) else {
                    return effects;
                };
                session.displacement = position - session.origin.to_vec2();
                trace!(
                    x = session.displacement.x,
                    y = session.displacement.y,
                    "drag moved"
                );
                if source.scrolls_by_default() {
                    effects.push(BasicEffect::PreventDefault);
                }
                effects.push(BasicEffect::Drag(session.displacement));
            }
            GestureEvent::Up { source, .. }
            | GestureEvent::Cancel { source }
            | GestureEvent::SurfaceLeave { source, .. } => {
                if self.session.is_some_and(|s| s.accepts(source)) {
                    self.finish(&mut effects);
                }
            }
            // Leaving the button is a mouse event and ends only mouse sessions.
            GestureEvent::Leave { .. } => {
                if self.session.is_some_and(|s| s.accepts(PointerSource::Mouse)) {
                    self.finish(&mut effects);
                }
            }
            GestureEvent::Enter { .. } => {}
        }
        effects
    }

    /// Ends the session without reporting anything, e.g. on unmount.
    pub fn teardown(&mut self) -> BasicEffects {
        let mut effects = BasicEffects::new();
        if let Some(session) = self.session.take() {
            debug!("drag torn down");
            effects.push(BasicEffect::Unsubscribe(session.listeners));
        }
        effects
    }

    fn finish(&mut self, effects: &mut BasicEffects) {
        if let Some(session) = self.session.take() {
            debug!("drag ended");
            effects.push(BasicEffect::Unsubscribe(session.listeners));
            effects.push(BasicEffect::DragEnd);
        }
    }
}

type StartCallback = Box<dyn FnMut(&GestureEvent, Vec2)>;
type MoveCallback = Box<dyn FnMut(&GestureEvent, Point)>;
type EndCallback = Box<dyn FnMut(&GestureEvent)>;

/// A mounted basic drag button.
pub struct BasicButton<H: ListenerHost> {
    config: BasicConfig,
    gesture: BasicGesture,
    host: H,
    on_drag_start: Option<StartCallback>,
    on_drag: Option<MoveCallback>,
    on_drag_end: Option<EndCallback>,
}

impl<H: ListenerHost> BasicButton<H> {
    /// Mounts a button, refusing configurations without content.
    pub fn new(config: BasicConfig, host: H) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            debug!(%err, "drag button rejected");
            return Err(err);
        }
        Ok(Self {
            config,
            gesture: BasicGesture::new(),
            host,
            on_drag_start: None,
            on_drag: None,
            on_drag_end: None,
        })
    }

    /// Sets the callback fired once when a session starts, with the pointer's offset in the button.
    #[must_use]
    pub fn with_on_drag_start(
        mut self,
        on_drag_start: impl FnMut(&GestureEvent, Vec2) + 'static,
    ) -> Self {
        self.on_drag_start = Some(Box::new(on_drag_start));
        self
    }

    /// Sets the callback fired on every move, with the derived position.
    #[must_use]
    pub fn with_on_drag(mut self, on_drag: impl FnMut(&GestureEvent, Point) + 'static) -> Self {
        self.on_drag = Some(Box::new(on_drag));
        self
    }

    /// Sets the callback fired once when a session ends.
    #[must_use]
    pub fn with_on_drag_end(mut self, on_drag_end: impl FnMut(&GestureEvent) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(on_drag_end));
        self
    }

    /// The configuration this button was mounted with.
    #[must_use]
    pub fn config(&self) -> &BasicConfig {
        &self.config
    }

    /// The gesture state.
    #[must_use]
    pub fn gesture(&self) -> &BasicGesture {
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

    /// Derives the current presentation.
    #[must_use]
    pub fn style(&self) -> BasicStyle {
        BasicStyle::derive(&self.config, &self.gesture)
    }

    /// Enables or disables the button. Disabling ends a live session silently.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.unmount();
        }
        self.config.disabled = disabled;
    }

    /// Ends a live session without firing `on_drag_end` and releases its listeners.
    pub fn unmount(&mut self) {
        for effect in self.gesture.teardown() {
            if let BasicEffect::Unsubscribe(listeners) = effect {
                self.host.remove_listeners(listeners);
            }
        }
    }

    /// Handles one event.
    ///
    /// Returns `true` when the host should suppress the event's default action.
    pub fn handle(&mut self, event: &GestureEvent) -> bool {
        let mut prevent_default = false;
        for effect in self.gesture.handle(&self.config, event) {
            match effect {
                BasicEffect::Subscribe(listeners) => self.host.add_listeners(listeners),
                BasicEffect::Unsubscribe(listeners) => self.host.remove_listeners(listeners),
                BasicEffect::PreventDefault => prevent_default = true,
                BasicEffect::DragStart(offset) => {
                    if let Some(on_drag_start) = self.on_drag_start.as_mut() {
                        on_drag_start(event, offset);
                    }
                }
                BasicEffect::Drag(position) => {
                    if let Some(on_drag) = self.on_drag.as_mut() {
                        on_drag(event, position);
                    }
                }
                BasicEffect::DragEnd => {
                    if let Some(on_drag_end) = self.on_drag_end.as_mut() {
                        on_drag_end(event);
                    }
                }
            }
        }
        prevent_default
    }
}

impl<H: ListenerHost> Drop for BasicButton<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: ListenerHost + fmt::Debug> fmt::Debug for BasicButton<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicButton")
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("host", &self.host)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}
