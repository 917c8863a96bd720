// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and touch input, as delivered by the host.
//!
//! Positions are client coordinates. Hosts translate their native events into
//! [`GestureEvent`]s; both element-level events (press, enter, leave) and the
//! session-scoped global events (move, release, leaving the surface) use the
//! same type.
//!
//! Leaving the button ([`GestureEvent::Leave`]) and leaving the host surface
//! ([`GestureEvent::SurfaceLeave`]) are distinct: the slider only ends its
//! session on the latter, so a drag keeps tracking once the pointer is off the
//! raised button.

use kurbo::{Point, Rect};

use crate::listeners::Listeners;

/// Device family an event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse or pen.
    Mouse,
    /// A single touch point.
    Touch,
}

impl PointerSource {
    /// Global listeners a session started by this source needs.
    #[must_use]
    pub const fn session_listeners(self) -> Listeners {
        match self {
            Self::Mouse => Listeners::POINTER_MOVE
                .union(Listeners::POINTER_UP)
                .union(Listeners::POINTER_LEAVE),
            Self::Touch => Listeners::TOUCH_MOVE
                .union(Listeners::TOUCH_END)
                .union(Listeners::TOUCH_CANCEL),
        }
    }

    /// Touch input scrolls the page unless the default action is suppressed.
    #[must_use]
    pub const fn scrolls_by_default(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// One input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Press on the button (mouse down or touch start).
    Down {
        /// Device family.
        source: PointerSource,
        /// Client position of the press.
        position: Point,
        /// Bounding box of the pressed element, in client coordinates.
        target: Rect,
    },
    /// Movement (mouse move or touch move).
    Move {
        /// Device family.
        source: PointerSource,
        /// Client position.
        position: Point,
    },
    /// Release (mouse up or touch end).
    Up {
        /// Device family.
        source: PointerSource,
        /// Client position of the release.
        position: Point,
    },
    /// The platform cancelled the interaction (e.g. touch cancel).
    Cancel {
        /// Device family.
        source: PointerSource,
    },
    /// The pointer entered the button.
    Enter {
        /// Client position.
        position: Point,
    },
    /// The pointer left the button.
    ///
    /// Element-level and mouse-only: touch input has no hover.
    Leave {
        /// Last known client position.
        position: Point,
    },
    /// The pointer left the host surface (window or viewport) while pressed.
    ///
    /// Delivered through the session's [`Listeners::POINTER_LEAVE`] listener.
    SurfaceLeave {
        /// Device family.
        source: PointerSource,
        /// Last known client position.
        position: Point,
    },
}

impl GestureEvent {
    /// Mouse press at `position` on an element occupying `target`.
    #[must_use]
    pub const fn mouse_down(position: Point, target: Rect) -> Self {
        Self::Down {
            source: PointerSource::Mouse,
            position,
            target,
        }
    }

    /// Mouse movement to `position`.
    #[must_use]
    pub const fn mouse_move(position: Point) -> Self {
        Self::Move {
            source: PointerSource::Mouse,
            position,
        }
    }

    /// Mouse release at `position`.
    #[must_use]
    pub const fn mouse_up(position: Point) -> Self {
        Self::Up {
            source: PointerSource::Mouse,
            position,
        }
    }

    /// Touch start at `position` on an element occupying `target`.
    #[must_use]
    pub const fn touch_start(position: Point, target: Rect) -> Self {
        Self::Down {
            source: PointerSource::Touch,
            position,
            target,
        }
    }

    /// Touch movement to `position`.
    #[must_use]
    pub const fn touch_move(position: Point) -> Self {
        Self::Move {
            source: PointerSource::Touch,
            position,
        }
    }

    /// Touch end at `position`.
    #[must_use]
    pub const fn touch_end(position: Point) -> Self {
        Self::Up {
            source: PointerSource::Touch,
            position,
        }
    }

    /// Mouse leaving the host surface at `position`.
    #[must_use]
    pub const fn mouse_leave_surface(position: Point) -> Self {
        Self::SurfaceLeave {
            source: PointerSource::Mouse,
            position,
        }
    }

    /// Device family, for events that carry one.
    #[must_use]
    pub const fn source(&self) -> Option<PointerSource> {
        match self {
            Self::Down { source, .. }
            | Self::Move { source, .. }
            | Self::Up { source, .. }
            | Self::Cancel { source }
            | Self::SurfaceLeave { source, .. } => Some(*source),
            Self::Enter { .. } | Self::Leave { .. } => None,
        }
    }

    /// Client position, for events that carry one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Down { position, .. }
            | Self::Move { position, .. }
            | Self::Up { position, .. }
            | Self::Enter { position }
            | Self::Leave { position }
            | Self::SurfaceLeave { position, .. } => Some(*position),
            Self::Cancel { .. } => None,
        }
    }
}
