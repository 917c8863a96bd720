// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient per-interaction state shared by both variants.

use kurbo::Point;

use crate::input::PointerSource;
use crate::listeners::Listeners;

/// State of one press-drag-release interaction.
///
/// A session exists exactly while the button is being dragged: it is created
/// by the press and dropped by the release (or cancellation, leaving the
/// surface, disabling, unmount). `D` is the displacement representation of the
/// variant: a clamped `f64` rise for the slider, the derived element
/// position for the basic button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession<D> {
    /// Device family that started the session; input from others is ignored.
    pub source: PointerSource,
    /// Captured at the press: client position (slider) or offset of the
    /// pointer within the pressed element (basic).
    pub origin: Point,
    /// Current displacement.
    pub displacement: D,
    /// Global listeners registered for this session, released when it ends.
    pub listeners: Listeners,
}

impl<D> DragSession<D> {
    /// Starts a session for `source` with the listeners that source needs.
    #[must_use]
    pub fn start(source: PointerSource, origin: Point, displacement: D) -> Self {
        Self {
            source,
            origin,
            displacement,
            listeners: source.session_listeners(),
        }
    }

    /// Whether an event from `source` belongs to this session.
    #[must_use]
    pub fn accepts(&self, source: PointerSource) -> bool {
        self.source == source
    }
}
