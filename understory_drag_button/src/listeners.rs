// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session-scoped listener subscriptions.
//!
//! While a drag is active the button needs to keep seeing pointer movement
//! after the pointer has left its bounds. Hosts usually do that with
//! document- or window-level listeners. The gesture state machines never touch
//! those listeners directly: they ask a [`ListenerHost`] to add a set of
//! [`Listeners`] when a session starts and to remove the same set when it
//! ends, whichever way it ends.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drag_button::listeners::{ListenerHost, ListenerSet, Listeners};
//!
//! let mut host = ListenerSet::new();
//! host.add_listeners(Listeners::POINTER_MOVE | Listeners::POINTER_UP);
//! assert!(host.active().contains(Listeners::POINTER_UP));
//!
//! host.remove_listeners(Listeners::POINTER_MOVE | Listeners::POINTER_UP);
//! assert!(host.is_idle());
//! assert_eq!(host.registrations(), host.releases());
//! ```

bitflags::bitflags! {
    /// Global listeners registered for the lifetime of one drag session.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer movement anywhere in the host surface.
        const POINTER_MOVE = 1 << 0;
        /// Pointer button release anywhere in the host surface.
        const POINTER_UP = 1 << 1;
        /// Touch movement anywhere in the host surface.
        const TOUCH_MOVE = 1 << 2;
        /// Touch end anywhere in the host surface.
        const TOUCH_END = 1 << 3;
        /// Touch cancellation by the platform.
        const TOUCH_CANCEL = 1 << 4;
        /// Pointer leaving the host surface.
        const POINTER_LEAVE = 1 << 5;
    }
}

/// The platform side of a listener subscription.
pub trait ListenerHost {
    /// Starts delivering the given events to the button.
    fn add_listeners(&mut self, listeners: Listeners);

    /// Stops delivering the given events to the button.
    fn remove_listeners(&mut self, listeners: Listeners);
}

impl<H: ListenerHost + ?Sized> ListenerHost for &mut H {
    fn add_listeners(&mut self, listeners: Listeners) {
        (**self).add_listeners(listeners);
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        (**self).remove_listeners(listeners);
    }
}

/// A [`ListenerHost`] that only records which listeners are active.
///
/// Useful for headless hosts that forward every event to the button anyway,
/// and for checking that sessions release what they acquire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerSet {
    active: Listeners,
    registrations: u32,
    releases: u32,
}

impl Default for Listeners {
    fn default() -> Self {
        Self::empty()
    }
}

impl ListenerSet {
    /// Creates a set with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn active(&self) -> Listeners {
        self.active
    }

    /// Returns `true` when no listener is registered.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of `add_listeners` calls seen so far.
    #[must_use]
    pub fn registrations(&self) -> u32 {
        self.registrations
    }

    /// Number of `remove_listeners` calls seen so far.
    #[must_use]
    pub fn releases(&self) -> u32 {
        self.releases
    }
}

impl ListenerHost for ListenerSet {
    fn add_listeners(&mut self, listeners: Listeners) {
        debug_assert!(
            !self.active.intersects(listeners),
            "listeners {listeners:?} registered twice"
        );
        self.active |= listeners;
        self.registrations += 1;
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        self.active.remove(listeners);
        self.releases += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_idle() {
        let set = ListenerSet::new();
        assert!(set.is_idle());
        assert_eq!(set.registrations(), 0);
        assert_eq!(set.releases(), 0);
    }

    #[test]
    fn remove_only_clears_the_given_listeners() {
        let mut set = ListenerSet::new();
        set.add_listeners(Listeners::TOUCH_MOVE | Listeners::TOUCH_END);
        set.remove_listeners(Listeners::TOUCH_END);
        assert_eq!(set.active(), Listeners::TOUCH_MOVE);
    }

    #[test]
    fn forwards_through_mutable_references() {
        fn register(mut host: impl ListenerHost) {
            host.add_listeners(Listeners::POINTER_MOVE);
        }

        let mut set = ListenerSet::new();
        register(&mut set);
        assert_eq!(set.active(), Listeners::POINTER_MOVE);
        assert_eq!(set.registrations(), 1);
    }
}
