// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions for a flat set of targets.
//!
//! Overlay markers are not nested, so at most one element is hovered at a time
//! and every transition is a `Leave` of the old element followed by an `Enter`
//! of the new one.
//!
//! ```
//! use pinmark_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(Some(4_u64)).as_slice(), &[HoverEvent::Enter(4)]);
//! assert_eq!(
//!     hover.update(Some(5)).as_slice(),
//!     &[HoverEvent::Leave(4), HoverEvent::Enter(5)]
//! );
//! assert!(hover.update(Some(5)).is_empty());
//! assert_eq!(hover.update(None).as_slice(), &[HoverEvent::Leave(5)]);
//! ```

use smallvec::SmallVec;

/// A hover transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered `K`.
    Enter(K),
    /// The pointer left `K`.
    Leave(K),
}

/// Transitions produced by one update; never more than a leave and an enter.
pub type HoverTransitions<K> = SmallVec<[HoverEvent<K>; 2]>;

/// Tracks the currently hovered element.
#[derive(Debug, Clone, Copy)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently hovered element.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Set the element under the pointer and return the resulting transitions.
    pub fn update(&mut self, target: Option<K>) -> HoverTransitions<K> {
        let mut events = HoverTransitions::new();
        if self.current == target {
            return events;
        }
        if let Some(old) = self.current {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = target {
            events.push(HoverEvent::Enter(new));
        }
        self.current = target;
        events
    }

    /// Clear the hovered element, returning the `Leave` if something was hovered.
    pub fn clear(&mut self) -> Option<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_from_nothing() {
        let mut hover = HoverState::new();
        assert_eq!(hover.update(Some(1_u32)).as_slice(), &[HoverEvent::Enter(1)]);
        assert_eq!(hover.current(), Some(1));
    }

    #[test]
    fn repeated_target_is_silent() {
        let mut hover = HoverState::new();
        hover.update(Some(1_u32));
        assert!(hover.update(Some(1)).is_empty());
        assert!(HoverState::<u32>::new().update(None).is_empty());
    }

    #[test]
    fn switching_targets_leaves_before_entering() {
        let mut hover = HoverState::new();
        hover.update(Some(1_u32));
        assert_eq!(
            hover.update(Some(2)).as_slice(),
            &[HoverEvent::Leave(1), HoverEvent::Enter(2)]
        );
    }

    #[test]
    fn clear_reports_leave_once() {
        let mut hover = HoverState::new();
        hover.update(Some(7_u32));
        assert_eq!(hover.clear(), Some(HoverEvent::Leave(7)));
        assert_eq!(hover.clear(), None);
        assert_eq!(hover.current(), None);
    }
}
