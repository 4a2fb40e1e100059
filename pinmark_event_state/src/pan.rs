// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state helper: yield consecutive device positions while panning.
//!
//! A pan is a background drag. Unlike [`crate::drag`], it commits
//! continuously: every move produces a [`PanStep`] whose two endpoints the
//! caller maps through the current inverse transform and applies as a
//! content-space translation.
//!
//! ```
//! use kurbo::Point;
//! use pinmark_event_state::pan::PanState;
//!
//! let mut pan = PanState::default();
//! pan.start(Point::new(100.0, 100.0));
//!
//! let step = pan.update(Point::new(110.0, 95.0)).unwrap();
//! assert_eq!(step.from, Point::new(100.0, 100.0));
//! assert_eq!(step.to, Point::new(110.0, 95.0));
//!
//! pan.end();
//! assert!(pan.update(Point::new(0.0, 0.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// One pan movement between two device positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanStep {
    /// Previous device position.
    pub from: Point,
    /// Current device position.
    pub to: Point,
}

impl PanStep {
    /// Device-space movement of this step.
    #[must_use]
    pub fn device_delta(&self) -> Vec2 {
        self.to - self.from
    }
}

/// Tracks whether a pan is in progress and the last pointer position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanState {
    last_pos: Option<Point>,
}

impl PanState {
    /// Begin panning from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Record a move to `pos`, returning the step from the previous position.
    pub fn update(&mut self, pos: Point) -> Option<PanStep> {
        let from = self.last_pos?;
        self.last_pos = Some(pos);
        Some(PanStep { from, to: pos })
    }

    /// Stop panning.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Last recorded device position, if panning.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_start_is_ignored() {
        let mut pan = PanState::default();
        assert_eq!(pan.update(Point::new(1.0, 1.0)), None);
        // A stray move must not arm the gesture.
        assert!(!pan.is_panning());
    }

    #[test]
    fn steps_chain_from_previous_position() {
        let mut pan = PanState::default();
        pan.start(Point::new(0.0, 0.0));

        let a = pan.update(Point::new(5.0, 0.0)).unwrap();
        let b = pan.update(Point::new(5.0, 7.0)).unwrap();

        assert_eq!(a.device_delta(), Vec2::new(5.0, 0.0));
        assert_eq!(b.from, a.to);
        assert_eq!(b.device_delta(), Vec2::new(0.0, 7.0));
        assert_eq!(pan.last_pos(), Some(Point::new(5.0, 7.0)));
    }

    #[test]
    fn end_stops_panning() {
        let mut pan = PanState::default();
        pan.start(Point::new(3.0, 4.0));
        pan.end();
        assert!(!pan.is_panning());
        assert_eq!(pan.last_pos(), None);
    }
}
