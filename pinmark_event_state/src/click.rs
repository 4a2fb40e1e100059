// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition: a press and release that stay within a spatial slop.
//!
//! A pointer that wanders further than the slop at any point between press
//! and release does not produce a click, even if it comes back. This keeps a
//! pan that happens to end near its start from being read as a click.
//!
//! ```
//! use kurbo::Point;
//! use pinmark_event_state::click::{ClickResult, ClickState};
//!
//! let mut clicks = ClickState::new(3.0);
//! clicks.on_down(Point::new(10.0, 20.0));
//! assert_eq!(
//!     clicks.on_up(Point::new(11.0, 21.0)),
//!     ClickResult::Click(Point::new(10.0, 20.0))
//! );
//!
//! clicks.on_down(Point::new(10.0, 20.0));
//! clicks.on_move(Point::new(40.0, 20.0));
//! assert_eq!(clicks.on_up(Point::new(10.0, 20.0)), ClickResult::None);
//! ```

use kurbo::Point;

/// Result of a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// The press/release pair was a click at the given press position.
    Click(Point),
    /// No click: there was no press, or the pointer moved beyond the slop.
    None,
}

/// Press tracking for click recognition.
#[derive(Debug, Clone, Copy)]
pub struct ClickState {
    slop: f64,
    down_pos: Option<Point>,
    exceeded: bool,
}

impl Default for ClickState {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl ClickState {
    /// Creates a recognizer accepting releases within `slop` device pixels.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            down_pos: None,
            exceeded: false,
        }
    }

    /// Returns the configured slop in device pixels.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Record a press.
    pub fn on_down(&mut self, pos: Point) {
        self.down_pos = Some(pos);
        self.exceeded = false;
    }

    /// Record pointer movement while pressed.
    pub fn on_move(&mut self, pos: Point) {
        if let Some(down) = self.down_pos
            && (pos - down).hypot() > self.slop
        {
            self.exceeded = true;
        }
    }

    /// Record a release and decide whether it completes a click.
    pub fn on_up(&mut self, pos: Point) -> ClickResult {
        self.on_move(pos);
        let result = match self.down_pos.take() {
            Some(down) if !self.exceeded => ClickResult::Click(down),
            _ => ClickResult::None,
        };
        self.exceeded = false;
        result
    }

    /// Forget any pending press.
    pub fn cancel(&mut self) {
        self.down_pos = None;
        self.exceeded = false;
    }

    /// Returns `true` while a press is pending.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut clicks = ClickState::default();
        assert_eq!(clicks.on_up(Point::new(1.0, 1.0)), ClickResult::None);
    }

    #[test]
    fn release_on_the_boundary_is_a_click() {
        let mut clicks = ClickState::new(5.0);
        clicks.on_down(Point::new(0.0, 0.0));
        assert_eq!(
            clicks.on_up(Point::new(3.0, 4.0)),
            ClickResult::Click(Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn release_beyond_slop_is_not_a_click() {
        let mut clicks = ClickState::new(2.0);
        clicks.on_down(Point::new(0.0, 0.0));
        assert_eq!(clicks.on_up(Point::new(3.0, 0.0)), ClickResult::None);
        assert!(!clicks.is_pressed());
    }

    #[test]
    fn excursion_is_remembered_until_next_press() {
        let mut clicks = ClickState::new(2.0);
        clicks.on_down(Point::new(0.0, 0.0));
        clicks.on_move(Point::new(10.0, 0.0));
        clicks.on_move(Point::new(0.0, 0.0));
        assert_eq!(clicks.on_up(Point::new(0.0, 0.0)), ClickResult::None);

        clicks.on_down(Point::new(0.0, 0.0));
        assert_eq!(
            clicks.on_up(Point::new(0.5, 0.0)),
            ClickResult::Click(Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn cancel_forgets_press() {
        let mut clicks = ClickState::new(2.0);
        clicks.on_down(Point::new(0.0, 0.0));
        clicks.cancel();
        assert_eq!(clicks.on_up(Point::new(0.0, 0.0)), ClickResult::None);
    }

    #[test]
    fn negative_slop_is_clamped() {
        assert_eq!(ClickState::new(-1.0).slop(), 0.0);
    }
}
