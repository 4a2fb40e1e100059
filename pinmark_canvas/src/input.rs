// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// A pointer or wheel event in device pixels.
///
/// Hosts translate their windowing events into these and feed them to
/// [`Editor::handle`](crate::Editor::handle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved, pressed or not.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// The platform took the pointer away mid-gesture.
    PointerCancel,
    /// Vertical wheel movement over `pos`. Positive is away from the user.
    Wheel {
        /// Cursor position.
        pos: Point,
        /// Scroll amount; only the sign is used.
        delta_y: f64,
    },
}

impl InputEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown(p) | Self::PointerMove(p) | Self::PointerUp(p) => Some(p),
            Self::Wheel { pos, .. } => Some(pos),
            Self::PointerCancel => None,
        }
    }
}
