// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track a drag session bound to a target.
//!
//! ## Usage
//!
//! 1) Start a drag on a target with [`DragState::start`] and the press position.
//! 2) On each move, call [`DragState::update`] to record the live position
//!    (and optionally get the incremental device delta).
//! 3) Finish with [`DragState::end`], which hands back the completed
//!    [`DragSession`] so the caller can commit it, or [`DragState::cancel`]
//!    to drop it.
//!
//! Positions are device-space. Committing a session is the caller's job: map
//! `start_pos` and the release position through the transform that is current
//! *at commit time* and apply the difference.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pinmark_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(3_u64, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(total, Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// A drag in progress: which target, where it started, where the pointer is now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession<K> {
    /// The element being dragged.
    pub target: K,
    /// Device position of the press that started the drag.
    pub start_pos: Point,
    /// Last recorded device position during the drag.
    pub last_pos: Point,
}

impl<K> DragSession<K> {
    /// Device-space offset from the start to the last recorded position.
    #[must_use]
    pub fn device_offset(&self) -> Vec2 {
        self.last_pos - self.start_pos
    }
}

/// Tracks at most one drag session.
#[derive(Debug, Clone, Copy)]
pub struct DragState<K> {
    session: Option<DragSession<K>>,
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<K> DragState<K> {
    /// Start tracking a drag of `target` from `pos`.
    ///
    /// Any session already in progress is replaced without being committed.
    pub fn start(&mut self, target: K, pos: Point) {
        self.session = Some(DragSession {
            target,
            start_pos: pos,
            last_pos: pos,
        });
    }

    /// Record a new pointer position, returning the delta since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        let delta = pos - session.last_pos;
        session.last_pos = pos;
        Some(delta)
    }

    /// Get the device-space offset from the drag start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.session.as_ref().map(|s| current_pos - s.start_pos)
    }

    /// Returns the session in progress, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Returns the dragged target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&K> {
        self.session.as_ref().map(|s| &s.target)
    }

    /// Returns the live pointer position of the drag, if any.
    #[must_use]
    pub fn live_pos(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.last_pos)
    }

    /// End the drag and return the completed session for committing.
    pub fn end(&mut self) -> Option<DragSession<K>> {
        self.session.take()
    }

    /// Drop the drag without returning it.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}
