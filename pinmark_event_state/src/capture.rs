// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture for the lifetime of a gesture.
//!
//! A gesture that starts on the canvas must keep receiving moves and its
//! release even when the pointer leaves the canvas bounds. Rather than
//! attaching global listeners and hoping they get removed, a controller
//! *acquires* a [`GestureCapture`] when the gesture starts and *releases* it
//! on the terminal event, on cancellation, or on teardown. While the capture
//! is held, the host routes all pointer events to its owner.
//!
//! The capture keeps acquire/release counters so hosts and tests can check
//! that every acquisition was balanced by a release.
//!
//! ```
//! use pinmark_event_state::capture::GestureCapture;
//!
//! let mut capture = GestureCapture::new();
//! capture.acquire("pan");
//! // A second acquisition force-releases the first owner.
//! assert_eq!(capture.acquire("drag"), Some("pan"));
//! assert_eq!(capture.release(), Some("drag"));
//! assert_eq!(capture.release(), None);
//! assert!(capture.is_balanced());
//! ```

/// Single-owner pointer capture.
#[derive(Debug, Clone)]
pub struct GestureCapture<G> {
    owner: Option<G>,
    acquired: u64,
    released: u64,
}

impl<G> Default for GestureCapture<G> {
    fn default() -> Self {
        Self {
            owner: None,
            acquired: 0,
            released: 0,
        }
    }
}

impl<G> GestureCapture<G> {
    /// Creates a capture with no owner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the capture to `owner`, returning the previous owner if one was
    /// still holding it. The previous owner counts as released.
    pub fn acquire(&mut self, owner: G) -> Option<G> {
        let previous = self.release();
        self.owner = Some(owner);
        self.acquired += 1;
        previous
    }

    /// Release the capture, returning the owner that held it.
    pub fn release(&mut self) -> Option<G> {
        let owner = self.owner.take()?;
        self.released += 1;
        Some(owner)
    }

    /// Returns the current owner.
    #[must_use]
    pub fn owner(&self) -> Option<&G> {
        self.owner.as_ref()
    }

    /// Returns `true` while any owner holds the capture.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.owner.is_some()
    }

    /// Returns `true` when every acquisition has been matched by a release.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.owner.is_none() && self.acquired == self.released
    }

    /// Number of acquisitions so far.
    #[must_use]
    pub fn acquired_count(&self) -> u64 {
        self.acquired
    }
}

impl<G: PartialEq> GestureCapture<G> {
    /// Returns `true` if `owner` currently holds the capture.
    #[must_use]
    pub fn is_held_by(&self, owner: &G) -> bool {
        self.owner.as_ref() == Some(owner)
    }

    /// Release only if `owner` holds the capture.
    pub fn release_if_held_by(&mut self, owner: &G) -> bool {
        if self.is_held_by(owner) {
            self.release();
            true
        } else {
            false
        }
    }
}
