// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulated state changes with generation tracking.

use crate::StateChannels;

/// Accumulates marked channels for the render loop and for observers.
///
/// The two consumers drain independently: the render loop takes the visual
/// channels when it draws, and the editor takes the observable channels when
/// it finishes handling an event. A generation counter increments on every
/// non-empty mark so callers can detect stale work.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeTracker {
    redraw: StateChannels,
    unpublished: StateChannels,
    generation: u64,
}

impl ChangeTracker {
    /// Creates a tracker with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change on `channels`.
    pub fn mark(&mut self, channels: StateChannels) {
        if channels.is_empty() {
            return;
        }
        self.redraw |= channels & StateChannels::VISUAL;
        self.unpublished |= channels & StateChannels::OBSERVABLE;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Force a redraw without publishing anything, e.g. after a resize.
    pub fn request_redraw(&mut self) {
        self.redraw |= StateChannels::TRANSFORM;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns `true` if a visual channel changed since the last
    /// [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub fn is_redraw_pending(&self) -> bool {
        !self.redraw.is_empty()
    }

    /// Visual channels pending a redraw, without consuming them.
    #[must_use]
    pub fn pending_redraw(&self) -> StateChannels {
        self.redraw
    }

    /// Consume and return the visual channels pending a redraw.
    pub fn take_redraw(&mut self) -> StateChannels {
        core::mem::take(&mut self.redraw)
    }

    /// Observable channels changed since the last publish, without consuming them.
    #[must_use]
    pub fn unpublished(&self) -> StateChannels {
        self.unpublished
    }

    /// Consume and return the observable channels changed since the last publish.
    pub fn take_unpublished(&mut self) -> StateChannels {
        core::mem::take(&mut self.unpublished)
    }

    /// Current generation; increments on each non-empty mark.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
