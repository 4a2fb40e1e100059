// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend that records operations instead of rasterizing.
//!
//! It does not produce pixels. It tracks the surface state (transform and
//! save stack) and logs each operation together with a snapshot of that
//! state, so callers can assert on what was drawn and under which transform.

use alloc::vec::Vec;

use crate::{
    Affine, DrawOp, ImageDesc, ImageId, ImagingBackend, ImagingOp, ResourceBackend, StateOp,
};

/// Snapshot of the surface state inside the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Number of entries on the save stack.
    pub save_depth: u32,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            save_depth: 0,
        }
    }
}

/// Event recorded by [`RecordingBackend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Recording implementation of [`ImagingBackend`].
#[derive(Default, Debug)]
pub struct RecordingBackend {
    images: Vec<Option<ImageDesc>>,
    events: Vec<Event>,
    ops: Vec<ImagingOp>,
    state: StateSnapshot,
    save_stack: Vec<Affine>,
    unbalanced_restores: u32,
}

impl RecordingBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in the order they were applied.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Raw operations in the order they were applied.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Draw operations with the transform each one was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, Affine)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state.transform)),
            Event::State { .. } => None,
        })
    }

    /// Current surface state.
    #[must_use]
    pub fn current_state(&self) -> StateSnapshot {
        self.state
    }

    /// Depth of the save stack.
    #[must_use]
    pub fn save_depth(&self) -> u32 {
        self.state.save_depth
    }

    /// Number of `Restore` operations that found an empty save stack.
    #[must_use]
    pub fn unbalanced_restores(&self) -> u32 {
        self.unbalanced_restores
    }

    /// Clears recorded events and ops but keeps resources and state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl ResourceBackend for RecordingBackend {
    fn create_image(&mut self, desc: ImageDesc) -> ImageId {
        let id = u32::try_from(self.images.len()).unwrap_or(u32::MAX);
        self.images.push(Some(desc));
        ImageId(id)
    }

    fn destroy_image(&mut self, id: ImageId) {
        if let Some(slot) = self.images.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    fn image(&self, id: ImageId) -> Option<&ImageDesc> {
        self.images.get(id.0 as usize).and_then(Option::as_ref)
    }
}

impl ImagingBackend for RecordingBackend {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::Save => {
                self.save_stack.push(self.state.transform);
            }
            StateOp::Restore => match self.save_stack.pop() {
                Some(transform) => self.state.transform = transform,
                None => self.unbalanced_restores += 1,
            },
            StateOp::SetTransform(transform) => {
                self.state.transform = transform;
            }
        }
        self.state.save_depth = u32::try_from(self.save_stack.len()).unwrap_or(u32::MAX);
        self.ops.push(ImagingOp::State(op));
        self.events.push(Event::State {
            op,
            state: self.state,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op));
        self.events.push(Event::Draw {
            op,
            state: self.state,
        });
    }
}
