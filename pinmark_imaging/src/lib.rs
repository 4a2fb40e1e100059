// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinmark Imaging: the raster-surface command vocabulary.
//!
//! The canvas draws the loaded image onto a raster surface using a very small
//! set of operations: save and restore the surface state, set the current
//! transform, clear a device rectangle, and draw an image. These are expressed
//! as plain data ([`StateOp`], [`DrawOp`], combined into [`ImagingOp`]) and fed
//! to anything implementing [`ImagingBackend`].
//!
//! Concrete rasterizers live outside this crate. [`RecordingBackend`] records
//! every operation together with the surface state at the time it was applied,
//! which is what tests and the headless demo use.
//!
//! ```
//! use kurbo::{Affine, Point, Rect};
//! use pinmark_imaging::{
//!     DrawOp, ImageDesc, ImagingBackend, ImagingBackendExt, RecordingBackend, ResourceBackend,
//!     StateOp,
//! };
//!
//! let mut backend = RecordingBackend::default();
//! let image = backend.create_image(ImageDesc::new(400, 300));
//!
//! backend.with_saved(|b| {
//!     b.state(StateOp::SetTransform(Affine::IDENTITY));
//!     b.draw(DrawOp::clear(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! });
//! backend.state(StateOp::SetTransform(Affine::translate((200.0, 150.0))));
//! backend.draw(DrawOp::DrawImage { image, origin: Point::ORIGIN });
//!
//! assert_eq!(backend.ops().len(), 6);
//! assert_eq!(backend.save_depth(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;

pub use recording::{Event, RecordingBackend, StateSnapshot};

use kurbo::{Point, Rect};
use peniko::Color;

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Identifier for an image resource.
///
/// Stable for the lifetime of the resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Description of an image resource.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageDesc {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

impl ImageDesc {
    /// Creates an image description.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bounds of the image in its own pixel space, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Operations that change surface state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateOp {
    /// Push the current state (transform) on the save stack.
    Save,
    /// Pop the save stack, restoring the previous state.
    Restore,
    /// Replace the current transform.
    SetTransform(Affine),
}

/// Operations that produce pixels given the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill `rect` with `color`, replacing what was there.
    Clear {
        /// Rectangle, in the current transform's local space.
        rect: Rect,
        /// Replacement color.
        color: Color,
    },
    /// Draw an image at its natural size with its top-left corner at `origin`.
    DrawImage {
        /// Image resource to draw.
        image: ImageId,
        /// Top-left corner in local coordinates.
        origin: Point,
    },
}

impl DrawOp {
    /// Clear `rect` to transparent.
    #[must_use]
    pub const fn clear(rect: Rect) -> Self {
        Self::Clear {
            rect,
            color: Color::TRANSPARENT,
        }
    }
}

/// Unified imaging operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

impl From<StateOp> for ImagingOp {
    fn from(op: StateOp) -> Self {
        Self::State(op)
    }
}

impl From<DrawOp> for ImagingOp {
    fn from(op: DrawOp) -> Self {
        Self::Draw(op)
    }
}

/// Backends that own image resources.
pub trait ResourceBackend {
    /// Register an image and return its handle.
    fn create_image(&mut self, desc: ImageDesc) -> ImageId;

    /// Release an image. Unknown handles are ignored.
    fn destroy_image(&mut self, id: ImageId);

    /// Look up a live image.
    fn image(&self, id: ImageId) -> Option<&ImageDesc>;
}

/// Minimal imaging backend trait.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Apply either kind of operation.
    fn apply(&mut self, op: ImagingOp) {
        match op {
            ImagingOp::State(op) => self.state(op),
            ImagingOp::Draw(op) => self.draw(op),
        }
    }
}

/// Convenience helpers for [`ImagingBackend`].
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` between a `Save` and a matching `Restore`.
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.state(StateOp::Save);
        let out = f(self);
        self.state(StateOp::Restore);
        out
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}
